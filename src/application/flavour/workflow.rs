//! Flavour workflow - probe, select, generate, patch

use std::path::PathBuf;

use crate::config::KernelConfig;
use crate::domain::entities::{validate_name, Flavour};
use crate::domain::ports::{CommandRunner, FileSystem, FlavourEventSink, Operator};
use crate::error::PrepResult;

use super::arch::ArchitectureSelector;
use super::build_system::BuildSystem;
use super::generate::FlavourGenerator;
use super::patch::{FlavourPatcher, LocalVersion, PatchOutcome, PatchReport};
use super::probe::{EnvironmentProbe, ProbeReport};

/// What the operator asked for on the command line
#[derive(Debug, Clone)]
pub struct FlavourRequest {
    /// Top directory of the kernel tree
    pub root: PathBuf,
    pub flavour: String,
    pub local: LocalVersion,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlavourReport {
    pub probe: ProbeReport,
    pub flavour: Flavour,
    pub patch: PatchReport,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowOutcome {
    Cancelled,
    Completed(FlavourReport),
}

pub struct FlavourWorkflow<'a, FS, CR, OP, ES>
where
    FS: FileSystem,
    CR: CommandRunner,
    OP: Operator,
    ES: FlavourEventSink,
{
    config: &'a KernelConfig,
    fs: FS,
    runner: CR,
    operator: OP,
    events: ES,
}

impl<'a, FS, CR, OP, ES> FlavourWorkflow<'a, FS, CR, OP, ES>
where
    FS: FileSystem,
    CR: CommandRunner,
    OP: Operator,
    ES: FlavourEventSink,
{
    pub fn new(config: &'a KernelConfig, fs: FS, runner: CR, operator: OP, events: ES) -> Self {
        Self {
            config,
            fs,
            runner,
            operator,
            events,
        }
    }

    pub fn run(&self, request: &FlavourRequest) -> PrepResult<WorkflowOutcome> {
        validate_name(&request.flavour)?;

        let probe = EnvironmentProbe::new(&self.fs, &self.runner)
            .probe(&request.root, &self.config.known_codenames)?;
        let tree = &probe.tree;

        let arch = ArchitectureSelector::new(&self.fs, &self.operator).select(tree)?;
        let flavour = Flavour::new(request.flavour.as_str(), arch)?;
        tracing::info!(flavour = %flavour.name, arch = %flavour.arch, "creating flavour");

        let build = BuildSystem::new(tree, self.config.fakeroot);
        let generated = FlavourGenerator::new(
            &self.fs,
            &self.runner,
            &self.operator,
            &self.events,
            &build,
            &self.config.boot_dir,
        )
        .generate(tree, &flavour)?;

        let outcome = FlavourPatcher::new(
            &self.fs,
            &self.runner,
            &self.operator,
            &self.events,
            &build,
        )
        .patch(tree, &flavour, &generated, &request.local)?;

        Ok(match outcome {
            PatchOutcome::Cancelled => WorkflowOutcome::Cancelled,
            PatchOutcome::Patched(patch) => WorkflowOutcome::Completed(FlavourReport {
                probe,
                flavour,
                patch,
            }),
        })
    }
}
