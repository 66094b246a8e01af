//! Flavour patching - reset the tree and register the new flavour
//!
//! Steps run strictly in order and the first failure stops the run. There is
//! no rollback: the tree is left as the last successful step made it.

use std::path::{Path, PathBuf};

use crate::domain::entities::{Flavour, GeneratedConfig, KernelTree, BASE_FLAVOUR};
use crate::domain::policies::RegistrationPolicy;
use crate::domain::ports::{
    CommandRunner, CommandSpec, FileSystem, FlavourEvent, FlavourEventSink, Operator,
};
use crate::domain::value_objects::select_latest;
use crate::error::{PrepError, PrepResult};

use super::build_system::BuildSystem;

/// How the local version suffix is obtained
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalVersion {
    /// Given on the command line
    Given(String),
    /// Ask the operator after the reset; an empty answer skips it
    Ask,
}

/// Result of a patch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// Operator declined the reset; the tree was not touched
    Cancelled,
    Patched(PatchReport),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
    pub abi_version: String,
    pub local_version: Option<String>,
    /// Build-control files the flavour was appended to
    pub registered: Vec<PathBuf>,
}

pub struct FlavourPatcher<'a, FS, CR, OP, ES>
where
    FS: FileSystem,
    CR: CommandRunner,
    OP: Operator,
    ES: FlavourEventSink,
{
    fs: FS,
    runner: CR,
    operator: OP,
    events: ES,
    build: &'a BuildSystem,
}

impl<'a, FS, CR, OP, ES> FlavourPatcher<'a, FS, CR, OP, ES>
where
    FS: FileSystem,
    CR: CommandRunner,
    OP: Operator,
    ES: FlavourEventSink,
{
    pub fn new(fs: FS, runner: CR, operator: OP, events: ES, build: &'a BuildSystem) -> Self {
        Self {
            fs,
            runner,
            operator,
            events,
            build,
        }
    }

    pub fn patch(
        &self,
        tree: &KernelTree,
        flavour: &Flavour,
        config: &GeneratedConfig,
        local: &LocalVersion,
    ) -> PrepResult<PatchOutcome> {
        if !self.confirm_reset()? {
            return Ok(PatchOutcome::Cancelled);
        }

        self.reset(tree)?;
        let local_version = self.register_local_version(tree, flavour, local)?;
        self.restore_config(tree, flavour, config)?;

        let abi_version = self.latest_abi(tree)?;
        self.clone_abi_files(tree, flavour, &abi_version)?;

        let registered = self.register_flavour(tree, flavour)?;
        self.clone_vars(tree, flavour)?;

        self.events.on_event(FlavourEvent::FinalClean);
        self.runner
            .run_checked(&self.build.target("clean"), "final kernel dir clean")?;

        Ok(PatchOutcome::Patched(PatchReport {
            abi_version,
            local_version,
            registered,
        }))
    }

    fn confirm_reset(&self) -> PrepResult<bool> {
        self.operator
            .notify("Need to clear out the build dir, this will delete everything not committed!!!");
        self.operator.confirm("Are you sure (y/N)?")
    }

    fn reset(&self, tree: &KernelTree) -> PrepResult<()> {
        self.events.on_event(FlavourEvent::Resetting);
        let git = |args: &[&str]| {
            CommandSpec::new("git")
                .args(args.iter().copied())
                .current_dir(&tree.root)
        };
        self.runner
            .run_checked(&git(&["reset", "--hard"]), "git-resetting")?;
        self.runner.run_checked(&git(&["clean", "-df"]), "git-cleaning")
    }

    fn register_local_version(
        &self,
        tree: &KernelTree,
        flavour: &Flavour,
        local: &LocalVersion,
    ) -> PrepResult<Option<String>> {
        let suffix = match local {
            LocalVersion::Given(suffix) => suffix.trim().to_string(),
            LocalVersion::Ask => self
                .operator
                .read_line("Local version suffix (leave empty to skip):")?
                .unwrap_or_default()
                .trim()
                .to_string(),
        };
        if suffix.is_empty() {
            return Ok(None);
        }

        let changelog = tree.changelog();
        if !self.fs.exists(&changelog) {
            return Err(PrepError::MissingFile {
                what: "changelog".to_string(),
                path: changelog,
            });
        }

        let spec = CommandSpec::new("dch")
            .arg("--changelog")
            .arg(changelog.display().to_string())
            .arg("--local")
            .arg(&suffix)
            .arg(format!("{} flavour build", flavour.name))
            .current_dir(&tree.root);
        self.runner
            .run_checked(&spec, "adding local version to changelog")?;

        self.events.on_event(FlavourEvent::LocalVersion {
            suffix: suffix.clone(),
        });
        Ok(Some(suffix))
    }

    fn restore_config(
        &self,
        tree: &KernelTree,
        flavour: &Flavour,
        config: &GeneratedConfig,
    ) -> PrepResult<()> {
        let path = tree.flavour_config(&flavour.arch, &flavour.name);
        self.fs.write(&path, config.as_str()).map_err(|e| {
            PrepError::fs(
                format!("writing back kernel config to '{}'", path.display()),
                e,
            )
        })?;
        self.events.on_event(FlavourEvent::ConfigRestored { path });
        Ok(())
    }

    fn latest_abi(&self, tree: &KernelTree) -> PrepResult<String> {
        let abi_root = tree.abi_root();
        let empty = || PrepError::EmptyAbiDirectory {
            path: abi_root.clone(),
        };
        if !self.fs.is_dir(&abi_root) {
            return Err(empty());
        }
        let names = self
            .fs
            .list_dirs(&abi_root)
            .map_err(|e| PrepError::fs(format!("listing '{}'", abi_root.display()), e))?;
        let selection = select_latest(&names).ok_or_else(empty)?;

        if let Some(natural) = &selection.natural_choice {
            tracing::warn!(
                chosen = %selection.chosen,
                natural = %natural,
                "ABI directory names do not sort as versions; using the lexicographically greatest"
            );
        }

        self.events.on_event(FlavourEvent::AbiSelected {
            version: selection.chosen.clone(),
        });
        Ok(selection.chosen)
    }

    fn clone_abi_files(
        &self,
        tree: &KernelTree,
        flavour: &Flavour,
        abi_version: &str,
    ) -> PrepResult<()> {
        let abi_dir = tree.abi_root().join(abi_version).join(&flavour.arch);
        let generic = abi_dir.join(BASE_FLAVOUR);
        let generic_modules = abi_dir.join(format!("{}.modules", BASE_FLAVOUR));

        for (what, path) in [
            ("generic abi file", &generic),
            ("generic abi modules file", &generic_modules),
        ] {
            if !self.fs.exists(path) {
                return Err(PrepError::MissingFile {
                    what: what.to_string(),
                    path: path.clone(),
                });
            }
        }

        self.copy(&generic, &abi_dir.join(&flavour.name))?;
        self.copy(&generic_modules, &abi_dir.join(flavour.modules_name()))
    }

    fn register_flavour(&self, tree: &KernelTree, flavour: &Flavour) -> PrepResult<Vec<PathBuf>> {
        let targets = [
            (tree.getabis(), RegistrationPolicy::getabis(&flavour.arch)?),
            (tree.rules_mk(&flavour.arch), RegistrationPolicy::rules_flavours()?),
        ];

        let mut registered = Vec::with_capacity(targets.len());
        for (file, policy) in targets {
            let context = || format!("appending flavour to '{}'", file.display());
            let content = self
                .fs
                .read(&file)
                .map_err(|e| PrepError::fs(context(), e))?;

            let rewrite = policy.apply(&content, &flavour.name);
            if rewrite.matched == 0 {
                tracing::warn!(
                    file = %file.display(),
                    policy = policy.name(),
                    pattern = policy.pattern(),
                    "no line matched, flavour not registered in this file"
                );
            }

            self.fs
                .write(&file, &rewrite.content)
                .map_err(|e| PrepError::fs(context(), e))?;
            self.events.on_event(FlavourEvent::Registered {
                file: file.clone(),
                lines: rewrite.matched,
            });
            registered.push(file);
        }
        Ok(registered)
    }

    fn clone_vars(&self, tree: &KernelTree, flavour: &Flavour) -> PrepResult<()> {
        let source = tree.vars(BASE_FLAVOUR);
        if !self.fs.exists(&source) {
            return Err(PrepError::MissingFile {
                what: "file".to_string(),
                path: source,
            });
        }
        let dest = tree.vars(&flavour.name);
        self.copy(&source, &dest)?;
        self.events.on_event(FlavourEvent::VarsCopied { path: dest });
        Ok(())
    }

    fn copy(&self, from: &Path, to: &Path) -> PrepResult<()> {
        self.fs.copy(from, to).map_err(|e| {
            PrepError::fs(
                format!("copying '{}' to '{}'", from.display(), to.display()),
                e,
            )
        })
    }
}
