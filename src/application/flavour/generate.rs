//! Flavour generation - seed a new flavour config and let the build system
//! normalize it.

use std::path::{Path, PathBuf};

use crate::domain::entities::{Flavour, GeneratedConfig, KernelTree, BASE_FLAVOUR};
use crate::domain::ports::{
    CommandRunner, CommandSpec, FileSystem, FlavourEvent, FlavourEventSink, Operator,
};
use crate::error::{PrepError, PrepResult};

use super::build_system::BuildSystem;

pub struct FlavourGenerator<'a, FS, CR, OP, ES>
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
    boot_dir: &'a Path,
}

impl<'a, FS, CR, OP, ES> FlavourGenerator<'a, FS, CR, OP, ES>
where
    FS: FileSystem,
    CR: CommandRunner,
    OP: Operator,
    ES: FlavourEventSink,
{
    pub fn new(
        fs: FS,
        runner: CR,
        operator: OP,
        events: ES,
        build: &'a BuildSystem,
        boot_dir: &'a Path,
    ) -> Self {
        Self {
            fs,
            runner,
            operator,
            events,
            build,
            boot_dir,
        }
    }

    /// Create `config.flavour.<name>` and return its normalized content.
    ///
    /// Nothing destructive happens here; a failure leaves at most the copied
    /// seed and whatever the build targets produced.
    pub fn generate(&self, tree: &KernelTree, flavour: &Flavour) -> PrepResult<GeneratedConfig> {
        let baseline = tree.flavour_config(&flavour.arch, BASE_FLAVOUR);
        if !self.fs.exists(&baseline) {
            return Err(PrepError::MissingFile {
                what: format!("baseline {} config", BASE_FLAVOUR),
                path: baseline,
            });
        }

        let seed = self.choose_seed(baseline)?;
        let dest = tree.flavour_config(&flavour.arch, &flavour.name);
        self.fs.copy(&seed, &dest).map_err(|e| {
            PrepError::fs(
                format!("copying '{}' to '{}'", seed.display(), dest.display()),
                e,
            )
        })?;
        self.events.on_event(FlavourEvent::Seeded {
            seed,
            flavour: flavour.name.clone(),
        });

        self.events.on_event(FlavourEvent::Cleaning);
        self.runner
            .run_checked(&self.build.target("clean"), "cleaning kernel dir")?;

        self.events.on_event(FlavourEvent::UpdatingConfigs);
        self.runner
            .run_checked(&self.build.target("updateconfigs"), "updating configs")?;

        let content = self.fs.read(&dest).map_err(|e| {
            PrepError::fs(
                format!("reading the generated config file '{}'", dest.display()),
                e,
            )
        })?;
        Ok(GeneratedConfig(content))
    }

    /// Baseline config, or the running kernel's if the operator prefers it.
    fn choose_seed(&self, baseline: PathBuf) -> PrepResult<PathBuf> {
        let Some(running) = self.running_kernel_config()? else {
            return Ok(baseline);
        };
        let prompt = format!(
            "Seed the new flavour from the running kernel config '{}' instead of {} (y/N)?",
            running.display(),
            BASE_FLAVOUR
        );
        if self.operator.confirm(&prompt)? {
            Ok(running)
        } else {
            Ok(baseline)
        }
    }

    /// `<boot_dir>/config-<uname -r>` if it exists.
    fn running_kernel_config(&self) -> PrepResult<Option<PathBuf>> {
        let captured = match self.runner.capture(&CommandSpec::new("uname").arg("-r")) {
            Ok(captured) => captured,
            Err(err) => {
                tracing::warn!(error = %err, "could not run 'uname -r'");
                return Ok(None);
            }
        };
        let release = captured.output.trim();
        if !captured.status.success() || release.is_empty() {
            tracing::warn!(
                output = %release,
                "could not read the running kernel release with 'uname -r'"
            );
            return Ok(None);
        }
        let path = self.boot_dir.join(format!("config-{}", release));
        if self.fs.exists(&path) {
            Ok(Some(path))
        } else {
            tracing::debug!(path = %path.display(), "no config for running kernel");
            Ok(None)
        }
    }
}
