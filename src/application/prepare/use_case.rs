//! Prepare Use Case
//!
//! Bootstraps (if needed) and configures projects against a shared prefix.

use std::path::PathBuf;

use crate::domain::entities::{Project, NOCONFIGURE_VAR};
use crate::domain::ports::{
    CommandRunner, CommandSpec, FileSystem, PrepareEvent, PrepareEventSink,
};
use crate::domain::value_objects::ConfigureOptions;
use crate::error::{PrepError, PrepResult};

use super::layout::DirectoryLayout;

/// What happened to one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepareReport {
    pub project: String,
    /// Bootstrap script that was run, if any
    pub bootstrapped_with: Option<PathBuf>,
    pub build_dir: PathBuf,
}

/// Prepares projects one after another
pub struct RepoPreparer<'a, FS, CR, ES>
where
    FS: FileSystem,
    CR: CommandRunner,
    ES: PrepareEventSink,
{
    layout: &'a DirectoryLayout,
    fs: FS,
    runner: CR,
    events: ES,
}

impl<'a, FS, CR, ES> RepoPreparer<'a, FS, CR, ES>
where
    FS: FileSystem,
    CR: CommandRunner,
    ES: PrepareEventSink,
{
    pub fn new(layout: &'a DirectoryLayout, fs: FS, runner: CR, events: ES) -> Self {
        Self {
            layout,
            fs,
            runner,
            events,
        }
    }

    /// Prepare every named project in order, stopping at the first failure.
    pub fn prepare_all<S: AsRef<str>>(&self, names: &[S]) -> PrepResult<Vec<PrepareReport>> {
        names
            .iter()
            .map(|name| self.prepare(&self.layout.project(name.as_ref())))
            .collect()
    }

    /// Bootstrap and configure a single project.
    pub fn prepare(&self, project: &Project) -> PrepResult<PrepareReport> {
        self.events.on_event(PrepareEvent::SettingUp {
            project: project.name.clone(),
        });

        if !self.fs.is_dir(&project.source_dir) {
            return Err(PrepError::MissingSourceDir {
                project: project.name.clone(),
                path: project.source_dir.clone(),
            });
        }

        self.layout.create_missing(&self.fs, project)?;

        let bootstrapped_with = self.bootstrap(project)?;
        self.configure(project)?;

        self.events.on_event(PrepareEvent::Finished {
            project: project.name.clone(),
            build_dir: project.build_dir.clone(),
        });

        Ok(PrepareReport {
            project: project.name.clone(),
            bootstrapped_with,
            build_dir: project.build_dir.clone(),
        })
    }

    /// Run the first available bootstrap script unless `configure` exists.
    fn bootstrap(&self, project: &Project) -> PrepResult<Option<PathBuf>> {
        let configure = project.configure_script();
        if self.fs.exists(&configure) {
            self.events.on_event(PrepareEvent::AlreadyBootstrapped {
                project: project.name.clone(),
            });
            return Ok(None);
        }

        let candidates = project.bootstrap_candidates();
        let script = candidates
            .iter()
            .find(|candidate| self.fs.exists(candidate))
            .cloned()
            .ok_or_else(|| PrepError::NoBootstrapScript {
                configure: configure.clone(),
                candidates: candidates
                    .iter()
                    .map(|c| format!("'{}'", c.display()))
                    .collect::<Vec<_>>()
                    .join(", "),
            })?;

        self.events.on_event(PrepareEvent::NeedsBootstrap {
            project: project.name.clone(),
            script: script.clone(),
        });

        // Out-of-tree configure happens below, so keep the script from
        // running it in the source tree.
        let spec = CommandSpec::new(script.display().to_string())
            .current_dir(&project.source_dir)
            .env(NOCONFIGURE_VAR, "1");
        self.runner
            .run_checked(&spec, &format!("bootstrapping {}", project.name))?;

        Ok(Some(script))
    }

    fn configure(&self, project: &Project) -> PrepResult<()> {
        let options = self.load_options(project)?;

        self.events.on_event(PrepareEvent::Configuring {
            project: project.name.clone(),
            options: options.joined(),
        });

        let mut spec = CommandSpec::new(project.configure_script().display().to_string())
            .current_dir(&project.build_dir)
            .arg(project.prefix_arg())
            .args(options.args().iter().cloned());
        for (key, value) in project.configure_env() {
            spec = spec.env(key, value);
        }

        self.runner
            .run_checked(&spec, &format!("configuring {}", project.name))
    }

    /// Options from `<project>.conf`; a missing file means no options.
    fn load_options(&self, project: &Project) -> PrepResult<ConfigureOptions> {
        if !self.fs.exists(&project.option_file) {
            return Ok(ConfigureOptions::default());
        }
        let content = self.fs.read(&project.option_file).map_err(|e| {
            PrepError::fs(
                format!(
                    "opening configure options file '{}'",
                    project.option_file.display()
                ),
                e,
            )
        })?;
        Ok(ConfigureOptions::parse(&content))
    }
}
