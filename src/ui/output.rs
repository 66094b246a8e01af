//! Progress lines printed between subprocess output

use crate::domain::ports::{FlavourEvent, FlavourEventSink, PrepareEvent, PrepareEventSink};

/// Text of the `Info:` line for a prepare event
pub fn format_prepare_event(event: &PrepareEvent) -> String {
    match event {
        PrepareEvent::SettingUp { project } => format!("Info: setting up {}", project),
        PrepareEvent::NeedsBootstrap { project, script } => {
            format!("Info: {} needs bootstrap ({})", project, script.display())
        }
        PrepareEvent::AlreadyBootstrapped { project } => {
            format!("Info: {} is already bootstrapped", project)
        }
        PrepareEvent::Configuring { project, options } if options.is_empty() => {
            format!("Info: configuring {}", project)
        }
        PrepareEvent::Configuring { project, options } => {
            format!("Info: configuring {} with options: {}", project, options)
        }
        PrepareEvent::Finished { project, build_dir } => format!(
            "Info: finished setting up {}, cd to {} for building\n",
            project,
            build_dir.display()
        ),
    }
}

/// Text of the progress line for a flavour event
pub fn format_flavour_event(event: &FlavourEvent) -> String {
    match event {
        FlavourEvent::Seeded { seed, flavour } => format!(
            "using '{}' to create new flavour {}",
            seed.display(),
            flavour
        ),
        FlavourEvent::Cleaning => "cleaning kernel dir".to_string(),
        FlavourEvent::UpdatingConfigs => "updating configs".to_string(),
        FlavourEvent::Resetting => "resetting working tree".to_string(),
        FlavourEvent::LocalVersion { suffix } => {
            format!("added local version '{}' to the changelog", suffix)
        }
        FlavourEvent::ConfigRestored { path } => {
            format!("copied back kernel config to '{}'", path.display())
        }
        FlavourEvent::AbiSelected { version } => format!("using abi {}", version),
        FlavourEvent::Registered { file, lines } => format!(
            "appended flavour to {} ({} line{})",
            file.display(),
            lines,
            if *lines == 1 { "" } else { "s" }
        ),
        FlavourEvent::VarsCopied { path } => format!("created {}", path.display()),
        FlavourEvent::FinalClean => {
            "final kernel dir clean to generate the correct debian files".to_string()
        }
    }
}

/// Prints prepare progress to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsolePrepareSink;

impl PrepareEventSink for ConsolePrepareSink {
    fn on_event(&self, event: PrepareEvent) {
        println!("{}", format_prepare_event(&event));
    }
}

/// Prints flavour progress to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleFlavourSink;

impl FlavourEventSink for ConsoleFlavourSink {
    fn on_event(&self, event: FlavourEvent) {
        println!("{}", format_flavour_event(&event));
    }
}
