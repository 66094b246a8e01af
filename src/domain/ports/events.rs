//! Progress Event Ports
//!
//! Both pipelines report their progress through these sinks so the console
//! messages can be printed between the live output of the subprocesses.

use std::path::PathBuf;

/// Event emitted while preparing projects
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrepareEvent {
    /// Project setup started
    SettingUp { project: String },

    /// No configure script; this bootstrap script will be run
    NeedsBootstrap { project: String, script: PathBuf },

    /// Configure script already present
    AlreadyBootstrapped { project: String },

    /// Configure about to run with these option-file arguments
    Configuring { project: String, options: String },

    /// Project configured
    Finished { project: String, build_dir: PathBuf },
}

/// Event emitted while generating and patching a kernel flavour
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlavourEvent {
    /// Seed config copied to the new flavour's config path
    Seeded { seed: PathBuf, flavour: String },

    /// Running the build-system clean target
    Cleaning,

    /// Running the build-system updateconfigs target
    UpdatingConfigs,

    /// Working tree reset in progress
    Resetting,

    /// Local version suffix added to the changelog
    LocalVersion { suffix: String },

    /// Generated config written back
    ConfigRestored { path: PathBuf },

    /// ABI version the flavour's ABI files are cloned in
    AbiSelected { version: String },

    /// Flavour appended to a build-control file
    Registered { file: PathBuf, lines: usize },

    /// Control vars file cloned
    VarsCopied { path: PathBuf },

    /// Final clean of the tree
    FinalClean,
}

/// Trait for receiving prepare events
pub trait PrepareEventSink {
    fn on_event(&self, event: PrepareEvent);
}

/// Trait for receiving flavour events
pub trait FlavourEventSink {
    fn on_event(&self, event: FlavourEvent);
}

impl<T: PrepareEventSink + ?Sized> PrepareEventSink for &T {
    fn on_event(&self, event: PrepareEvent) {
        (**self).on_event(event)
    }
}

impl<T: FlavourEventSink + ?Sized> FlavourEventSink for &T {
    fn on_event(&self, event: FlavourEvent) {
        (**self).on_event(event)
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl PrepareEventSink for NoopEventSink {
    fn on_event(&self, _event: PrepareEvent) {}
}

impl FlavourEventSink for NoopEventSink {
    fn on_event(&self, _event: FlavourEvent) {}
}
