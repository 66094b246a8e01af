//! prepkit - developer workflow automation
//!
//! Two tools share this library:
//!
//! - `prepscript` bootstraps and configures autotools projects that install
//!   into one shared prefix.
//! - `kernel-flavour` clones the `generic` flavour of an Ubuntu kernel tree
//!   into a new, named flavour.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports for convenience
pub use application::{
    DirectoryLayout, FlavourRequest, FlavourWorkflow, LocalVersion, RepoPreparer,
    WorkflowOutcome,
};
pub use config::Config;
pub use error::{PrepError, PrepResult};
