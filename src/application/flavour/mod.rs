//! Kernel flavour generation (`kernel-flavour`)

mod arch;
mod build_system;
mod generate;
mod patch;
mod probe;
mod workflow;

pub use arch::ArchitectureSelector;
pub use build_system::BuildSystem;
pub use generate::FlavourGenerator;
pub use patch::{FlavourPatcher, LocalVersion, PatchOutcome, PatchReport};
pub use probe::{EnvironmentProbe, ProbeReport};
pub use workflow::{FlavourReport, FlavourRequest, FlavourWorkflow, WorkflowOutcome};
