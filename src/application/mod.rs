//! Application Layer
//!
//! Use cases that orchestrate the two tools' flows.
//! This layer:
//! - Depends on Domain layer (entities, policies, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `RepoPreparer` - Bootstrap and configure projects against a shared prefix
//! - `FlavourWorkflow` - Probe the tree, generate a flavour config and patch it in

pub mod flavour;
pub mod prepare;

pub use flavour::{
    FlavourReport, FlavourRequest, FlavourWorkflow, LocalVersion, PatchOutcome, WorkflowOutcome,
};
pub use prepare::{DirectoryLayout, PrepareReport, RepoPreparer};
