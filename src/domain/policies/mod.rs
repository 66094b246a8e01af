//! Domain Policies
//!
//! Rules that depend on the layout of third-party files.

pub mod registration;

pub use registration::{RegistrationPolicy, Rewrite};
