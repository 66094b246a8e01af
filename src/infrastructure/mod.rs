//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system with atomic writes
//! - `process/` - Subprocess execution
//! - `operator/` - Console and line-based operator prompts

pub mod fs;
pub mod operator;
pub mod process;

// Re-export for convenience
pub use fs::LocalFs;
pub use operator::{ConsoleOperator, LineOperator};
pub use process::SystemRunner;
