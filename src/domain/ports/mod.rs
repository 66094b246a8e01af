//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod command_runner;
pub mod events;
pub mod file_system;
pub mod operator;

pub use command_runner::{CapturedOutput, CommandRunner, CommandSpec, CommandStatus};
pub use events::{FlavourEvent, FlavourEventSink, NoopEventSink, PrepareEvent, PrepareEventSink};
pub use file_system::{FileSystem, FsError, FsResult};
pub use operator::{is_affirmative, parse_selection, Operator};
