//! Operator Implementations
//!
//! `ConsoleOperator` drives dialoguer prompts on a terminal;
//! `LineOperator` reads plain lines so answers can be piped in.

mod console;
mod line;

pub use console::ConsoleOperator;
pub use line::LineOperator;
