//! Domain Layer
//!
//! Pure values and rules for both tools, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Project, KernelTree, Flavour
//! - `value_objects/` - option files, ABI version selection, codenames
//! - `policies/` - flavour registration line patterns
//! - `ports/` - FileSystem, CommandRunner, Operator
//!
//! All I/O goes through the trait-defined ports.

pub mod entities;
pub mod policies;
pub mod ports;
pub mod value_objects;
