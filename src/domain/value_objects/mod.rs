//! Value Objects
//!
//! Small immutable values parsed from files and command output.

pub mod abi_version;
pub mod codename;
pub mod configure_options;

pub use abi_version::{natural_cmp, select_latest, AbiSelection};
pub use codename::{is_known, parse_codename};
pub use configure_options::ConfigureOptions;
