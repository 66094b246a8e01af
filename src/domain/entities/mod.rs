//! Domain Entities

pub mod flavour;
pub mod kernel_tree;
pub mod project;

pub use flavour::{validate_name, Flavour, GeneratedConfig, BASE_FLAVOUR};
pub use kernel_tree::{debian_env_path, parse_debian_env, KernelTree};
pub use project::{Project, BOOTSTRAP_CANDIDATES, NOCONFIGURE_VAR};
