//! Configuration module for prepkit
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PREPKIT_*)
//! 3. Project config (./prepkit.toml)
//! 4. User config (~/.config/prepkit/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{apply_overrides, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, KernelConfig, PrepareConfig};
