//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PrepResult;

use super::loader::{self, ConfigWarning};

/// Directory naming for `prepscript`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepareConfig {
    /// Source checkout of project `P` lives in `<source_dir_prefix>P`
    #[serde(default = "default_source_dir_prefix")]
    pub source_dir_prefix: String,

    /// Out-of-tree build directory of `P` is `<build_dir_prefix>P`
    #[serde(default = "default_build_dir_prefix")]
    pub build_dir_prefix: String,

    /// Shared install prefix directory
    #[serde(default = "default_prefix_dir")]
    pub prefix_dir: String,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            source_dir_prefix: default_source_dir_prefix(),
            build_dir_prefix: default_build_dir_prefix(),
            prefix_dir: default_prefix_dir(),
        }
    }
}

fn default_source_dir_prefix() -> String {
    "git_".to_string()
}

fn default_build_dir_prefix() -> String {
    "build_".to_string()
}

fn default_prefix_dir() -> String {
    "prefix".to_string()
}

/// Settings for `kernel-flavour`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelConfig {
    /// Distribution codenames the workflow is known to work on
    #[serde(default = "default_known_codenames")]
    pub known_codenames: Vec<String>,

    /// Run `debian/rules` targets under fakeroot
    #[serde(default = "default_true")]
    pub fakeroot: bool,

    /// Where running-kernel configs (`config-<release>`) are found
    #[serde(default = "default_boot_dir")]
    pub boot_dir: PathBuf,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            known_codenames: default_known_codenames(),
            fakeroot: true,
            boot_dir: default_boot_dir(),
        }
    }
}

fn default_known_codenames() -> Vec<String> {
    vec!["precise".to_string()]
}

fn default_true() -> bool {
    true
}

fn default_boot_dir() -> PathBuf {
    PathBuf::from("/boot")
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub prepare: PrepareConfig,

    #[serde(default)]
    pub kernel: KernelConfig,
}

impl Config {
    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub(crate) fn load_with_warnings(path: &Path) -> PrepResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults, then apply
    /// environment overrides
    pub fn load_or_default(project_root: Option<&Path>) -> PrepResult<Self> {
        loader::load_or_default(project_root)
    }
}
