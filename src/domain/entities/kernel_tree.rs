//! KernelTree entity - paths inside an Ubuntu kernel source checkout
//!
//! Ubuntu trees keep their packaging metadata in a directory named by the
//! `DEBIAN=` line of `debian/debian.env` (usually `debian.master`).

use std::path::{Path, PathBuf};

/// Location of a kernel tree and its metadata directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelTree {
    pub root: PathBuf,
    /// Metadata directory name relative to `root`, e.g. `debian.master`
    pub debian_name: String,
}

impl KernelTree {
    pub fn new(root: impl Into<PathBuf>, debian_name: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            debian_name: debian_name.into(),
        }
    }

    pub fn debian_dir(&self) -> PathBuf {
        self.root.join(&self.debian_name)
    }

    /// `debian/rules`, the build-system entry point
    pub fn rules(&self) -> PathBuf {
        self.root.join("debian").join("rules")
    }

    pub fn config_root(&self) -> PathBuf {
        self.debian_dir().join("config")
    }

    pub fn flavour_config(&self, arch: &str, flavour: &str) -> PathBuf {
        self.config_root()
            .join(arch)
            .join(format!("config.flavour.{}", flavour))
    }

    pub fn abi_root(&self) -> PathBuf {
        self.debian_dir().join("abi")
    }

    pub fn getabis(&self) -> PathBuf {
        self.debian_dir().join("etc").join("getabis")
    }

    pub fn rules_mk(&self, arch: &str) -> PathBuf {
        self.debian_dir()
            .join("rules.d")
            .join(format!("{}.mk", arch))
    }

    pub fn vars(&self, flavour: &str) -> PathBuf {
        self.debian_dir()
            .join("control.d")
            .join(format!("vars.{}", flavour))
    }

    pub fn changelog(&self) -> PathBuf {
        self.debian_dir().join("changelog")
    }
}

/// Extract the metadata directory name from `debian/debian.env` content.
pub fn parse_debian_env(content: &str) -> Option<&str> {
    content
        .lines()
        .filter_map(|line| line.trim().strip_prefix("DEBIAN="))
        .map(|value| value.trim().trim_matches('"'))
        .find(|value| !value.is_empty())
}

/// Path of the indirection file relative to a tree root
pub fn debian_env_path(root: &Path) -> PathBuf {
    root.join("debian").join("debian.env")
}
