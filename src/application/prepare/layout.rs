//! Directory layout for prepared projects
//!
//! All projects of one run share a working root:
//!
//! ```text
//! <root>/git_<P>      source checkout
//! <root>/build_<P>    out-of-tree build (or the checkout itself in-tree)
//! <root>/prefix       shared install prefix
//! <root>/<P>.conf     optional configure arguments
//! ```

use std::path::PathBuf;

use crate::config::PrepareConfig;
use crate::domain::entities::Project;
use crate::domain::ports::FileSystem;
use crate::error::{PrepError, PrepResult};

/// Computes per-project paths under a working root
#[derive(Debug, Clone)]
pub struct DirectoryLayout {
    root: PathBuf,
    naming: PrepareConfig,
    build_in_tree: bool,
    inject_env: bool,
}

impl DirectoryLayout {
    /// `root` should be absolute; every derived path is handed to
    /// subprocesses running in other directories.
    pub fn new(root: impl Into<PathBuf>, naming: PrepareConfig) -> Self {
        Self {
            root: root.into(),
            naming,
            build_in_tree: false,
            inject_env: true,
        }
    }

    /// Configure inside the source checkout instead of a build directory
    pub fn with_build_in_tree(mut self, build_in_tree: bool) -> Self {
        self.build_in_tree = build_in_tree;
        self
    }

    /// Whether configure gets the prefix library/pkg-config variables
    pub fn with_configure_env(mut self, inject_env: bool) -> Self {
        self.inject_env = inject_env;
        self
    }

    pub fn prefix(&self) -> PathBuf {
        self.root.join(&self.naming.prefix_dir)
    }

    pub fn project(&self, name: &str) -> Project {
        let source_dir = self
            .root
            .join(format!("{}{}", self.naming.source_dir_prefix, name));
        let build_dir = if self.build_in_tree {
            source_dir.clone()
        } else {
            self.root
                .join(format!("{}{}", self.naming.build_dir_prefix, name))
        };
        Project {
            name: name.to_string(),
            source_dir,
            build_dir,
            prefix: self.prefix(),
            option_file: self.root.join(format!("{}.conf", name)),
            inject_env: self.inject_env,
        }
    }

    /// Create the prefix and build directories that do not exist yet.
    pub fn create_missing<FS: FileSystem>(&self, fs: &FS, project: &Project) -> PrepResult<()> {
        for dir in project.generated_dirs() {
            if fs.is_dir(dir) {
                continue;
            }
            tracing::debug!(dir = %dir.display(), "creating directory");
            fs.create_dir_all(dir)
                .map_err(|e| PrepError::fs(format!("creating '{}'", dir.display()), e))?;
        }
        Ok(())
    }
}
