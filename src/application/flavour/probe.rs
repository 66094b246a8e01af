//! Environment probe - distribution codename and kernel tree layout

use std::path::Path;

use crate::domain::entities::{debian_env_path, parse_debian_env, KernelTree};
use crate::domain::ports::{CommandRunner, CommandSpec, FileSystem};
use crate::domain::value_objects::{is_known, parse_codename};
use crate::error::{PrepError, PrepResult};

/// What the probe found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub codename: String,
    /// Codename is on the known-good list
    pub known_codename: bool,
    pub tree: KernelTree,
}

pub struct EnvironmentProbe<FS, CR>
where
    FS: FileSystem,
    CR: CommandRunner,
{
    fs: FS,
    runner: CR,
}

impl<FS, CR> EnvironmentProbe<FS, CR>
where
    FS: FileSystem,
    CR: CommandRunner,
{
    pub fn new(fs: FS, runner: CR) -> Self {
        Self { fs, runner }
    }

    pub fn probe(&self, root: &Path, known_codenames: &[String]) -> PrepResult<ProbeReport> {
        let codename = self.codename()?;
        let known_codename = is_known(&codename, known_codenames);
        if !known_codename {
            tracing::warn!(
                codename = %codename,
                "untested distribution, flavour generation may not work"
            );
        }

        let tree = self.kernel_tree(root)?;
        tracing::info!(debian_dir = %tree.debian_dir().display(), "found kernel tree");

        Ok(ProbeReport {
            codename,
            known_codename,
            tree,
        })
    }

    fn codename(&self) -> PrepResult<String> {
        let spec = CommandSpec::new("lsb_release").arg("-c");
        let captured = self.runner.capture(&spec)?;
        if !captured.status.success() {
            return Err(PrepError::CommandFailed {
                action: "getting current distribution from lsb_release".to_string(),
                code: captured.status.code,
            });
        }
        parse_codename(&captured.output).ok_or_else(|| PrepError::UnexpectedOutput {
            command: "lsb_release -c".to_string(),
            output: captured.output.trim().to_string(),
        })
    }

    /// Resolve the metadata directory named in `debian/debian.env`.
    pub fn kernel_tree(&self, root: &Path) -> PrepResult<KernelTree> {
        if !self.fs.is_dir(&root.join("debian")) {
            return Err(PrepError::NotKernelTree {
                reason: "no 'debian' directory".to_string(),
            });
        }

        let env_path = debian_env_path(root);
        if !self.fs.exists(&env_path) {
            return Err(PrepError::NotKernelTree {
                reason: format!("no '{}'", env_path.display()),
            });
        }
        let content = self
            .fs
            .read(&env_path)
            .map_err(|e| PrepError::fs(format!("reading '{}'", env_path.display()), e))?;
        let name = parse_debian_env(&content).ok_or_else(|| PrepError::InvalidDebianEnv {
            path: env_path.clone(),
        })?;

        let tree = KernelTree::new(root, name);
        if !self.fs.is_dir(&tree.debian_dir()) {
            return Err(PrepError::NotKernelTree {
                reason: format!(
                    "metadata directory '{}' named in debian.env is missing",
                    tree.debian_dir().display()
                ),
            });
        }
        Ok(tree)
    }
}
