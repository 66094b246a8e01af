//! `debian/rules` invocations

use std::path::PathBuf;

use crate::domain::entities::KernelTree;
use crate::domain::ports::CommandSpec;

/// Runs targets of a kernel tree's `debian/rules`
#[derive(Debug, Clone)]
pub struct BuildSystem {
    root: PathBuf,
    rules: PathBuf,
    fakeroot: bool,
}

impl BuildSystem {
    pub fn new(tree: &KernelTree, fakeroot: bool) -> Self {
        Self {
            root: tree.root.clone(),
            rules: tree.rules(),
            fakeroot,
        }
    }

    /// Command for `[fakeroot] debian/rules <target>` run from the tree root
    pub fn target(&self, target: &str) -> CommandSpec {
        let spec = if self.fakeroot {
            CommandSpec::new("fakeroot")
                .arg("debian/rules")
                .arg(target)
        } else {
            CommandSpec::new(self.rules.display().to_string()).arg(target)
        };
        spec.current_dir(&self.root)
    }
}
