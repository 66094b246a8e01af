//! Architecture selection

use crate::domain::entities::KernelTree;
use crate::domain::ports::{FileSystem, Operator};
use crate::error::{PrepError, PrepResult};

pub struct ArchitectureSelector<FS, OP>
where
    FS: FileSystem,
    OP: Operator,
{
    fs: FS,
    operator: OP,
}

impl<FS, OP> ArchitectureSelector<FS, OP>
where
    FS: FileSystem,
    OP: Operator,
{
    pub fn new(fs: FS, operator: OP) -> Self {
        Self { fs, operator }
    }

    /// Architecture config directories of the tree, sorted
    pub fn available(&self, tree: &KernelTree) -> PrepResult<Vec<String>> {
        let root = tree.config_root();
        let mut archs = self
            .fs
            .list_dirs(&root)
            .map_err(|e| PrepError::fs(format!("listing '{}'", root.display()), e))?;
        archs.sort();
        if archs.is_empty() {
            return Err(PrepError::NotKernelTree {
                reason: format!("no architecture directories in '{}'", root.display()),
            });
        }
        Ok(archs)
    }

    /// Ask the operator which architecture to create the flavour for.
    pub fn select(&self, tree: &KernelTree) -> PrepResult<String> {
        let archs = self.available(tree)?;
        let idx = self.operator.choose("Choose config:", &archs)?;
        Ok(archs[idx].clone())
    }
}
