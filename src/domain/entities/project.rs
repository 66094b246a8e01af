//! Project entity - one source checkout prepared by `prepscript`

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Environment variable that tells autogen-style scripts not to run configure
pub const NOCONFIGURE_VAR: &str = "NOCONFIGURE";

/// Bootstrap scripts looked for, in order, when `configure` is missing
pub const BOOTSTRAP_CANDIDATES: &[&str] = &["bootstrap", "autogen.sh"];

/// A project to bootstrap and configure against the shared prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub source_dir: PathBuf,
    pub build_dir: PathBuf,
    pub prefix: PathBuf,
    /// `<name>.conf` next to the checkouts; may not exist
    pub option_file: PathBuf,
    /// Pass `LD_LIBRARY_PATH` / `PKG_CONFIG_PATH` to configure
    pub inject_env: bool,
}

impl Project {
    /// True when the build happens inside the source tree
    pub fn builds_in_tree(&self) -> bool {
        self.build_dir == self.source_dir
    }

    pub fn configure_script(&self) -> PathBuf {
        self.source_dir.join("configure")
    }

    /// Bootstrap script paths in search order
    pub fn bootstrap_candidates(&self) -> Vec<PathBuf> {
        BOOTSTRAP_CANDIDATES
            .iter()
            .map(|name| self.source_dir.join(name))
            .collect()
    }

    /// Directories the preparer creates before running anything
    pub fn generated_dirs(&self) -> Vec<&Path> {
        let mut dirs = vec![self.prefix.as_path()];
        if !self.builds_in_tree() {
            dirs.push(self.build_dir.as_path());
        }
        dirs
    }

    /// Environment handed to `configure` so it finds what is already
    /// installed under the prefix
    pub fn configure_env(&self) -> BTreeMap<String, String> {
        let mut env = BTreeMap::new();
        if self.inject_env {
            let lib = self.prefix.join("lib");
            env.insert(
                "LD_LIBRARY_PATH".to_string(),
                lib.display().to_string(),
            );
            env.insert(
                "PKG_CONFIG_PATH".to_string(),
                lib.join("pkgconfig").display().to_string(),
            );
        }
        env
    }

    pub fn prefix_arg(&self) -> String {
        format!("--prefix={}", self.prefix.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(inject_env: bool, in_tree: bool) -> Project {
        let source = PathBuf::from("/work/git_vlc");
        Project {
            name: "vlc".to_string(),
            build_dir: if in_tree {
                source.clone()
            } else {
                PathBuf::from("/work/build_vlc")
            },
            source_dir: source,
            prefix: PathBuf::from("/work/prefix"),
            option_file: PathBuf::from("/work/vlc.conf"),
            inject_env,
        }
    }

    #[test]
    fn out_of_tree_creates_prefix_and_build() {
        let p = project(true, false);
        assert_eq!(
            p.generated_dirs(),
            vec![Path::new("/work/prefix"), Path::new("/work/build_vlc")]
        );
    }

    #[test]
    fn in_tree_only_creates_prefix() {
        let p = project(true, true);
        assert!(p.builds_in_tree());
        assert_eq!(p.generated_dirs(), vec![Path::new("/work/prefix")]);
    }

    #[test]
    fn bootstrap_candidates_keep_order() {
        let p = project(true, false);
        assert_eq!(
            p.bootstrap_candidates(),
            vec![
                PathBuf::from("/work/git_vlc/bootstrap"),
                PathBuf::from("/work/git_vlc/autogen.sh"),
            ]
        );
    }

    #[test]
    fn configure_env_points_into_prefix() {
        let env = project(true, false).configure_env();
        assert_eq!(env["LD_LIBRARY_PATH"], "/work/prefix/lib");
        assert_eq!(env["PKG_CONFIG_PATH"], "/work/prefix/lib/pkgconfig");
    }

    #[test]
    fn configure_env_empty_when_disabled() {
        assert!(project(false, false).configure_env().is_empty());
    }

    #[test]
    fn prefix_arg_format() {
        assert_eq!(project(true, false).prefix_arg(), "--prefix=/work/prefix");
    }
}
