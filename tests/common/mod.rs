//! Common test utilities for the CLI tests.
//!
//! Provides `TestEnv`: an isolated working directory plus a directory of
//! fake executables that is put in front of `PATH`.

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::TempDir;

/// Result of running a prepkit binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub struct TestEnv {
    /// Working directory the binary runs in
    pub root: TempDir,
    /// Fake executables and the isolated config home
    pub support: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let env = Self {
            root: TempDir::new().unwrap(),
            support: TempDir::new().unwrap(),
        };
        std::fs::create_dir_all(env.bin_dir()).unwrap();
        std::fs::create_dir_all(env.support.path().join("config")).unwrap();
        std::fs::create_dir_all(env.support.path().join("boot")).unwrap();
        env
    }

    /// Canonical working directory, as the binary sees it
    pub fn root(&self) -> PathBuf {
        self.root.path().canonicalize().unwrap()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.support.path().join("bin")
    }

    pub fn boot_dir(&self) -> PathBuf {
        self.support.path().join("boot")
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("reading {}: {}", relative, e))
    }

    /// Write an executable shell script inside the working directory
    pub fn script(&self, relative: &str, body: &str) -> PathBuf {
        let path = self.write(relative, &format!("#!/bin/sh\n{}", body));
        make_executable(&path);
        path
    }

    /// Put a fake command on `PATH`
    pub fn fake_command(&self, name: &str, body: &str) {
        let path = self.bin_dir().join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{}", body)).unwrap();
        make_executable(&path);
    }

    pub fn command(&self, bin: &str, args: &[&str]) -> Command {
        let path = format!(
            "{}:{}",
            self.bin_dir().display(),
            std::env::var("PATH").unwrap_or_default()
        );
        let mut cmd = Command::new(bin);
        cmd.current_dir(self.root())
            .args(args)
            .env("PATH", path)
            .env("XDG_CONFIG_HOME", self.support.path().join("config"))
            .env("PREPKIT_BOOT_DIR", self.boot_dir())
            .env_remove("RUST_LOG")
            .env_remove("PREPKIT_PREFIX_DIR")
            .env_remove("PREPKIT_KNOWN_CODENAMES")
            .env_remove("PREPKIT_FAKEROOT");
        cmd
    }

    /// Run with `stdin` piped in
    pub fn run(&self, mut cmd: Command, stdin: &str) -> TestResult {
        let mut child = cmd
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();
        child
            .stdin
            .take()
            .unwrap()
            .write_all(stdin.as_bytes())
            .unwrap();
        let output = child.wait_with_output().unwrap();
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}
