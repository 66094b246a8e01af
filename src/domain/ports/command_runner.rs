//! CommandRunner port - structured subprocess invocation
//!
//! Commands are described as an argument vector plus an explicit
//! environment map; nothing goes through a shell.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{PrepError, PrepResult};

/// A single external command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    /// Working directory; `None` inherits the caller's
    pub cwd: Option<PathBuf>,
    /// Variables added on top of the inherited environment
    pub env: BTreeMap<String, String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            env: BTreeMap::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }
}

impl fmt::Display for CommandSpec {
    /// Renders `KEY=value program arg...` for diagnostics.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.env {
            write!(f, "{}={} ", key, value)?;
        }
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Exit status of a finished command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    /// Exit code, `None` when killed by a signal
    pub code: Option<i32>,
}

impl CommandStatus {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Output of a command whose stdout was captured instead of streamed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedOutput {
    pub status: CommandStatus,
    /// stdout followed by stderr
    pub output: String,
}

/// Executes external commands.
///
/// `run` streams the child's output live to the terminal; `capture` collects
/// it for parsing. Both block until the child exits.
pub trait CommandRunner {
    fn run(&self, spec: &CommandSpec) -> PrepResult<CommandStatus>;

    fn capture(&self, spec: &CommandSpec) -> PrepResult<CapturedOutput>;

    /// Run and turn a non-zero exit into `PrepError::CommandFailed`.
    ///
    /// `action` names the step for the diagnostic, e.g. "configuring vlc".
    fn run_checked(&self, spec: &CommandSpec, action: &str) -> PrepResult<()> {
        let status = self.run(spec)?;
        if status.success() {
            Ok(())
        } else {
            Err(PrepError::CommandFailed {
                action: action.to_string(),
                code: status.code,
            })
        }
    }
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, spec: &CommandSpec) -> PrepResult<CommandStatus> {
        (**self).run(spec)
    }

    fn capture(&self, spec: &CommandSpec) -> PrepResult<CapturedOutput> {
        (**self).capture(spec)
    }
}
