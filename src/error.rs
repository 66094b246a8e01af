//! Error types for prepkit
//!
//! Library code returns `PrepResult`; the binaries wrap it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for prepkit operations
pub type PrepResult<T> = Result<T, PrepError>;

/// Main error type for prepkit operations
#[derive(Error, Debug)]
pub enum PrepError {
    /// Project source checkout is missing
    #[error("no source directory for project '{project}' found (expected at '{path}')")]
    MissingSourceDir { project: String, path: PathBuf },

    /// Neither `configure` nor any bootstrap candidate exists
    #[error("no '{configure}' configure file found but no bootstrap script ({candidates}) either")]
    NoBootstrapScript {
        configure: PathBuf,
        candidates: String,
    },

    /// External command exited unsuccessfully
    #[error("{action} returned status {}", status_text(.code))]
    CommandFailed { action: String, code: Option<i32> },

    /// External command could not be started at all
    #[error("failed to run '{command}': {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Required file is absent
    #[error("{what} '{path}' does not exist")]
    MissingFile { what: String, path: PathBuf },

    /// Current directory does not look like an Ubuntu kernel tree
    #[error("must be run in the top directory of an ubuntu linux tree ({reason})")]
    NotKernelTree { reason: String },

    /// `debian/debian.env` has no usable `DEBIAN=` line
    #[error("no DEBIAN=<dir> entry found in '{path}'")]
    InvalidDebianEnv { path: PathBuf },

    /// A query command printed something we cannot parse
    #[error("unexpected result from '{command}': '{output}'")]
    UnexpectedOutput { command: String, output: String },

    /// No ABI version directory available
    #[error("empty abi directory '{path}'")]
    EmptyAbiDirectory { path: PathBuf },

    /// Operator picked something outside the offered range
    #[error("invalid selection '{input}'")]
    InvalidSelection { input: String },

    /// Flavour name cannot be used in file names and rule lists
    #[error("invalid flavour name '{name}': {reason}")]
    InvalidFlavourName { name: String, reason: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// File system port error
    #[error("{context}: {source}")]
    Fs {
        context: String,
        #[source]
        source: FsError,
    },

    /// Registration pattern failed to compile
    #[error("invalid line pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn status_text(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "terminated by signal".to_string(),
    }
}

impl PrepError {
    /// Attach a description of what was being done to a port-level error.
    pub fn fs(context: impl Into<String>, source: FsError) -> Self {
        PrepError::Fs {
            context: context.into(),
            source,
        }
    }
}
