//! Runs commands with `std::process`

use std::process::{Command, Stdio};

use crate::domain::ports::{CapturedOutput, CommandRunner, CommandSpec, CommandStatus};
use crate::error::{PrepError, PrepResult};

/// Executes commands on the local machine, inheriting the parent environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }

    fn command(spec: &CommandSpec) -> Command {
        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args).envs(&spec.env);
        if let Some(dir) = spec.cwd() {
            cmd.current_dir(dir);
        }
        tracing::debug!(
            command = %spec,
            cwd = ?spec.cwd(),
            "executing"
        );
        cmd
    }

    fn spawn_error(spec: &CommandSpec, source: std::io::Error) -> PrepError {
        PrepError::CommandSpawn {
            command: spec.program.clone(),
            source,
        }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec) -> PrepResult<CommandStatus> {
        let status = Self::command(spec)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| Self::spawn_error(spec, e))?;
        tracing::debug!(program = %spec.program, code = ?status.code(), "finished");
        Ok(CommandStatus {
            code: status.code(),
        })
    }

    fn capture(&self, spec: &CommandSpec) -> PrepResult<CapturedOutput> {
        let output = Self::command(spec)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| Self::spawn_error(spec, e))?;
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(CapturedOutput {
            status: CommandStatus {
                code: output.status.code(),
            },
            output: text,
        })
    }
}
