//! Process runner backed by the platform shell.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, trace};

use monoseed_core::{
    application::{ApplicationError, ports::CommandRunner},
    domain::{CommandResult, CommandSpec},
    error::MonoseedResult,
};

/// Runs command lines through `sh -c` (or `cmd /C` on Windows), capturing
/// stdout and stderr. Blocks until the child exits; there is no timeout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellCommandRunner;

impl ShellCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(not(windows))]
fn shell(line: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(line);
    cmd
}

#[cfg(windows)]
fn shell(line: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(line);
    cmd
}

impl CommandRunner for ShellCommandRunner {
    fn run(&self, command: &CommandSpec, cwd: &Path) -> MonoseedResult<CommandResult> {
        let spawn_failed = |e: std::io::Error| ApplicationError::SpawnFailed {
            command: command.line.clone(),
            reason: e.to_string(),
        };

        let mut child = shell(&command.line)
            .current_dir(cwd)
            .stdin(if command.stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_failed)?;

        if let (Some(input), Some(mut stdin)) = (&command.stdin, child.stdin.take()) {
            // A child that exits without reading stdin closes the pipe early.
            if let Err(e) = stdin.write_all(input.as_bytes()) {
                debug!(error = %e, "Child did not consume stdin");
            }
        }

        let output = child.wait_with_output().map_err(spawn_failed)?;

        let result = CommandResult {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        trace!(exit_code = ?result.exit_code, "Child exited");

        Ok(result)
    }
}
