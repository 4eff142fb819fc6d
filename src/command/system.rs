//! Subprocess-backed `CommandRunner`.

use super::error::CommandError;
use super::traits::{CommandRunner, CommandSpec, CommandStatus};
use std::process::{Command, Stdio};
use tracing::debug;

/// Runs commands as blocking child processes.
///
/// The child inherits stdin, stdout and stderr so the external tool's own
/// output reaches the terminal unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandStatus, CommandError> {
        debug!(command = %spec, cwd = %spec.current_dir.display(), "spawning");

        let status = Command::new(&spec.program)
            .args(&spec.args)
            .current_dir(&spec.current_dir)
            .envs(spec.envs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| CommandError::from_spawn(&spec.program, e))?;

        debug!(command = %spec, code = ?status.code(), "finished");
        Ok(status.into())
    }
}
