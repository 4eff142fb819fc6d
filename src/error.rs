//! Unified error type for the initialization sequence.

use crate::command::{CommandError, CommandStatus};
use crate::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// How a failure is presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// An external tool ran and exited non-zero.
    ExternalCommand,
    /// Anything else: spawn failures, filesystem errors, bad configuration.
    Unexpected,
}

/// Errors that abort the initialization sequence.
///
/// Every variant ends the run with exit code 1. Nothing is retried and no
/// partial state is rolled back.
#[derive(Debug, Error)]
pub enum InitError {
    /// The external tool exited non-zero.
    #[error("Command `{command}` {}", failure_phrase(.status))]
    CommandFailed {
        command: String,
        status: CommandStatus,
    },

    /// The external tool could not be started.
    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: CommandError,
    },

    /// A filesystem probe failed.
    #[error("Failed to access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl InitError {
    /// Classify this error for reporting.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::CommandFailed { .. } => FailureKind::ExternalCommand,
            Self::Spawn { .. } | Self::Io { .. } | Self::Config(_) => FailureKind::Unexpected,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

fn failure_phrase(status: &CommandStatus) -> String {
    match status.code {
        Some(code) => format!("returned non-zero exit status {code}"),
        None => "was terminated by a signal".to_string(),
    }
}

/// Result type for initializer operations.
pub type InitResult<T> = Result<T, InitError>;
