//! Command-specific error types.
//!
//! These cover failures to start or wait on a subprocess. A process that runs
//! and exits non-zero is not an error at this layer; see `CommandStatus`.

use thiserror::Error;

/// Errors that can occur while launching an external command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The program was not found on the search path.
    #[error("Program not found: {0}")]
    NotFound(String),

    /// Any other I/O failure while spawning or waiting on the process.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CommandError {
    /// Create a NotFound error from a program name.
    pub fn not_found(program: impl Into<String>) -> Self {
        Self::NotFound(program.into())
    }

    /// Map a spawn failure, singling out a missing program.
    pub fn from_spawn(program: &str, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::not_found(program)
        } else {
            Self::Io(err)
        }
    }
}
