//! Prisma database initializer.
//!
//! Generates the Prisma client and pushes the schema to a local SQLite file
//! by driving the external `prisma` CLI, reporting progress on stdout and
//! signalling the outcome through the exit code.
//!
//! # Modules
//!
//! - `config`: Configuration management with TOML support
//! - `command`: Subprocess abstraction and test doubles
//! - `project`: Project root resolution and derived paths
//! - `initializer`: The generate / probe / push sequence
//! - `error`: Unified error handling
//! - `logging`: `tracing` subscriber setup

pub mod command;
pub mod config;
pub mod error;
pub mod initializer;
pub mod logging;
pub mod project;

pub use command::{
    CommandError, CommandRunner, CommandSpec, CommandStatus, RecordingRunner, SystemRunner,
};
pub use config::{Config, ConfigError, ConfigLoader, ConfigResult};
pub use error::{FailureKind, InitError, InitResult};
pub use initializer::{report_failure, InitReport, Initializer, Reporter};
pub use project::{resolve_project_root, ProjectLayout};
