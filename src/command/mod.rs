//! Command abstraction layer for the external schema tool.
//!
//! Provides the `CommandRunner` trait and its implementations, so the
//! initializer can drive either real subprocesses or a scripted fake.

pub mod error;
pub mod mock;
pub mod system;
pub mod traits;

pub use error::CommandError;
pub use mock::RecordingRunner;
pub use system::SystemRunner;
pub use traits::{CommandRunner, CommandSpec, CommandStatus};
