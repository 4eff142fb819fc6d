//! Recording command runner for testing.
//!
//! Provides a `RecordingRunner` that never spawns anything. Outcomes are
//! scripted up front and every invocation is logged for later inspection.

use super::error::CommandError;
use super::traits::{CommandRunner, CommandSpec, CommandStatus};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

/// A scripted result for one invocation.
#[derive(Debug, Clone)]
enum Outcome {
    Exit(i32),
    Signal,
    NotFound,
}

#[derive(Debug, Default)]
struct RecorderState {
    /// Outcomes handed out in order; empty means exit 0.
    outcomes: VecDeque<Outcome>,
    /// Every spec passed to `run`, in call order.
    calls: Vec<CommandSpec>,
}

/// Fake `CommandRunner` with scripted exit codes.
///
/// Clones share state, so a test can keep one handle for inspection while
/// the initializer owns another.
///
/// # Example
/// ```
/// use prisma_db_init::command::{CommandRunner, CommandSpec, RecordingRunner};
///
/// let runner = RecordingRunner::new();
/// runner.push_exit(2);
///
/// let status = runner.run(&CommandSpec::new("npx", "/repo").args(["prisma", "generate"])).unwrap();
/// assert_eq!(status.code, Some(2));
/// assert_eq!(runner.commands(), vec!["npx prisma generate".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingRunner {
    state: Arc<Mutex<RecorderState>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a runner that returns the given exit codes in order.
    pub fn with_exit_codes(codes: impl IntoIterator<Item = i32>) -> Self {
        let runner = Self::new();
        for code in codes {
            runner.push_exit(code);
        }
        runner
    }

    fn lock(&self) -> MutexGuard<'_, RecorderState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Queue an exit code for the next unscripted call.
    pub fn push_exit(&self, code: i32) {
        self.lock().outcomes.push_back(Outcome::Exit(code));
    }

    /// Queue a signal termination.
    pub fn push_signal(&self) {
        self.lock().outcomes.push_back(Outcome::Signal);
    }

    /// Queue a spawn failure as if the program were missing.
    pub fn push_not_found(&self) {
        self.lock().outcomes.push_back(Outcome::NotFound);
    }

    /// All specs received so far.
    pub fn calls(&self) -> Vec<CommandSpec> {
        self.lock().calls.clone()
    }

    /// Rendered command lines received so far.
    pub fn commands(&self) -> Vec<String> {
        self.lock().calls.iter().map(ToString::to_string).collect()
    }

    pub fn call_count(&self) -> usize {
        self.lock().calls.len()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandStatus, CommandError> {
        let mut state = self.lock();
        state.calls.push(spec.clone());

        match state.outcomes.pop_front() {
            None => Ok(CommandStatus::from_code(0)),
            Some(Outcome::Exit(code)) => Ok(CommandStatus::from_code(code)),
            Some(Outcome::Signal) => Ok(CommandStatus::terminated()),
            Some(Outcome::NotFound) => Err(CommandError::not_found(&spec.program)),
        }
    }
}
