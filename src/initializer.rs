//! The database initialization sequence.
//!
//! ```text
//! resolve root ──> generate client ──> probe database ──> push schema ──> summary
//! ```
//!
//! Each external step blocks until the tool exits. The first failure aborts
//! the run; anything already written to disk (a generated client, say) is
//! left as it is.

use crate::command::{CommandRunner, CommandSpec};
use crate::config::{Config, ToolConfig};
use crate::error::{FailureKind, InitError, InitResult};
use crate::project::ProjectLayout;
use std::fmt::Display;
use std::io::Write;
use std::path::Path;
use tracing::{debug, error, info, warn};

/// Writes the human-facing status lines.
///
/// Write errors are ignored; they never change the exit code.
#[derive(Debug)]
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn line(&mut self, text: impl Display) {
        writeln!(self.out, "{text}").ok();
    }

    pub fn blank(&mut self) {
        writeln!(self.out).ok();
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// What the sequence observed along the way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitReport {
    /// Database file was present before the push
    pub database_existed: bool,
    /// Database file is present after the push
    pub database_present: bool,
    /// Generated client directory was found after generation
    pub client_found: bool,
}

/// Drives the generate and push steps through a `CommandRunner`.
#[derive(Debug)]
pub struct Initializer<R> {
    runner: R,
    layout: ProjectLayout,
    tool: ToolConfig,
    database_url: Option<String>,
    display_name: String,
}

impl<R: CommandRunner> Initializer<R> {
    pub fn new(runner: R, layout: ProjectLayout, config: &Config) -> Self {
        Self {
            runner,
            layout,
            tool: config.tool.clone(),
            database_url: config.database.url.clone(),
            display_name: config.project.display_name.clone(),
        }
    }

    fn tool_command(&self, args: Vec<String>) -> CommandSpec {
        let spec = CommandSpec::new(&self.tool.program, &self.layout.root).args(args);
        match self.database_url {
            Some(ref url) => spec.env("DATABASE_URL", url),
            None => spec,
        }
    }

    /// The client generation command, e.g. `npx prisma generate`.
    pub fn generate_command(&self) -> CommandSpec {
        self.tool_command(self.tool.generate_args())
    }

    /// The schema push command, e.g. `npx prisma db push --skip-generate`.
    pub fn push_command(&self) -> CommandSpec {
        self.tool_command(self.tool.push_args())
    }

    fn invoke(&self, spec: &CommandSpec) -> InitResult<()> {
        info!(command = %spec, "running external tool");
        let status = self.runner.run(spec).map_err(|source| InitError::Spawn {
            command: spec.to_string(),
            source,
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(InitError::CommandFailed {
                command: spec.to_string(),
                status,
            })
        }
    }

    /// Run the sequence, writing progress lines to `out`.
    ///
    /// Returns on the first failure without printing it; see [`execute`]
    /// for the variant that reports errors and yields an exit code.
    ///
    /// [`execute`]: Initializer::execute
    pub fn run<W: Write>(&self, out: &mut Reporter<W>) -> InitResult<InitReport> {
        debug!(root = %self.layout.root.display(), "project root resolved");

        out.line(format_args!("🔧 Initializing {} Database...", self.display_name));
        out.blank();

        if !observe(&self.layout.schema) {
            warn!(path = %self.layout.schema.display(), "schema file not found");
        }

        out.line("📦 Generating Prisma Client...");
        self.invoke(&self.generate_command())?;
        out.line("✅ Prisma Client generated successfully");
        out.blank();

        let client_found = observe(&self.layout.client_dir);
        if !client_found {
            warn!(path = %self.layout.client_dir.display(), "generated client directory not found");
        }

        let database_existed = probe(&self.layout.database)?;
        let shown = self.layout.database_display.display();
        if database_existed {
            out.line(format_args!("📊 Database file exists at {shown}"));
            out.line("🔄 Running migrations to ensure schema is up to date...");
        } else {
            out.line(format_args!("🆕 Creating new database at {shown}..."));
        }

        self.invoke(&self.push_command())?;

        let database_present = observe(&self.layout.database);
        if !database_present {
            warn!(path = %self.layout.database.display(), "schema push succeeded but database file is missing");
        }

        out.blank();
        out.line("✅ Database initialized successfully!");
        out.blank();
        out.line("📋 Summary:");
        out.line("   - Prisma Client: Generated");
        out.line("   - Database: Ready");
        out.line("   - Tables: Created");
        out.blank();
        out.line("🚀 You can now start the application!");
        out.blank();

        Ok(InitReport {
            database_existed,
            database_present,
            client_found,
        })
    }

    /// Run the sequence and report any failure. Returns the process exit code.
    pub fn execute<W: Write>(&self, out: &mut Reporter<W>) -> i32 {
        match self.run(out) {
            Ok(report) => {
                info!(?report, "initialization complete");
                0
            }
            Err(err) => report_failure(out, &err),
        }
    }
}

/// Print the error line for `err` and return its exit code.
pub fn report_failure<W: Write>(out: &mut Reporter<W>, err: &InitError) -> i32 {
    error!(error = %err, "initialization failed");
    out.blank();
    match err.kind() {
        FailureKind::ExternalCommand => out.line(format_args!("❌ Error initializing database: {err}")),
        FailureKind::Unexpected => out.line(format_args!("❌ Unexpected error: {err}")),
    }
    err.exit_code()
}

/// Existence check that surfaces real I/O errors instead of folding them into `false`.
fn probe(path: &Path) -> InitResult<bool> {
    path.try_exists().map_err(|source| InitError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Informational existence check: an I/O error is logged and reads as absent.
fn observe(path: &Path) -> bool {
    probe(path).unwrap_or_else(|e| {
        warn!(error = %e, "existence check failed");
        false
    })
}
