//! Shared test utilities for the initializer tests.
//!
//! Provides scratch project trees and a helper that runs the full sequence
//! against a `RecordingRunner`, capturing the console transcript.

#![allow(dead_code)]

use prisma_db_init::{Config, Initializer, ProjectLayout, RecordingRunner, Reporter};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway project directory with a `prisma/schema.prisma` and a `scripts/` folder.
pub struct ScratchProject {
    dir: TempDir,
}

impl ScratchProject {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        fs::create_dir_all(dir.path().join("prisma")).unwrap();
        fs::create_dir_all(dir.path().join("scripts")).unwrap();
        fs::write(
            dir.path().join("prisma/schema.prisma"),
            "datasource db {\n  provider = \"sqlite\"\n  url = env(\"DATABASE_URL\")\n}\n",
        )
        .unwrap();
        Self { dir }
    }

    /// Same as `new`, with an existing `prisma/dev.db`.
    pub fn with_database() -> Self {
        let project = Self::new();
        fs::write(project.database(), b"").unwrap();
        project
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn scripts_dir(&self) -> PathBuf {
        self.root().join("scripts")
    }

    pub fn database(&self) -> PathBuf {
        self.root().join("prisma/dev.db")
    }
}

/// Outcome of one in-process run.
pub struct RunOutput {
    pub code: i32,
    pub stdout: String,
}

/// Run the initializer from `cwd` with the given runner and config.
pub fn run_initializer(runner: &RecordingRunner, cwd: &Path, config: &Config) -> RunOutput {
    let layout = ProjectLayout::discover(cwd, config);
    let initializer = Initializer::new(runner.clone(), layout, config);
    let mut out = Reporter::new(Vec::new());
    let code = initializer.execute(&mut out);
    RunOutput {
        code,
        stdout: String::from_utf8(out.into_inner()).expect("utf-8 output"),
    }
}

pub const SUMMARY: &str = "\n\
✅ Database initialized successfully!\n\
\n\
📋 Summary:\n   - Prisma Client: Generated\n   - Database: Ready\n   - Tables: Created\n\
\n\
🚀 You can now start the application!\n\
\n";
