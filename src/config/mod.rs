//! Configuration module for db-init.
//!
//! This module provides TOML-based configuration with environment variable overrides.
//!
//! # Configuration Resolution
//!
//! Configuration is loaded from the following locations (in order of priority):
//!
//! 1. `--config <PATH>` on the command line
//! 2. `DB_INIT_CONFIG` environment variable (explicit path)
//! 3. `db-init.toml` in the project root, then in the current directory
//! 4. The platform config directory, e.g. `~/.config/db-init/db-init.toml`
//! 5. Built-in defaults (no file required)
//!
//! # Environment Overrides
//!
//! The pattern is `DB_INIT_<SECTION>_<KEY>`:
//! - `DB_INIT_TOOL_PROGRAM=pnpm`
//! - `DB_INIT_TOOL_ARGS='exec prisma'` or, for arguments with spaces,
//!   `DB_INIT_TOOL_ARGS='["exec", "/my dir/prisma"]'`
//! - `DB_INIT_PROJECT_TOOLING_DIR=tools`
//! - `DB_INIT_DATABASE_PATH=prisma/test.db`
//! - `DB_INIT_DATABASE_URL=file:./prisma/test.db`
//! - `DB_INIT_LOGGING_LEVEL=debug`
//!
//! `DATABASE_URL` is honored when `DB_INIT_DATABASE_URL` is absent.
//!
//! # Example
//!
//! ```rust,no_run
//! use prisma_db_init::config::ConfigLoader;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let loader = ConfigLoader::load(None, &cwd).unwrap();
//! println!("Tool: {}", loader.config().tool.program);
//! ```

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{get_default_config_path, resolve_config_path, ConfigLoader};
pub use schema::{Config, DatabaseConfig, LogFormat, LoggingConfig, ProjectConfig, ToolConfig};
