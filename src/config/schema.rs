//! Configuration schema definitions.
//!
//! Every section carries `#[serde(default)]`, so a config file only needs the
//! keys it wants to change.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// External schema tool invocation
    pub tool: ToolConfig,
    /// Project layout
    pub project: ProjectConfig,
    /// Database settings
    pub database: DatabaseConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// How to invoke the schema tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Launcher program found on `PATH`
    pub program: String,
    /// Arguments placed before every action
    pub args: Vec<String>,
    /// Action that generates the client
    pub generate: Vec<String>,
    /// Action that pushes the schema without regenerating
    pub push: Vec<String>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            program: "npx".to_string(),
            args: vec!["prisma".to_string()],
            generate: vec!["generate".to_string()],
            push: vec![
                "db".to_string(),
                "push".to_string(),
                "--skip-generate".to_string(),
            ],
        }
    }
}

impl ToolConfig {
    /// Full argument list for the generate step.
    pub fn generate_args(&self) -> Vec<String> {
        self.args.iter().chain(&self.generate).cloned().collect()
    }

    /// Full argument list for the push step.
    pub fn push_args(&self) -> Vec<String> {
        self.args.iter().chain(&self.push).cloned().collect()
    }
}

/// Project layout section. Paths are relative to the project root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Directory name that marks "we were started from the scripts folder"
    pub tooling_dir: String,
    /// Schema definition file
    pub schema: PathBuf,
    /// Where the generator writes the client
    pub client_dir: PathBuf,
    /// Name printed in the banner
    pub display_name: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            tooling_dir: "scripts".to_string(),
            schema: PathBuf::from("prisma/schema.prisma"),
            client_dir: PathBuf::from("node_modules/.prisma/client"),
            display_name: "Comic Translation Studio".to_string(),
        }
    }
}

/// Database section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file, relative to the project root
    pub path: PathBuf,
    /// Passed to the tool as `DATABASE_URL` when set
    pub url: Option<String>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("prisma/dev.db"),
            url: None,
        }
    }
}

/// Logging configuration section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error"
    pub level: String,
    /// Log format: "json", "pretty", "compact"
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Compact,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format
    Json,
    /// Pretty format with colors
    Pretty,
    /// Compact format
    #[default]
    Compact,
}
