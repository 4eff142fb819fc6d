//! Configuration loader with file resolution and environment override support.

use super::error::{ConfigError, ConfigResult};
use super::schema::{Config, LogFormat, ProjectConfig};
use crate::project::resolve_project_root;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Environment variable prefix for overrides
const ENV_PREFIX: &str = "DB_INIT";

/// Config file name
const CONFIG_FILE_NAME: &str = "db-init.toml";

/// Environment variable for explicit config path
const CONFIG_PATH_ENV: &str = "DB_INIT_CONFIG";

/// Configuration loader with resolution and override logic.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Resolved config file path (if any)
    pub config_path: Option<PathBuf>,
    /// The loaded configuration
    pub config: Config,
}

impl ConfigLoader {
    /// Load configuration using standard resolution order.
    ///
    /// An explicit path must exist; the other locations are optional and
    /// fall through to built-in defaults. `cwd` is the directory the tool
    /// was started in. Environment variables are applied last and the
    /// result is validated.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> ConfigResult<Self> {
        let config_path = match explicit {
            Some(path) if !path.exists() => return Err(ConfigError::NotFound(path.to_path_buf())),
            Some(path) => Some(path.to_path_buf()),
            None => resolve_config_path(cwd),
        };

        let mut config = match config_path {
            Some(ref path) => load_from_file(path)?,
            None => Config::default(),
        };

        apply_env_overrides(&mut config)?;
        validate(&config)?;

        Ok(Self {
            config_path,
            config,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Resolve the configuration file path using standard locations.
///
/// The project-local file lives in the project root, so a run started from
/// the tooling directory still finds it. The default tooling directory name
/// is used here since the file that could rename it has not been read yet.
pub fn resolve_config_path(cwd: &Path) -> Option<PathBuf> {
    // 1. Explicit environment variable
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        let path = PathBuf::from(path);
        if path.exists() {
            return Some(path);
        }
    }

    // 2. Project root, then the working directory itself
    let root = resolve_project_root(cwd, &ProjectConfig::default().tooling_dir);
    for dir in [root.as_path(), cwd] {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.exists() {
            return Some(candidate);
        }
    }

    // 3. Platform config directory
    get_default_config_path().filter(|path| path.exists())
}

/// Get the default config file path in the platform config directory.
pub fn get_default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "db-init").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Load configuration from a file.
fn load_from_file(path: &Path) -> ConfigResult<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&content).map_err(ConfigError::ParseError)
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}_{key}")).ok()
}

/// Apply environment variable overrides to the configuration.
///
/// Environment variables follow the pattern: `DB_INIT_<SECTION>_<KEY>`.
fn apply_env_overrides(config: &mut Config) -> ConfigResult<()> {
    // Tool overrides
    if let Some(val) = env_var("TOOL_PROGRAM") {
        config.tool.program = val;
    }
    if let Some(val) = env_var("TOOL_ARGS") {
        config.tool.args = parse_args_list(&val)?;
    }

    // Project overrides
    if let Some(val) = env_var("PROJECT_TOOLING_DIR") {
        config.project.tooling_dir = val;
    }
    if let Some(val) = env_var("PROJECT_SCHEMA") {
        config.project.schema = PathBuf::from(val);
    }

    // Database overrides (also support plain DATABASE_URL)
    if let Some(val) = env_var("DATABASE_PATH") {
        config.database.path = PathBuf::from(val);
    }
    if let Some(val) = env_var("DATABASE_URL").or_else(|| std::env::var("DATABASE_URL").ok()) {
        config.database.url = Some(val);
    }

    // Logging overrides
    if let Some(val) = env_var("LOGGING_LEVEL") {
        config.logging.level = val;
    }
    if let Some(val) = env_var("LOGGING_FORMAT") {
        config.logging.format = match val.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            "pretty" => LogFormat::Pretty,
            "compact" => LogFormat::Compact,
            _ => {
                return Err(ConfigError::env_parse(
                    format!("{ENV_PREFIX}_LOGGING_FORMAT"),
                    "Expected one of: json, pretty, compact",
                ))
            }
        };
    }

    Ok(())
}

/// Parse a list of arguments from an environment variable.
///
/// A value starting with `[` is read as a TOML array of strings, which allows
/// arguments containing spaces: `["exec", "/my dir/prisma"]`. Anything else
/// is split on whitespace.
fn parse_args_list(val: &str) -> ConfigResult<Vec<String>> {
    #[derive(serde::Deserialize)]
    struct ArgsList {
        args: Vec<String>,
    }

    if val.trim_start().starts_with('[') {
        toml::from_str::<ArgsList>(&format!("args = {val}"))
            .map(|list| list.args)
            .map_err(|e| ConfigError::env_parse(format!("{ENV_PREFIX}_TOOL_ARGS"), e.to_string()))
    } else {
        Ok(val.split_whitespace().map(str::to_string).collect())
    }
}

/// Reject values that would make the sequence meaningless.
fn validate(config: &Config) -> ConfigResult<()> {
    if config.tool.program.trim().is_empty() {
        return Err(ConfigError::validation("tool.program", "must not be empty"));
    }

    let tooling = &config.project.tooling_dir;
    if tooling.is_empty() || tooling.contains(['/', '\\']) {
        return Err(ConfigError::validation(
            "project.tooling_dir",
            "must be a single directory name",
        ));
    }

    if config.database.path.is_absolute() {
        return Err(ConfigError::validation(
            "database.path",
            "must be relative to the project root",
        ));
    }

    Ok(())
}
