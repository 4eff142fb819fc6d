//! Project root resolution and the paths derived from it.

use crate::config::Config;
use std::path::{Path, PathBuf};

/// Resolve the project root from the directory the tool was started in.
///
/// When the last component of `cwd` is `tooling_dir` (the tool was launched
/// from inside the scripts folder), the parent is the root. Otherwise `cwd`
/// is the root. This is a name match only; nothing checks that the result
/// actually looks like a project.
pub fn resolve_project_root(cwd: &Path, tooling_dir: &str) -> PathBuf {
    let in_tooling_dir = cwd
        .file_name()
        .is_some_and(|name| name == std::ffi::OsStr::new(tooling_dir));

    match cwd.parent() {
        Some(parent) if in_tooling_dir => parent.to_path_buf(),
        _ => cwd.to_path_buf(),
    }
}

/// Absolute paths the initializer touches, all anchored at the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub root: PathBuf,
    /// SQLite file the push step creates or updates
    pub database: PathBuf,
    /// Path of `database` as configured, for messages
    pub database_display: PathBuf,
    pub schema: PathBuf,
    pub client_dir: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>, config: &Config) -> Self {
        let root = root.into();
        Self {
            database: root.join(&config.database.path),
            database_display: config.database.path.clone(),
            schema: root.join(&config.project.schema),
            client_dir: root.join(&config.project.client_dir),
            root,
        }
    }

    /// Resolve the root from `cwd` and build the layout in one go.
    pub fn discover(cwd: &Path, config: &Config) -> Self {
        Self::new(
            resolve_project_root(cwd, &config.project.tooling_dir),
            config,
        )
    }
}
