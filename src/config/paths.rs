use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::PathBuf;

use super::StorageSettings;

/// Environment variable overriding the storage root.
pub const HOME_ENV: &str = "TRENDLOG_HOME";

/// Returns the directory holding day files and reports.
///
/// Order of precedence:
/// 1. `TRENDLOG_HOME` environment variable.
/// 2. The process working directory.
pub fn workspace_root() -> Result<PathBuf> {
    if let Ok(path) = env::var(HOME_ENV) {
        return Ok(PathBuf::from(path));
    }
    env::current_dir().context("Unable to determine the current directory")
}

/// Resolved filesystem locations for one storage root.
#[derive(Debug, Clone)]
pub struct WorkspacePaths {
    pub root: PathBuf,
    pub raw_dir: PathBuf,
    pub archives_dir: PathBuf,
    pub overview_path: PathBuf,
}

impl WorkspacePaths {
    pub fn new(root: impl Into<PathBuf>, storage: &StorageSettings) -> Self {
        let root = root.into();
        Self {
            raw_dir: root.join(&storage.raw_dir),
            archives_dir: root.join(&storage.archives_dir),
            overview_path: root.join(&storage.overview_file),
            root,
        }
    }

    /// Creates the day-file and archive directories if absent.
    pub fn ensure(&self) -> Result<()> {
        for dir in [&self.raw_dir, &self.archives_dir] {
            fs::create_dir_all(dir).with_context(|| format!("Failed to create {:?}", dir))?;
        }
        Ok(())
    }
}
