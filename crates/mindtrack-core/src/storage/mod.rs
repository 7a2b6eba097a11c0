mod config;
pub mod database;
pub mod entry_store;

pub use config::{Config, ExportConfig, LogConfig, ResetConfig, StorageConfig};
pub use database::Database;
pub use entry_store::{EntrySnapshot, EntryStore};

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Returns `~/.config/mindtrack/`.
///
/// Falls back to `./.config/mindtrack` when the home directory is unknown.
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("mindtrack")
}

/// Create `dir` (and parents) if missing and return it.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn ensure_data_dir(dir: &Path) -> Result<PathBuf, ConfigError> {
    std::fs::create_dir_all(dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir.to_path_buf())
}
