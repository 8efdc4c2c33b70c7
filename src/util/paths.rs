//! Locations of the gallery's data directory, log file and config file

use std::path::PathBuf;
use std::sync::OnceLock;

static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Initialize the data directory with an optional custom path.
/// Call early in main(), before logging or config loading.
/// If custom_path is None, uses the default ~/.vitrine location.
pub fn init_data_dir(custom_path: Option<PathBuf>) {
    let path = custom_path.unwrap_or_else(default_data_dir);
    if let Err(rejected) = DATA_DIR.set(path) {
        tracing::debug!(
            path = %rejected.display(),
            "Data directory already initialized"
        );
    }
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".vitrine"))
        .unwrap_or_else(|| PathBuf::from(".vitrine"))
}

/// Base data directory: the path given to init_data_dir(), otherwise ~/.vitrine
pub fn data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

/// ~/.vitrine/logs
pub fn logs_dir() -> PathBuf {
    data_dir().join("logs")
}

/// ~/.vitrine/logs/vitrine.log
pub fn log_file_path() -> PathBuf {
    logs_dir().join("vitrine.log")
}

/// ~/.vitrine/config.toml
pub fn config_path() -> PathBuf {
    data_dir().join("config.toml")
}
