//! Platform-specific directory utilities.

use std::path::PathBuf;

/// Platform data directory for scout.
///
/// - macOS: `~/Library/Application Support/scout`
/// - Linux: `~/.local/share/scout` (or `$XDG_DATA_HOME/scout`)
/// - Windows: `%APPDATA%\scout`
/// - Fallback: `./scout_data`
pub fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "scout")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./scout_data"))
}

/// Default location of the record store file.
pub fn default_records_file() -> PathBuf {
    data_dir().join("players.json")
}
