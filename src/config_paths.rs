//! Where autocorrect keeps its files
//!
//! - Unix/macOS: `$XDG_CONFIG_HOME/autocorrect/` or `~/.config/autocorrect/`
//! - Windows: `%APPDATA%\autocorrect\`
//!
//! Everything else asks this module instead of building paths itself.

use std::io;
use std::path::PathBuf;

const APP_DIR: &str = "autocorrect";
const CONFIG_FILE: &str = "config.yaml";
const LOGS_DIR: &str = "logs";

/// Prefix of the daily-rotated log files (`autocorrect.log.YYYY-MM-DD`)
pub const LOG_FILE_PREFIX: &str = "autocorrect.log";

/// Base directory for the configuration file and logs
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    let base = std::env::var_os("APPDATA").map(PathBuf::from);

    #[cfg(not(target_os = "windows"))]
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")));

    base.map(|dir| dir.join(APP_DIR))
}

/// The rules file read at startup and on reload
pub fn config_file() -> Option<PathBuf> {
    Some(config_dir()?.join(CONFIG_FILE))
}

pub fn logs_dir() -> Option<PathBuf> {
    Some(config_dir()?.join(LOGS_DIR))
}

/// Create the logs directory (and its parents) if needed
pub fn ensure_logs_dir() -> io::Result<PathBuf> {
    let dir = logs_dir().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "no home or config directory")
    })?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
