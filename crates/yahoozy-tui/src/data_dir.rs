//! Platform-conventional data directory for the history file.

use std::env;
use std::path::PathBuf;

/// Resolve the per-user application data directory.
///
/// Windows: `%LOCALAPPDATA%\Yahoozy`; macOS:
/// `~/Library/Application Support/Yahoozy`; elsewhere `$XDG_DATA_HOME/yahoozy`
/// with the usual `~/.local/share` fallback.
pub fn resolve() -> Result<PathBuf, String> {
    #[cfg(windows)]
    {
        let base = env::var("LOCALAPPDATA")
            .map_err(|_| "LOCALAPPDATA is not set".to_string())?;
        Ok(PathBuf::from(base).join("Yahoozy"))
    }

    #[cfg(target_os = "macos")]
    {
        let home = env::var("HOME").map_err(|_| "HOME is not set".to_string())?;
        Ok(PathBuf::from(home)
            .join("Library")
            .join("Application Support")
            .join("Yahoozy"))
    }

    #[cfg(not(any(windows, target_os = "macos")))]
    {
        match env::var("XDG_DATA_HOME") {
            Ok(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join("yahoozy")),
            _ => {
                let home = env::var("HOME").map_err(|_| "HOME is not set".to_string())?;
                Ok(PathBuf::from(home).join(".local").join("share").join("yahoozy"))
            }
        }
    }
}
