// Platform paths
// Resolves per-OS configuration and data directories for mapfav.
//
// Linux:   $XDG_CONFIG_HOME/mapfav, $XDG_DATA_HOME/mapfav (~/.config, ~/.local/share)
// macOS:   ~/Library/Application Support/MapFav for both
// Windows: %APPDATA%/MapFav for both

use std::env;
use std::path::PathBuf;

/// Overrides the data directory when set.
pub const DATA_DIR_ENV: &str = "MAPFAV_DATA_DIR";

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

#[cfg(target_os = "linux")]
fn xdg_dir(var: &str, fallback: &[&str]) -> PathBuf {
    match env::var(var) {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir).join("mapfav"),
        _ => fallback
            .iter()
            .fold(home_dir(), |p, part| p.join(part))
            .join("mapfav"),
    }
}

#[cfg(target_os = "windows")]
fn app_data_dir() -> PathBuf {
    env::var("APPDATA")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join("AppData").join("Roaming"))
        .join("MapFav")
}

/// Returns the platform-specific configuration directory.
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        xdg_dir("XDG_CONFIG_HOME", &[".config"])
    }
    #[cfg(target_os = "macos")]
    {
        home_dir()
            .join("Library")
            .join("Application Support")
            .join("MapFav")
    }
    #[cfg(target_os = "windows")]
    {
        app_data_dir()
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        home_dir().join(".mapfav")
    }
}

/// Returns the platform-specific data directory, honoring `MAPFAV_DATA_DIR`.
pub fn get_data_dir() -> PathBuf {
    if let Ok(dir) = env::var(DATA_DIR_ENV) {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    #[cfg(target_os = "linux")]
    {
        xdg_dir("XDG_DATA_HOME", &[".local", "share"])
    }
    #[cfg(target_os = "macos")]
    {
        get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        app_data_dir()
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        get_config_dir()
    }
}

/// Returns the default path of the favorites database.
pub fn default_db_path() -> PathBuf {
    get_data_dir().join("mapfav.db")
}
