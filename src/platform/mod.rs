// Career Buddy platform paths
//
// Linux:   $XDG_CONFIG_HOME/careerbuddy, $XDG_DATA_HOME/careerbuddy
// macOS:   ~/Library/Application Support/CareerBuddy
// Windows: %APPDATA%/CareerBuddy

use std::env;
use std::path::PathBuf;

/// Overrides the data directory on every platform.
pub const DATA_DIR_ENV: &str = "CAREERBUDDY_DATA_DIR";

#[cfg_attr(target_os = "windows", allow(dead_code))]
fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

#[cfg(target_os = "linux")]
fn xdg_dir(var: &str, fallback: &[&str]) -> PathBuf {
    match env::var(var) {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir).join("careerbuddy"),
        _ => fallback
            .iter()
            .fold(home_dir(), |path, part| path.join(part))
            .join("careerbuddy"),
    }
}

#[cfg(target_os = "windows")]
fn appdata_dir() -> PathBuf {
    let appdata = env::var("APPDATA")
        .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("CareerBuddy")
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
            .join("CareerBuddy")
    }
    #[cfg(target_os = "windows")]
    {
        appdata_dir()
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        home_dir().join(".careerbuddy")
    }
}

/// Returns the data directory holding the SQLite store.
///
/// `CAREERBUDDY_DATA_DIR` wins when set.
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
        appdata_dir()
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        home_dir().join(".careerbuddy")
    }
}

/// Default location of the SQLite database file.
pub fn default_db_path() -> PathBuf {
    get_data_dir().join("careerbuddy.db")
}
