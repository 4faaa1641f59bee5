//! Where the client keeps its config file and logs.
//!
//! Debug builds and `cargo run` use the working directory. Installed builds
//! use the platform config and data directories under `verse-client/`.
//! `VERSE_CONFIG_DIR` overrides the config directory in every mode.

use std::path::PathBuf;

use crate::constants::CONFIG_DIR_ENV;

const APP_DIR_NAME: &str = "verse-client";

/// True under `cargo run` or in a debug build.
pub fn is_dev_mode() -> bool {
    std::env::var("CARGO").is_ok() || cfg!(debug_assertions)
}

fn config_dir_override() -> Option<PathBuf> {
    std::env::var_os(CONFIG_DIR_ENV)
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
}

/// Directory holding `config.json`.
pub fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = config_dir_override() {
        return Some(dir);
    }

    if is_dev_mode() {
        return Some(PathBuf::from("."));
    }

    // Only Linux separates config from data
    #[cfg(target_os = "linux")]
    {
        dirs::config_dir().map(|p| p.join(APP_DIR_NAME))
    }

    #[cfg(not(target_os = "linux"))]
    {
        data_dir()
    }
}

fn data_dir() -> Option<PathBuf> {
    if is_dev_mode() {
        return Some(PathBuf::from("."));
    }

    dirs::data_dir().map(|p| p.join(APP_DIR_NAME))
}

pub fn config_file() -> PathBuf {
    config_dir()
        .map(|p| p.join("config.json"))
        .unwrap_or_else(|| PathBuf::from("config.json"))
}

/// Directory for the rolling log file.
pub fn logs_dir() -> PathBuf {
    data_dir()
        .map(|p| p.join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// Create the config and logs directories. Runs before logging is up.
pub fn ensure_directories() -> std::io::Result<()> {
    if let Some(config) = config_dir() {
        std::fs::create_dir_all(&config)?;
    }
    std::fs::create_dir_all(logs_dir())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_resolves() {
        assert!(config_dir().is_some());
    }

    #[test]
    fn test_config_file_is_config_json() {
        assert_eq!(
            config_file().file_name().and_then(|n| n.to_str()),
            Some("config.json")
        );
    }

    #[test]
    fn test_logs_dir_ends_with_logs() {
        assert!(logs_dir().ends_with("logs"));
    }

    #[test]
    fn test_debug_build_keeps_data_local() {
        assert!(is_dev_mode());
        assert_eq!(data_dir(), Some(PathBuf::from(".")));
        assert_eq!(logs_dir(), PathBuf::from("./logs"));
    }
}
