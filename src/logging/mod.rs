//! Diagnostic logging to disk.
//!
//! When enabled, installs a `tracing` subscriber that appends to a daily log
//! file named `crabcalc_<date>.log` in the configured log directory (default:
//! `~/.local/share/crabcalc/logs/`). Nothing is written to the terminal.

use crate::config::LoggingConfig;
use anyhow::{anyhow, Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Returns the log file path, or `None` when
/// logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let filter = EnvFilter::try_new(&config.level)
        .with_context(|| format!("Invalid log level '{}'", config.level))?;

    let log_dir = expand_home(&config.log_dir);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let path = log_file_path(&log_dir);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(Some(path))
}

fn log_file_path(log_dir: &Path) -> PathBuf {
    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    log_dir.join(format!("crabcalc_{}.log", date))
}

// Expand a leading ~ in the configured directory
fn expand_home(dir: &str) -> PathBuf {
    match dir.strip_prefix("~/") {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => PathBuf::from(dir),
        },
        None => PathBuf::from(dir),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_installs_nothing() {
        let config = LoggingConfig::default();
        assert!(init(&config).unwrap().is_none());
    }

    #[test]
    fn test_invalid_level_is_rejected() {
        let config = LoggingConfig {
            enabled: true,
            log_dir: std::env::temp_dir().display().to_string(),
            level: "crabcalc=loud".to_string(),
        };
        assert!(init(&config).is_err());
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/var/log/calc"), PathBuf::from("/var/log/calc"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/logs"), home.join("logs"));
        }
    }

    #[test]
    fn test_log_file_name_is_dated() {
        let path = log_file_path(Path::new("/tmp"));
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("crabcalc_"));
        assert!(name.ends_with(".log"));
        assert_eq!(name.len(), "crabcalc_YYYY-MM-DD.log".len());
    }
}
