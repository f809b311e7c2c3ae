//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML.
//! Every field has a default so the calculator runs without a config file.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// UI timing and feedback settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// How many ticks a keypad button stays highlighted after a press.
    #[serde(default = "default_flash_ticks")]
    pub flash_ticks: u8,
    #[serde(default = "default_true")]
    pub show_pending_hint: bool,
    #[serde(default)]
    pub bell_on_error: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            flash_ticks: default_flash_ticks(),
            show_pending_hint: true,
            bell_on_error: false,
        }
    }
}

/// Diagnostic log settings. The terminal is owned by the UI, so logs go to a
/// file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// `tracing_subscriber::EnvFilter` directive, e.g. `debug` or `crabcalc=trace`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_tick_rate() -> u64 {
    50
}
fn default_flash_ticks() -> u8 {
    3
}
fn default_log_dir() -> String {
    "~/.local/share/crabcalc/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
