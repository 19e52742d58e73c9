//! Runtime configuration read from the environment (and an optional `.env` file).

use crate::api::{DEFAULT_HISTORY_DAYS, MAX_HISTORY_DAYS};
use crate::error::{AppError, Result};
use crate::locations::DEFAULT_LOCATION;
use std::env;
use std::path::PathBuf;
use tracing::debug;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Logging settings. `RUST_LOG` still takes precedence over `level`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    pub format: LogFormat,
    /// Directory for daily-rolling log files; stderr only when unset.
    pub dir: Option<PathBuf>,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Location used when no name is given.
    pub default_location: String,
    /// Historical window used when the user does not pick one.
    pub history_days: u32,
    /// Whether the provider imitates network delays.
    pub simulate_latency: bool,
    /// Seed for reproducible readings; entropy when `None`.
    pub seed: Option<u64>,
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_location: DEFAULT_LOCATION.to_string(),
            history_days: DEFAULT_HISTORY_DAYS,
            simulate_latency: true,
            seed: None,
            log: LogConfig {
                level: "info".to_string(),
                format: LogFormat::Text,
                dir: None,
            },
        }
    }
}

impl Config {
    /// Loads `.env` if present, then reads every `AQI_*` variable over the defaults.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` for values that are set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        let defaults = Self::default();

        let config = Self {
            default_location: var("AQI_DEFAULT_LOCATION")
                .unwrap_or(defaults.default_location),
            history_days: match var("AQI_HISTORY_DAYS") {
                Some(raw) => parse_history_days(&raw)?,
                None => defaults.history_days,
            },
            simulate_latency: match var("AQI_SIMULATE_LATENCY") {
                Some(raw) => parse_bool("AQI_SIMULATE_LATENCY", &raw)?,
                None => defaults.simulate_latency,
            },
            seed: var("AQI_SEED")
                .map(|raw| parse_number("AQI_SEED", &raw))
                .transpose()?,
            log: LogConfig {
                level: defaults.log.level,
                format: match var("AQI_LOG_FORMAT") {
                    Some(raw) => parse_log_format(&raw)?,
                    None => defaults.log.format,
                },
                dir: var("AQI_LOG_DIR").map(PathBuf::from),
            },
        };
        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }
}

/// Reads a variable, treating unset and blank the same.
fn var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_number<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.parse()
        .map_err(|_| AppError::Config(format!("{} must be a non-negative integer, got \"{}\"", key, raw)))
}

fn parse_history_days(raw: &str) -> Result<u32> {
    let days: u32 = parse_number("AQI_HISTORY_DAYS", raw)?;
    if days > MAX_HISTORY_DAYS {
        return Err(AppError::Config(format!(
            "AQI_HISTORY_DAYS must be at most {}, got {}",
            MAX_HISTORY_DAYS, days
        )));
    }
    Ok(days)
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AppError::Config(format!(
            "{} must be true or false, got \"{}\"",
            key, raw
        ))),
    }
}

fn parse_log_format(raw: &str) -> Result<LogFormat> {
    match raw.to_lowercase().as_str() {
        "text" | "pretty" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        _ => Err(AppError::Config(format!(
            "AQI_LOG_FORMAT must be text or json, got \"{}\"",
            raw
        ))),
    }
}
