//! Configuration module for the roster backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::fmt;
use std::net::SocketAddr;

/// Default number of card rows that fit on one exported slide.
pub const DEFAULT_SLIDE_ROWS: usize = 3;

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Log output format (pretty, json)
    pub log_format: LogFormat,
    /// Rows of member cards per exported slide
    pub slide_rows: usize,
}

/// An environment variable held a value that could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}={:?}: {}", self.var, self.value, self.reason)
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let bind_addr = env::var("ROSTER_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let bind_addr = bind_addr.parse().map_err(|e: std::net::AddrParseError| ConfigError {
            var: "ROSTER_BIND_ADDR",
            value: bind_addr.clone(),
            reason: e.to_string(),
        })?;

        let log_level = env::var("ROSTER_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_format = match env::var("ROSTER_LOG_FORMAT") {
            Ok(raw) => parse_log_format(&raw)?,
            Err(_) => LogFormat::default(),
        };

        let slide_rows = match env::var("ROSTER_SLIDE_ROWS") {
            Ok(raw) => parse_slide_rows(&raw)?,
            Err(_) => DEFAULT_SLIDE_ROWS,
        };

        Ok(Self {
            bind_addr,
            log_level,
            log_format,
            slide_rows,
        })
    }
}

fn parse_log_format(raw: &str) -> Result<LogFormat, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "pretty" | "text" => Ok(LogFormat::Pretty),
        "json" => Ok(LogFormat::Json),
        _ => Err(ConfigError {
            var: "ROSTER_LOG_FORMAT",
            value: raw.to_string(),
            reason: "expected pretty or json".to_string(),
        }),
    }
}

fn parse_slide_rows(raw: &str) -> Result<usize, ConfigError> {
    let invalid = |reason: &str| ConfigError {
        var: "ROSTER_SLIDE_ROWS",
        value: raw.to_string(),
        reason: reason.to_string(),
    };

    match raw.trim().parse::<usize>() {
        Ok(0) => Err(invalid("must be at least 1")),
        Ok(rows) => Ok(rows),
        Err(e) => Err(invalid(&e.to_string())),
    }
}
