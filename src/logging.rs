//! Logging System
//!
//! Structured logging via the `tracing` crate. Log level, format, and
//! destination come from a [`LoggingConfig`], with `REMAT_LOG` and
//! `REMAT_LOG_FORMAT` environment variables taking precedence so a run can
//! be re-configured without touching flags.

use crate::error::ExportError;
use serde::{Deserialize, Serialize};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Enable colored output (text format only)
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            color: default_true(),
        }
    }
}

/// Initialize the logging system
///
/// Logs go to stderr so the exported summary on stdout stays clean.
/// Priority order (highest to lowest): environment variables, the passed
/// config, defaults.
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), ExportError> {
    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;
    let use_color = config.map(|c| c.color).unwrap_or(true);

    let base_subscriber = Registry::default().with(filter);
    if format == "json" {
        base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(use_color)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}

/// Build environment filter from config or the `REMAT_LOG` variable
fn build_env_filter(config: Option<&LoggingConfig>) -> Result<EnvFilter, ExportError> {
    if let Ok(filter) = EnvFilter::try_from_env("REMAT_LOG") {
        return Ok(filter);
    }
    let level = config.map(|c| c.level.as_str()).unwrap_or("info");
    Ok(EnvFilter::new(level))
}

/// Determine output format from config or the `REMAT_LOG_FORMAT` variable
fn determine_format(config: Option<&LoggingConfig>) -> Result<String, ExportError> {
    if let Ok(format) = std::env::var("REMAT_LOG_FORMAT") {
        if format == "json" || format == "text" {
            return Ok(format);
        }
    }

    let format = config.map(|c| c.format.as_str()).unwrap_or("text");
    if format != "json" && format != "text" {
        return Err(ExportError::Config(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            format
        )));
    }
    Ok(format.to_string())
}
