//! # Diagnostics
//!
//! Internal diagnostics for conlog using `tracing`.
//!
//! Diagnostics always go to **stderr** so they never interleave with the
//! formatted lines conlog prints on stdout.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use conlog_utils::init_diagnostics;
//!
//! // Reads RUST_LOG and CONLOG_LOG_FORMAT
//! init_diagnostics().expect("Failed to initialize diagnostics");
//! ```
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Set the filter (e.g., `RUST_LOG=debug`, `RUST_LOG=conlog_core=trace`)
//! - `CONLOG_LOG_FORMAT`: Set output format (`json` or `pretty`, default: `pretty`)

use std::str::FromStr;
use std::{env, io};

use tracing::Level;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::{self};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Environment variable selecting the [`LogFormat`]
pub const FORMAT_ENV: &str = "CONLOG_LOG_FORMAT";

/// Diagnostics output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat
{
    /// Pretty-printed, human-readable format (default)
    Pretty,
    /// JSON format
    Json,
}

impl FromStr for LogFormat
{
    type Err = DiagnosticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.to_lowercase().as_str() {
            "pretty" | "dev" | "development" => Ok(LogFormat::Pretty),
            "json" | "prod" | "production" => Ok(LogFormat::Json),
            _ => Err(DiagnosticsError::InvalidFormat(s.to_string())),
        }
    }
}

/// Diagnostics level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel
{
    /// Errors only
    Error,
    /// Warning level (default)
    Warn,
    /// Info level
    Info,
    /// Debug level, includes prompt answers and aborts
    Debug,
    /// Trace level, includes one event per formatted message
    Trace,
}

impl From<LogLevel> for Level
{
    fn from(level: LogLevel) -> Self
    {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

impl FromStr for LogLevel
{
    type Err = DiagnosticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.to_lowercase().as_str() {
            "error" | "err" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" | "dbg" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(DiagnosticsError::InvalidLevel(s.to_string())),
        }
    }
}

/// Initialize diagnostics from the environment
///
/// `RUST_LOG` may hold a plain level or a full filter directive; without it
/// only warnings and errors are shown.
///
/// ## Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_diagnostics() -> Result<(), DiagnosticsError>
{
    let format = env::var(FORMAT_ENV)
        .ok()
        .and_then(|s| LogFormat::from_str(&s).ok())
        .unwrap_or(LogFormat::Pretty);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Level::WARN.to_string()));
    init_internal(format, filter)
}

/// Initialize diagnostics with an explicit level and format
///
/// ```rust,no_run
/// use conlog_utils::{init_diagnostics_with_level, LogFormat, LogLevel};
///
/// init_diagnostics_with_level(LogLevel::Debug, LogFormat::Pretty)
///     .expect("Failed to initialize diagnostics");
/// ```
///
/// ## Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_diagnostics_with_level(level: LogLevel, format: LogFormat) -> Result<(), DiagnosticsError>
{
    init_internal(format, EnvFilter::new(Level::from(level).to_string()))
}

fn init_internal(format: LogFormat, filter: EnvFilter) -> Result<(), DiagnosticsError>
{
    let result = match format {
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .with_target(true)
                .with_timer(ChronoUtc::rfc_3339())
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(filter);
            Registry::default().with(layer).try_init()
        }
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_target(true)
                .with_timer(ChronoUtc::rfc_3339())
                .with_current_span(true)
                .with_span_list(true)
                .with_writer(io::stderr)
                .with_filter(filter);
            Registry::default().with(layer).try_init()
        }
    };

    result.map_err(|e| DiagnosticsError::InitializationFailed(e.to_string()))
}

/// Diagnostics initialization error
#[derive(Debug, thiserror::Error)]
pub enum DiagnosticsError
{
    /// Invalid log format
    #[error("Invalid log format: {0}. Use 'pretty' or 'json'")]
    InvalidFormat(String),

    /// Invalid log level
    #[error("Invalid log level: {0}. Use 'error', 'warn', 'info', 'debug', or 'trace'")]
    InvalidLevel(String),

    /// Failed to install the subscriber
    #[error("Failed to initialize diagnostics: {0}")]
    InitializationFailed(String),
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_log_format_from_str()
    {
        assert_eq!(LogFormat::from_str("pretty").unwrap(), LogFormat::Pretty);
        assert_eq!(LogFormat::from_str("json").unwrap(), LogFormat::Json);
        assert_eq!(LogFormat::from_str("dev").unwrap(), LogFormat::Pretty);
        assert_eq!(LogFormat::from_str("prod").unwrap(), LogFormat::Json);
        assert!(matches!(LogFormat::from_str("xml"), Err(DiagnosticsError::InvalidFormat(_))));
    }

    #[test]
    fn test_log_level_from_str()
    {
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);
        assert_eq!(LogLevel::from_str("warning").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("dbg").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert!(matches!(LogLevel::from_str("loud"), Err(DiagnosticsError::InvalidLevel(_))));
    }

    #[test]
    fn test_log_level_to_tracing_level()
    {
        assert_eq!(Level::from(LogLevel::Error), Level::ERROR);
        assert_eq!(Level::from(LogLevel::Warn), Level::WARN);
        assert_eq!(Level::from(LogLevel::Trace), Level::TRACE);
    }

    #[test]
    fn test_second_init_fails()
    {
        let _ = init_diagnostics_with_level(LogLevel::Warn, LogFormat::Pretty);
        let second = init_diagnostics_with_level(LogLevel::Warn, LogFormat::Json);
        assert!(matches!(second, Err(DiagnosticsError::InitializationFailed(_))));
    }
}
