//! # conlog Utilities
//!
//! Shared diagnostics and environment configuration for conlog.
//!
//! The formatted console output is conlog's product. What happens inside the
//! library (style resolution, prompt answers) is reported separately through
//! `tracing`, and this crate sets up the subscriber for it.

pub mod config;
pub mod diagnostics;

pub use config::ColorMode;
// Re-export the diagnostics entry points for convenience
pub use diagnostics::{init_diagnostics, init_diagnostics_with_level, DiagnosticsError, LogFormat, LogLevel};
