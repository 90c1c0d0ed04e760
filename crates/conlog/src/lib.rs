//! # conlog
//!
//! Colorized, timestamped console log lines and yes/no confirmation prompts.
//!
//! ```text
//! 10:00:00 UTC INFO: Fetching submissions
//! 10:00:01 UTC $ git fetch --all
//! 10:00:04 UTC WARN: 2 submissions skipped
//!                    see report for details
//! ¿ Proceed [yes] or Abort [no]? (yes/no)
//! ```
//!
//! ## Crates
//!
//! - `conlog-core`: style table, colorizing and message formatting
//! - `conlog-utils`: diagnostics and environment configuration
//!
//! ## Example
//!
//! ```rust,no_run
//! use conlog::{ConlogError, StyleOverride};
//!
//! fn deploy() -> Result<(), ConlogError>
//! {
//!     let mut log = conlog::logger();
//!     log.log_cmd_with_path("make deploy", "/srv/app")?;
//!     log.require_agreement(None)?;
//!     log.log("custom", StyleOverride::new().header("DEPLOY:"))?;
//!     log.ok("Deployed")
//! }
//! ```

pub mod logger;
pub mod prompt;
pub mod terminal;

pub use conlog_core::style::names;
pub use conlog_core::{ConlogError, ConlogResult, StyleDescriptor, StyleOverride, StyleRef, StyleTable};
pub use conlog_utils::ColorMode;
pub use crossterm::style::Color;
pub use logger::Logger;
pub use prompt::DEFAULT_AGREEMENT_QUESTION;
pub use terminal::{StdTerminal, StdioTerminal, Terminal};

/// Logger bound to stdin and stdout, colored according to `CONLOG_COLOR`.
pub fn logger() -> Logger
{
    Logger::new(StdTerminal::stdio()).with_color_mode(ColorMode::from_env())
}
