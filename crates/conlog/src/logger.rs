//! # Logger
//!
//! Convenience methods binding the predefined styles to formatted output.
//!
//! ## Example
//!
//! ```rust,no_run
//! let mut log = conlog::logger();
//!
//! log.info("Fetching submissions")?;
//! log.log_cmd("git fetch --all")?;
//! log.warning("2 submissions skipped\nsee report for details")?;
//! log.ok("Done")?;
//! # Ok::<(), conlog::ConlogError>(())
//! ```

use std::env;
use std::path::Path;

use chrono::{DateTime, Utc};
use conlog_core::style::names;
use conlog_core::{colorize, format_message_at, ConlogResult, StyleDescriptor, StyleOverride, StyleRef, StyleTable};
use conlog_utils::ColorMode;
use crossterm::style::Color;

use crate::terminal::{StdioTerminal, Terminal};

/// Writes formatted, timestamped messages to a [`Terminal`]
///
/// A logger carries no state besides its terminal and its output settings;
/// styles come from the process-wide [`StyleTable`].
#[derive(Debug)]
pub struct Logger<T = StdioTerminal>
{
    pub(crate) terminal: T,
    pub(crate) color_mode: ColorMode,
    clock: fn() -> DateTime<Utc>,
}

impl<T: Terminal> Logger<T>
{
    /// Create a logger that colors its output and stamps it with the current time.
    pub fn new(terminal: T) -> Self
    {
        Self { terminal, color_mode: ColorMode::Always, clock: Utc::now }
    }

    #[must_use]
    pub fn with_color_mode(mut self, color_mode: ColorMode) -> Self
    {
        self.color_mode = color_mode;
        self
    }

    /// Replace the time source used for timestamps.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self
    {
        self.clock = clock;
        self
    }

    pub const fn color_mode(&self) -> ColorMode
    {
        self.color_mode
    }

    pub const fn terminal(&self) -> &T
    {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut T
    {
        &mut self.terminal
    }

    pub fn into_terminal(self) -> T
    {
        self.terminal
    }

    /// Color `text`, or return it unchanged when color is off.
    pub fn color(&self, text: &str, color: Option<Color>) -> String
    {
        colorize(text, color.filter(|_| self.color_mode.use_color()))
    }

    /// Print `msg` without any formatting.
    ///
    /// ## Errors
    ///
    /// Returns an error if the terminal cannot be written.
    pub fn say(&mut self, msg: &str) -> ConlogResult<()>
    {
        self.terminal.say(msg)
    }

    /// Build the text [`Logger::log`] would print.
    ///
    /// ## Errors
    ///
    /// Returns [`ConlogError::UnknownStyle`](conlog_core::ConlogError::UnknownStyle)
    /// if the style name is not in the table.
    pub fn format(&self, msg: &str, style: impl Into<StyleRef>) -> ConlogResult<String>
    {
        let style = self.resolve(&style.into())?;
        Ok(format_message_at(msg, &style, (self.clock)()))
    }

    /// Print `msg` with a timestamp and the given style.
    ///
    /// ## Errors
    ///
    /// Returns an error if the style cannot be resolved or the terminal cannot
    /// be written.
    pub fn log(&mut self, msg: &str, style: impl Into<StyleRef>) -> ConlogResult<()>
    {
        let text = self.format(msg, style)?;
        self.terminal.say(&text)
    }

    /// Log `msg` in green, without a header.
    ///
    /// ## Errors
    ///
    /// Returns an error if the terminal cannot be written.
    pub fn ok(&mut self, msg: &str) -> ConlogResult<()>
    {
        self.log(msg, names::OK)
    }

    /// Log `msg` under an `INFO:` header.
    ///
    /// ## Errors
    ///
    /// Returns an error if the terminal cannot be written.
    pub fn info(&mut self, msg: &str) -> ConlogResult<()>
    {
        self.log(msg, names::INFO)
    }

    /// Log `msg` in yellow under a `WARN:` header.
    ///
    /// ## Errors
    ///
    /// Returns an error if the terminal cannot be written.
    pub fn warning(&mut self, msg: &str) -> ConlogResult<()>
    {
        self.log(msg, names::WARNING)
    }

    /// Log `msg` in red under an `ERR:` header padded to the width of `WARN:`.
    ///
    /// ## Errors
    ///
    /// Returns an error if the terminal cannot be written.
    pub fn error(&mut self, msg: &str) -> ConlogResult<()>
    {
        self.log(msg, names::ERROR)
    }

    /// Log `msg` in blue under a `$` header.
    ///
    /// Only the look of a shell command; `msg` need not be one.
    ///
    /// ## Errors
    ///
    /// Returns an error if the terminal cannot be written.
    pub fn log_cmd(&mut self, msg: &str) -> ConlogResult<()>
    {
        self.log(msg, names::CMD)
    }

    /// Like [`Logger::log_cmd`], with `path` in brackets before the `$`.
    ///
    /// ## Errors
    ///
    /// Returns an error if the terminal cannot be written.
    pub fn log_cmd_with_path(&mut self, msg: &str, path: impl AsRef<Path>) -> ConlogResult<()>
    {
        let cmd = StyleTable::global().lookup(names::CMD)?;
        let mut style = StyleOverride::new().header(format!("[{}] $", path.as_ref().display()));
        style.color = cmd.color;
        self.log(msg, style)
    }

    /// [`Logger::log_cmd_with_path`] with the current working directory.
    ///
    /// ## Errors
    ///
    /// Returns an error if the working directory cannot be read or the
    /// terminal cannot be written.
    pub fn log_cmd_in_cwd(&mut self, msg: &str) -> ConlogResult<()>
    {
        let cwd = env::current_dir()?;
        self.log_cmd_with_path(msg, cwd)
    }

    /// Print `msg` between two blank lines.
    ///
    /// ## Errors
    ///
    /// Returns an error if the terminal cannot be written.
    pub fn say_with_space(&mut self, msg: &str) -> ConlogResult<()>
    {
        self.say("\n")?;
        self.say(msg)?;
        self.say("\n")
    }

    /// Log `msg` between two blank lines.
    ///
    /// ## Errors
    ///
    /// Returns an error if the style cannot be resolved or the terminal cannot
    /// be written.
    pub fn log_with_space(&mut self, msg: &str, style: impl Into<StyleRef>) -> ConlogResult<()>
    {
        self.say("\n")?;
        self.log(msg, style)?;
        self.say("\n")
    }

    fn resolve(&self, style: &StyleRef) -> ConlogResult<StyleDescriptor>
    {
        let resolved = style.resolve()?;
        Ok(if self.color_mode.use_color() { resolved } else { resolved.without_color() })
    }
}
