//! # Styles
//!
//! Named header/color pairs and the ad-hoc overrides callers can supply instead.
//!
//! The style table is built once, on first use, and never mutated afterwards.
//! Every log call resolves a [`StyleRef`] into a [`StyleDescriptor`] through
//! [`StyleRef::resolve`].
//!
//! ## Predefined styles
//!
//! | name      | header     | color  |
//! |-----------|------------|--------|
//! | `cmd`     | `"$ "`     | blue   |
//! | `error`   | `"ERR:  "` | red    |
//! | `warning` | `"WARN: "` | yellow |
//! | `info`    | `"INFO: "` | none   |
//! | `ok`      | `""`       | green  |
//! | `default` | `""`       | none   |

use std::fmt;
use std::str::FromStr;

use crossterm::style::Color;
use once_cell::sync::Lazy;

use crate::error::{ConlogError, ConlogResult};

/// Names of the predefined styles
pub mod names
{
    /// Command echo, `$ ` in blue
    pub const CMD: &str = "cmd";
    /// `ERR:` in red, padded to line up with the other headers
    pub const ERROR: &str = "error";
    /// `WARN:` in yellow
    pub const WARNING: &str = "warning";
    /// `INFO:` without color
    pub const INFO: &str = "info";
    /// No header, green text
    pub const OK: &str = "ok";
    /// No header, no color
    pub const DEFAULT: &str = "default";
}

static STYLE_TABLE: Lazy<StyleTable> = Lazy::new(StyleTable::predefined);

/// How a log line is rendered: a literal header and an optional color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDescriptor
{
    /// Literal prefix printed before the first line of a message
    pub header: String,
    /// Color applied to the header and to every line of the message
    pub color: Option<Color>,
}

impl StyleDescriptor
{
    /// Create a descriptor from a header and an optional color.
    pub fn new(header: impl Into<String>, color: Option<Color>) -> Self
    {
        Self { header: header.into(), color }
    }

    /// Same header, color removed.
    #[must_use]
    pub fn without_color(mut self) -> Self
    {
        self.color = None;
        self
    }
}

/// Partial style merged over the `default` style
///
/// Fields left unset fall back to the `default` style (empty header, no
/// color), never to any other named style.
///
/// ```rust
/// use conlog_core::style::StyleOverride;
/// use crossterm::style::Color;
///
/// let style = StyleOverride::new().header("[/tmp] $").color(Color::Blue);
/// assert_eq!(style.header.as_deref(), Some("[/tmp] $"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleOverride
{
    /// Header replacing the default one
    pub header: Option<String>,
    /// Color replacing the default one
    pub color: Option<Color>,
}

impl StyleOverride
{
    pub fn new() -> Self
    {
        Self::default()
    }

    #[must_use]
    pub fn header(mut self, header: impl Into<String>) -> Self
    {
        self.header = Some(header.into());
        self
    }

    #[must_use]
    pub const fn color(mut self, color: Color) -> Self
    {
        self.color = Some(color);
        self
    }

    /// Set the color by name, see [`parse_color`].
    ///
    /// ## Errors
    ///
    /// Returns [`ConlogError::InvalidStyleArgument`] if the name is not a known color.
    pub fn color_name(self, name: &str) -> ConlogResult<Self>
    {
        Ok(self.color(parse_color(name)?))
    }

    /// Merge this override on top of `base`.
    pub fn merge_over(&self, base: &StyleDescriptor) -> StyleDescriptor
    {
        StyleDescriptor {
            header: self.header.clone().unwrap_or_else(|| base.header.clone()),
            color: self.color.or(base.color),
        }
    }
}

/// A style argument: either a style name or an ad-hoc override
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleRef
{
    /// Name looked up in the style table
    Name(String),
    /// Partial style merged over `default`
    Override(StyleOverride),
}

impl StyleRef
{
    /// Resolve against the process-wide style table.
    ///
    /// ## Errors
    ///
    /// Returns [`ConlogError::InvalidStyleArgument`] for a name that is not an
    /// identifier and [`ConlogError::UnknownStyle`] for one that is not in the table.
    pub fn resolve(&self) -> ConlogResult<StyleDescriptor>
    {
        self.resolve_in(StyleTable::global())
    }

    /// Resolve against an explicit table.
    ///
    /// ## Errors
    ///
    /// Same as [`StyleRef::resolve`], against `table`.
    pub fn resolve_in(&self, table: &StyleTable) -> ConlogResult<StyleDescriptor>
    {
        match self {
            Self::Name(name) => table.lookup(check_name(name)?).cloned(),
            Self::Override(style) => Ok(style.merge_over(table.lookup(names::DEFAULT)?)),
        }
    }
}

impl Default for StyleRef
{
    fn default() -> Self
    {
        Self::Name(names::DEFAULT.to_string())
    }
}

impl From<&str> for StyleRef
{
    fn from(name: &str) -> Self
    {
        Self::Name(name.to_string())
    }
}

impl From<String> for StyleRef
{
    fn from(name: String) -> Self
    {
        Self::Name(name)
    }
}

impl From<StyleOverride> for StyleRef
{
    fn from(style: StyleOverride) -> Self
    {
        Self::Override(style)
    }
}

impl FromStr for StyleRef
{
    type Err = ConlogError;

    /// Parse a style name typed by a user or read from configuration.
    ///
    /// Only the shape is checked here; whether the name exists is decided at
    /// resolution time.
    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        Ok(Self::Name(check_name(s.trim())?.to_string()))
    }
}

/// Names are ASCII identifiers; anything else cannot name a style.
fn check_name(name: &str) -> ConlogResult<&str>
{
    let is_identifier = !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if is_identifier {
        Ok(name)
    } else {
        Err(ConlogError::InvalidStyleArgument(format!("{name:?} is not a style name")))
    }
}

impl fmt::Display for StyleRef
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            Self::Name(name) => write!(f, "{name}"),
            Self::Override(style) => write!(f, "{{header: {:?}, color: {:?}}}", style.header, style.color),
        }
    }
}

/// Immutable mapping from style names to descriptors
#[derive(Debug, Clone)]
pub struct StyleTable
{
    entries: Vec<(&'static str, StyleDescriptor)>,
}

impl StyleTable
{
    /// The six predefined styles, in table order.
    pub fn predefined() -> Self
    {
        Self {
            entries: vec![
                (names::CMD, StyleDescriptor::new("$ ", Some(Color::Blue))),
                (names::ERROR, StyleDescriptor::new("ERR:  ", Some(Color::Red))),
                (names::WARNING, StyleDescriptor::new("WARN: ", Some(Color::Yellow))),
                (names::INFO, StyleDescriptor::new("INFO: ", None)),
                (names::OK, StyleDescriptor::new("", Some(Color::Green))),
                (names::DEFAULT, StyleDescriptor::new("", None)),
            ],
        }
    }

    /// The process-wide table, built on first use.
    pub fn global() -> &'static Self
    {
        &STYLE_TABLE
    }

    /// Look up a style by name.
    ///
    /// ## Errors
    ///
    /// Returns [`ConlogError::UnknownStyle`] if `name` is not in the table.
    pub fn lookup(&self, name: &str) -> ConlogResult<&StyleDescriptor>
    {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, style)| style)
            .ok_or_else(|| ConlogError::UnknownStyle(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool
    {
        self.entries.iter().any(|(entry, _)| *entry == name)
    }

    /// Style names in table order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_
    {
        self.entries.iter().map(|(name, _)| *name)
    }
}

/// Parse a color name such as `blue` or `dark_red`.
///
/// Matching is case-insensitive and accepts both `grey` and `gray`.
///
/// ## Errors
///
/// Returns [`ConlogError::InvalidStyleArgument`] for an unknown name.
pub fn parse_color(name: &str) -> ConlogResult<Color>
{
    let color = match name.trim().to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "grey" | "gray" => Color::Grey,
        "dark_red" => Color::DarkRed,
        "dark_green" => Color::DarkGreen,
        "dark_yellow" => Color::DarkYellow,
        "dark_blue" => Color::DarkBlue,
        "dark_magenta" => Color::DarkMagenta,
        "dark_cyan" => Color::DarkCyan,
        "dark_grey" | "dark_gray" => Color::DarkGrey,
        _ => return Err(ConlogError::InvalidStyleArgument(format!("unknown color {name:?}"))),
    };
    Ok(color)
}
