//! Environment configuration.
//!
//! - `CONLOG_COLOR`: `always` or `never` (default: `always`)

use std::env;
use std::str::FromStr;

/// Environment variable selecting the [`ColorMode`]
pub const COLOR_ENV: &str = "CONLOG_COLOR";

/// Whether formatted output carries color escape sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode
{
    /// Color every styled header and line (default)
    #[default]
    Always,
    /// Print plain text only
    Never,
}

impl ColorMode
{
    /// Read the mode from `CONLOG_COLOR`, falling back to [`ColorMode::Always`].
    pub fn from_env() -> Self
    {
        env::var(COLOR_ENV).ok().and_then(|s| s.parse().ok()).unwrap_or_default()
    }

    pub const fn use_color(self) -> bool
    {
        matches!(self, Self::Always)
    }
}

impl FromStr for ColorMode
{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.trim().to_lowercase().as_str() {
            "always" | "on" | "true" | "1" => Ok(ColorMode::Always),
            "never" | "off" | "false" | "0" => Ok(ColorMode::Never),
            _ => Err(format!("Unknown color mode: {s}. Use 'always' or 'never'")),
        }
    }
}
