//! # Message Formatting
//!
//! Turns a raw, possibly multi-line message and a [`StyleDescriptor`] into the
//! text that gets printed.
//!
//! Every line gets the same prefix width: the first line carries the
//! timestamp and the header, later lines carry blanks of the same width so the
//! message body stays aligned.
//!
//! ```text
//! 10:00:00 UTC WARN: disk almost full
//!                    2% left on /var
//! ```

use chrono::{DateTime, Utc};
use crossterm::style::{Color, Stylize};

use crate::style::StyleDescriptor;

/// `strftime` pattern of the timestamp, e.g. `10:00:00 UTC`
pub const TIMESTAMP_FORMAT: &str = "%T UTC";

/// Wrap `text` in the escape sequences for `color`.
///
/// With no color the text is returned unchanged.
pub fn colorize(text: &str, color: Option<Color>) -> String
{
    match color {
        Some(color) => text.with(color).to_string(),
        None => text.to_string(),
    }
}

/// Current UTC time as `HH:MM:SS UTC`.
pub fn timestamp() -> String
{
    timestamp_at(Utc::now())
}

pub fn timestamp_at(now: DateTime<Utc>) -> String
{
    now.format(TIMESTAMP_FORMAT).to_string()
}

/// Make sure a non-empty header ends with a space.
///
/// An empty header stays empty and an existing trailing space is kept as is.
pub fn normalize_header(header: &str) -> String
{
    if header.is_empty() || header.ends_with(' ') {
        header.to_string()
    } else {
        format!("{header} ")
    }
}

/// Format `message` with the current time.
pub fn format_message(message: &str, style: &StyleDescriptor) -> String
{
    format_message_at(message, style, Utc::now())
}

/// Format `message` as if it were logged at `now`.
///
/// The timestamp is computed once for the whole message. Each line ends with
/// `\n`. Trailing empty lines are dropped but at least one line is always
/// produced.
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use conlog_core::format::format_message_at;
/// use conlog_core::style::StyleDescriptor;
///
/// let now = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
/// let style = StyleDescriptor::new("INFO:", None);
/// assert_eq!(
///     format_message_at("one\ntwo", &style, now),
///     "10:00:00 UTC INFO: one\n                   two\n"
/// );
/// ```
pub fn format_message_at(message: &str, style: &StyleDescriptor, now: DateTime<Utc>) -> String
{
    let ts = timestamp_at(now);
    let header = normalize_header(&style.header);

    let blank_ts = " ".repeat(ts.chars().count());
    let blank_header = " ".repeat(header.chars().count());

    let lines = split_lines(message);
    tracing::trace!(lines = lines.len(), header = %header, color = ?style.color, "formatting message");

    let mut formatted = String::new();
    for (index, line) in lines.iter().enumerate() {
        let (ts, header) = if index == 0 { (ts.as_str(), header.as_str()) } else { (blank_ts.as_str(), blank_header.as_str()) };
        // The blank header still goes through colorize, so background styles
        // keep covering the padding.
        formatted.push_str(ts);
        formatted.push(' ');
        formatted.push_str(&colorize(header, style.color));
        formatted.push_str(&colorize(line, style.color));
        formatted.push('\n');
    }
    formatted
}

fn split_lines(message: &str) -> Vec<&str>
{
    let mut lines: Vec<&str> = message.split('\n').collect();
    while lines.len() > 1 && lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}
