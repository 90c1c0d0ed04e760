//! Common module for library exports

pub use crate::error::{ConlogError, ConlogResult};
pub use crate::format::{colorize, format_message, format_message_at, normalize_header, timestamp, timestamp_at};
pub use crate::style::{names, parse_color, StyleDescriptor, StyleOverride, StyleRef, StyleTable};
pub use crossterm::style::Color;
