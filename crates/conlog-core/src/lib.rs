//! # conlog-core
//!
//! Styles and message formatting for conlog.
//!
//! This crate holds everything that does not touch a terminal:
//! - The immutable table of named styles (`cmd`, `error`, `warning`, `info`, `ok`, `default`)
//! - Ad-hoc style overrides and their resolution
//! - Colorizing text with `crossterm`
//! - Timestamped, aligned formatting of multi-line messages
//!
//! ## Example
//!
//! ```rust
//! use conlog_core::{format_message, StyleRef};
//!
//! let style = StyleRef::from("warning").resolve().unwrap();
//! let text = format_message("disk almost full", &style);
//! assert!(text.ends_with('\n'));
//! ```

pub mod error;
pub mod format;
pub mod prelude;
pub mod style;

pub use error::{ConlogError, ConlogResult};
pub use format::{colorize, format_message, format_message_at, timestamp};
pub use style::{parse_color, StyleDescriptor, StyleOverride, StyleRef, StyleTable};
