//! # Error Types
//!
//! Errors raised while resolving styles and talking to the terminal.
//!
//! We use `thiserror` to derive the `Error` trait implementations and the
//! display messages.

use thiserror::Error;

/// Main error type for conlog operations
///
/// ## Error Categories
///
/// 1. **Style errors**: `InvalidStyleArgument`, `UnknownStyle`
/// 2. **Prompt errors**: `Aborted`, `InputClosed`
/// 3. **I/O errors**: `Io` (writing to stdout, reading from stdin)
#[derive(Error, Debug)]
pub enum ConlogError
{
    /// The style argument cannot describe a style at all
    ///
    /// This happens when:
    /// - A style reference parsed from text is empty or not an identifier
    /// - An ad-hoc override names a color that does not exist
    #[error("Invalid style argument: {0}")]
    InvalidStyleArgument(String),

    /// The style name is well formed but not in the style table
    #[error("Unknown style: {0}")]
    UnknownStyle(String),

    /// The user declined a required confirmation
    ///
    /// Callers match on this variant to cancel gracefully instead of treating
    /// it as a failure.
    #[error("{0}")]
    Aborted(String),

    /// Standard input was closed while a prompt was waiting for an answer
    #[error("Input closed while waiting for an answer")]
    InputClosed,

    /// I/O error while writing output or reading input
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConlogError
{
    /// Returns `true` if the user aborted a confirmation.
    pub const fn is_aborted(&self) -> bool
    {
        matches!(self, Self::Aborted(_))
    }
}

/// Convenience type alias for `Result<T, ConlogError>`
///
/// ```rust
/// use conlog_core::error::ConlogResult;
/// fn foo() -> ConlogResult<()>
/// {
///     Ok(())
/// }
/// ```
pub type ConlogResult<T> = std::result::Result<T, ConlogError>;
