//! # Terminal
//!
//! The two terminal capabilities conlog needs besides printing: a yes/no
//! question and a typed confirmation.
//!
//! [`StdTerminal`] implements them over a [`LineSource`] and a `Write`, which
//! are stdin/stdout in production and in-memory buffers in tests.

use std::io::{self, BufRead, BufReader, Cursor, Read, Stdin, Stdout, Write};

use conlog_core::{ConlogError, ConlogResult};

/// Answer accepted by [`Terminal::confirm`] to back out
pub const CANCEL: &str = "cancel";

/// Printed after an answer that is neither yes nor no
pub const YES_NO_HINT: &str = "Please enter \"yes\" or \"no\".";

/// Terminal used by a [`Logger`](crate::Logger)
pub trait Terminal
{
    /// Print `text`.
    ///
    /// Empty text prints nothing. Text ending in a newline, a space or a tab is
    /// printed as is; anything else gets a trailing newline.
    ///
    /// ## Errors
    ///
    /// Returns [`ConlogError::Io`] if the output cannot be written.
    fn say(&mut self, text: &str) -> ConlogResult<()>;

    /// Ask `question` until the answer is yes or no.
    ///
    /// ## Errors
    ///
    /// Returns [`ConlogError::InputClosed`] if input ends before an answer.
    fn agree(&mut self, question: &str) -> ConlogResult<bool>;

    /// Ask `question` until the answer is exactly `expected` or [`CANCEL`].
    ///
    /// ## Errors
    ///
    /// Returns [`ConlogError::Aborted`] if the user cancels and
    /// [`ConlogError::InputClosed`] if input ends before an answer.
    fn confirm(&mut self, question: &str, expected: &str) -> ConlogResult<()>;
}

/// Where a [`StdTerminal`] reads answers from
///
/// `Stdin` takes its lock only for the duration of one `read_line`, so a
/// terminal holding it never blocks other readers between prompts.
pub trait LineSource
{
    /// Append one line to `buf`, returning the number of bytes read (0 at end of input).
    ///
    /// ## Errors
    ///
    /// Returns any error from the underlying reader.
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl LineSource for Stdin
{
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>
    {
        Stdin::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineSource for Cursor<T>
{
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>
    {
        BufRead::read_line(self, buf)
    }
}

impl<R: Read> LineSource for BufReader<R>
{
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>
    {
        BufRead::read_line(self, buf)
    }
}

impl LineSource for &[u8]
{
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>
    {
        BufRead::read_line(self, buf)
    }
}

/// Terminal bound to the process' stdin and stdout
pub type StdioTerminal = StdTerminal<Stdin, Stdout>;

/// Line-based terminal over a reader and a writer
#[derive(Debug)]
pub struct StdTerminal<R, W>
{
    input: R,
    output: W,
}

impl StdTerminal<Stdin, Stdout>
{
    pub fn stdio() -> Self
    {
        Self::new(io::stdin(), io::stdout())
    }
}

impl<R: LineSource, W: Write> StdTerminal<R, W>
{
    pub const fn new(input: R, output: W) -> Self
    {
        Self { input, output }
    }

    pub const fn output(&self) -> &W
    {
        &self.output
    }

    pub fn into_output(self) -> W
    {
        self.output
    }

    fn prompt(&mut self, question: &str) -> ConlogResult<String>
    {
        self.output.write_all(question.as_bytes())?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(ConlogError::InputClosed);
        }
        Ok(answer.trim().to_string())
    }
}

impl<R: LineSource, W: Write> Terminal for StdTerminal<R, W>
{
    fn say(&mut self, text: &str) -> ConlogResult<()>
    {
        if text.is_empty() {
            return Ok(());
        }
        self.output.write_all(text.as_bytes())?;
        if !text.ends_with(['\n', ' ', '\t']) {
            self.output.write_all(b"\n")?;
        }
        self.output.flush()?;
        Ok(())
    }

    fn agree(&mut self, question: &str) -> ConlogResult<bool>
    {
        loop {
            let answer = self.prompt(question)?.to_lowercase();
            match answer.as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => {
                    tracing::debug!(answer = %answer, "rejected yes/no answer");
                    writeln!(self.output, "{YES_NO_HINT}")?;
                }
            }
        }
    }

    fn confirm(&mut self, question: &str, expected: &str) -> ConlogResult<()>
    {
        let question = format!("{question} (type {expected} or {CANCEL}): ");
        loop {
            let answer = self.prompt(&question)?;
            if answer == expected {
                return Ok(());
            }
            if answer.eq_ignore_ascii_case(CANCEL) {
                return Err(ConlogError::Aborted("Cancelled!".to_string()));
            }
            writeln!(self.output, "Please type {expected} to confirm or {CANCEL} to abort.")?;
        }
    }
}
