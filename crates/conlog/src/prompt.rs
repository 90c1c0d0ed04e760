//! # Prompts
//!
//! Framed yes/no questions and typed confirmations on top of a [`Terminal`].
//!
//! Parsing the answers (which tokens count as yes or no, re-asking after an
//! invalid one) is the terminal's job; this module only frames the question
//! and turns a refusal into [`ConlogError::Aborted`].

use conlog_core::{ConlogError, ConlogResult};
use crossterm::style::Stylize;

use crate::logger::Logger;
use crate::terminal::Terminal;

/// Question asked by [`Logger::require_agreement`] when none is given
pub const DEFAULT_AGREEMENT_QUESTION: &str = "Proceed [yes] or Abort [no]?";

const QUESTION_MARK: &str = "¿ ";

impl<T: Terminal> Logger<T>
{
    /// Ask a yes/no question, framed as `¿ question (yes/no) `.
    ///
    /// ## Errors
    ///
    /// Returns an error if input ends before an answer or the terminal cannot
    /// be written.
    pub fn ask_yes_no(&mut self, question: &str) -> ConlogResult<bool>
    {
        let prompt = self.yes_no_prompt(question);
        let answer = self.terminal.agree(&prompt)?;
        tracing::debug!(question, answer, "yes/no question answered");
        Ok(answer)
    }

    /// Ask a yes/no question and fail with [`ConlogError::Aborted`] on "no".
    ///
    /// `None` asks [`DEFAULT_AGREEMENT_QUESTION`].
    ///
    /// ```rust,no_run
    /// let mut log = conlog::logger();
    /// match log.require_agreement(None) {
    ///     Ok(()) => log.info("Proceeding")?,
    ///     Err(e) if e.is_aborted() => return Ok(()),
    ///     Err(e) => return Err(e),
    /// }
    /// # Ok::<(), conlog::ConlogError>(())
    /// ```
    ///
    /// ## Errors
    ///
    /// Returns [`ConlogError::Aborted`] if the user answers no.
    pub fn require_agreement(&mut self, question: Option<&str>) -> ConlogResult<()>
    {
        if self.ask_yes_no(question.unwrap_or(DEFAULT_AGREEMENT_QUESTION))? {
            Ok(())
        } else {
            tracing::debug!("agreement refused");
            Err(ConlogError::Aborted("Aborting!".to_string()))
        }
    }

    /// Make the user type `answer` (or `cancel`) to confirm.
    ///
    /// ## Errors
    ///
    /// Returns [`ConlogError::Aborted`] if the user cancels.
    pub fn confirm_with(&mut self, answer: &str) -> ConlogResult<()>
    {
        let result = self.terminal.confirm("Please confirm", answer);
        if let Err(ConlogError::Aborted(_)) = &result {
            tracing::debug!(expected = answer, "confirmation cancelled");
        }
        result
    }

    fn yes_no_prompt(&self, question: &str) -> String
    {
        if self.color_mode.use_color() {
            format!(
                "{}{question} ({}/{}) ",
                QUESTION_MARK.white().bold(),
                "yes".underlined(),
                "no".underlined()
            )
        } else {
            format!("{QUESTION_MARK}{question} (yes/no) ")
        }
    }
}
