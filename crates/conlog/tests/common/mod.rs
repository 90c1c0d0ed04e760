//! Shared helpers for conlog integration tests

#![allow(dead_code)]

use std::collections::VecDeque;

use chrono::{DateTime, TimeZone, Utc};
use conlog::{ConlogError, ConlogResult, Terminal};

/// Fixed clock: 10:00:00 UTC
pub fn ten_oclock() -> DateTime<Utc>
{
    Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap()
}

/// Terminal that records output and replays canned answers
#[derive(Debug, Default)]
pub struct ScriptedTerminal
{
    pub said: Vec<String>,
    pub questions: Vec<String>,
    pub yes_no: VecDeque<bool>,
    pub confirmations: VecDeque<bool>,
}

impl ScriptedTerminal
{
    pub fn new() -> Self
    {
        Self::default()
    }

    pub fn answering(answers: &[bool]) -> Self
    {
        Self { yes_no: answers.iter().copied().collect(), ..Self::default() }
    }

    pub fn confirming(answers: &[bool]) -> Self
    {
        Self { confirmations: answers.iter().copied().collect(), ..Self::default() }
    }

    pub fn output(&self) -> String
    {
        self.said.concat()
    }
}

impl Terminal for ScriptedTerminal
{
    fn say(&mut self, text: &str) -> ConlogResult<()>
    {
        self.said.push(text.to_string());
        Ok(())
    }

    fn agree(&mut self, question: &str) -> ConlogResult<bool>
    {
        self.questions.push(question.to_string());
        self.yes_no.pop_front().ok_or(ConlogError::InputClosed)
    }

    fn confirm(&mut self, question: &str, expected: &str) -> ConlogResult<()>
    {
        self.questions.push(format!("{question}|{expected}"));
        match self.confirmations.pop_front() {
            Some(true) => Ok(()),
            Some(false) => Err(ConlogError::Aborted("Cancelled!".to_string())),
            None => Err(ConlogError::InputClosed),
        }
    }
}
