//! Tests for yes/no questions and confirmations

mod common;

use std::io::Cursor;

use common::ScriptedTerminal;
use conlog::{ColorMode, ConlogError, Logger, StdTerminal, DEFAULT_AGREEMENT_QUESTION};

fn plain(terminal: ScriptedTerminal) -> Logger<ScriptedTerminal>
{
    Logger::new(terminal).with_color_mode(ColorMode::Never)
}

#[test]
fn test_ask_yes_no_frames_question()
{
    let mut log = plain(ScriptedTerminal::answering(&[true]));
    assert!(log.ask_yes_no("Delete branch?").unwrap());
    assert_eq!(log.terminal().questions, ["¿ Delete branch? (yes/no) "]);
}

#[test]
fn test_ask_yes_no_colored_keeps_text()
{
    let mut log = Logger::new(ScriptedTerminal::answering(&[false]));
    assert!(!log.ask_yes_no("Delete branch?").unwrap());
    let question = &log.terminal().questions[0];
    assert!(question.contains("Delete branch?"));
    assert!(question.contains("yes"));
    assert!(question.ends_with(") "));
}

#[test]
fn test_require_agreement_yes()
{
    let mut log = plain(ScriptedTerminal::answering(&[true]));
    log.require_agreement(None).unwrap();
    assert_eq!(log.terminal().questions, [format!("¿ {DEFAULT_AGREEMENT_QUESTION} (yes/no) ")]);
    assert!(log.terminal().said.is_empty());
}

#[test]
fn test_require_agreement_no_aborts()
{
    let mut log = plain(ScriptedTerminal::answering(&[false]));
    let err = log.require_agreement(Some("Push to production?")).unwrap_err();
    assert!(err.is_aborted());
    assert_eq!(err.to_string(), "Aborting!");
    assert_eq!(log.terminal().questions, ["¿ Push to production? (yes/no) "]);
}

#[test]
fn test_confirm_with()
{
    let mut log = plain(ScriptedTerminal::confirming(&[true, false]));
    log.confirm_with("PROD").unwrap();
    assert!(log.confirm_with("PROD").unwrap_err().is_aborted());
    assert_eq!(log.terminal().questions, ["Please confirm|PROD", "Please confirm|PROD"]);
}

#[test]
fn test_require_agreement_over_stdin()
{
    let input = Cursor::new(b"what\nno\n".to_vec());
    let mut log = Logger::new(StdTerminal::new(input, Vec::new())).with_color_mode(ColorMode::Never);
    let err = log.require_agreement(None).unwrap_err();
    assert!(err.is_aborted());

    let output = String::from_utf8(log.into_terminal().into_output()).unwrap();
    let prompt = format!("¿ {DEFAULT_AGREEMENT_QUESTION} (yes/no) ");
    assert_eq!(output, format!("{prompt}Please enter \"yes\" or \"no\".\n{prompt}"));
}

#[test]
fn test_confirm_with_over_stdin_input_closed()
{
    let input = Cursor::new(b"nope\n".to_vec());
    let mut log = Logger::new(StdTerminal::new(input, Vec::new()));
    assert!(matches!(log.confirm_with("YES"), Err(ConlogError::InputClosed)));
}
