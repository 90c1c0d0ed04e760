//! Tests for message formatting against the style table

use chrono::{DateTime, TimeZone, Utc};
use conlog_core::prelude::*;

fn at_ten() -> DateTime<Utc>
{
    Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()
}

fn style(name: &str) -> StyleDescriptor
{
    StyleRef::from(name).resolve().unwrap()
}

#[test]
fn test_no_newline_gives_one_line()
{
    for name in StyleTable::global().names() {
        let text = format_message_at("just one line", &style(name), at_ten());
        assert_eq!(text.matches('\n').count(), 1, "style {name}");
        assert!(text.ends_with('\n'));
    }
}

#[test]
fn test_continuation_lines_are_blank_padded()
{
    let message = "first\nsecond\nthird\nfourth";
    let warning = style("warning").without_color();
    let text = format_message_at(message, &warning, at_ten());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);

    let width = "10:00:00 UTC".len() + 1 + "WARN: ".len();
    for (line, body) in lines.iter().zip(["first", "second", "third", "fourth"]).skip(1) {
        assert_eq!(&line[..width], " ".repeat(width));
        assert_eq!(&line[width..], body);
    }
}

#[test]
fn test_warning_example()
{
    let warning = style("warning");
    let text = format_message_at("line1\nline2", &warning, at_ten());

    let expected = format!(
        "10:00:00 UTC {}{}\n{} {}{}\n",
        colorize("WARN: ", Some(Color::Yellow)),
        colorize("line1", Some(Color::Yellow)),
        " ".repeat(12),
        colorize(&" ".repeat(6), Some(Color::Yellow)),
        colorize("line2", Some(Color::Yellow)),
    );
    assert_eq!(text, expected);
}

#[test]
fn test_warning_example_plain()
{
    let warning = style("warning").without_color();
    let text = format_message_at("line1\nline2", &warning, at_ten());
    assert_eq!(text, format!("10:00:00 UTC WARN: line1\n{}line2\n", " ".repeat(19)));
}

#[test]
fn test_info_has_no_color_codes()
{
    let text = format_message_at("x", &style("info"), at_ten());
    assert_eq!(text, "10:00:00 UTC INFO: x\n");
    assert!(!text.contains('\u{1b}'));
}

#[test]
fn test_header_without_space_is_normalized()
{
    let custom = StyleRef::from(StyleOverride::new().header("ERR:")).resolve().unwrap();
    assert_eq!(format_message_at("boom", &custom, at_ten()), "10:00:00 UTC ERR: boom\n");
}

#[test]
fn test_error_header_alignment_is_kept()
{
    let error = style("error").without_color();
    let text = format_message_at("a\nb", &error, at_ten());
    assert_eq!(text, format!("10:00:00 UTC ERR:  a\n{}b\n", " ".repeat(19)));
}

#[test]
fn test_trailing_newline_is_dropped()
{
    let text = format_message_at("done\n", &style("default"), at_ten());
    assert_eq!(text, "10:00:00 UTC done\n");
}

#[test]
fn test_unknown_style_name()
{
    let err = StyleRef::from("bogus").resolve().unwrap_err();
    assert!(matches!(err, ConlogError::UnknownStyle(_)));
    assert_eq!(err.to_string(), "Unknown style: bogus");
}

#[test]
fn test_invalid_style_argument()
{
    let err = "two words".parse::<StyleRef>().unwrap_err();
    assert!(matches!(err, ConlogError::InvalidStyleArgument(_)));
}

#[test]
fn test_aborted_is_distinguishable()
{
    let err = ConlogError::Aborted("Aborting!".to_string());
    assert!(err.is_aborted());
    assert_eq!(err.to_string(), "Aborting!");
    assert!(!ConlogError::InputClosed.is_aborted());
}
