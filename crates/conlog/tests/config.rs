//! Tests for color configuration read from the environment

use std::env;

use conlog::ColorMode;
use conlog_utils::config::COLOR_ENV;

// One test function: the cases share a process-wide variable.
#[test]
fn test_color_mode_follows_environment()
{
    env::set_var(COLOR_ENV, "never");
    assert_eq!(ColorMode::from_env(), ColorMode::Never);
    assert_eq!(conlog::logger().color_mode(), ColorMode::Never);

    env::set_var(COLOR_ENV, "always");
    assert_eq!(ColorMode::from_env(), ColorMode::Always);
    assert_eq!(conlog::logger().color_mode(), ColorMode::Always);

    env::set_var(COLOR_ENV, "sometimes");
    assert_eq!(ColorMode::from_env(), ColorMode::Always);
    assert_eq!(conlog::logger().color_mode(), ColorMode::Always);

    env::remove_var(COLOR_ENV);
    assert_eq!(ColorMode::from_env(), ColorMode::Always);
}
