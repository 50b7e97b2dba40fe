//! Logging configuration tests

use rolewire_infrastructure::logging::parse_log_level;
use tracing::Level;

#[test]
fn known_levels_parse() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);
}

#[test]
fn parsing_is_case_insensitive() {
    assert_eq!(parse_log_level("INFO").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("Debug").unwrap(), Level::DEBUG);
}

#[test]
fn unknown_level_is_a_configuration_error() {
    let error = parse_log_level("loud").unwrap_err();
    assert!(error.to_string().contains("Invalid log level"));
}
