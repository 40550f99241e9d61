//! Tests for log level functionality.

use logex::Level;

#[test]
fn level_ordering() {
    assert!(Level::Trace < Level::Debug);
    assert!(Level::Debug < Level::Info);
    assert!(Level::Info < Level::Warning);
    assert!(Level::Warning < Level::Assert);
    assert!(Level::Assert < Level::Error);
}

#[test]
fn level_display() {
    assert_eq!(Level::Info.to_string(), "info");
    assert_eq!(Level::Warning.to_string(), "warning");
    assert_eq!(Level::Assert.to_string(), "assert");
}

#[test]
fn level_labels_for_saved_logs() {
    assert_eq!(Level::Info.label(), "Log");
    assert_eq!(Level::Warning.label(), "Warning");
    assert_eq!(Level::Assert.label(), "Assert");
    assert_eq!(Level::Error.label(), "Error");
}

#[test]
fn level_from_str() {
    assert_eq!("trace".parse::<Level>().unwrap(), Level::Trace);
    assert_eq!("LOG".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("warn".parse::<Level>().unwrap(), Level::Warning);
    assert_eq!("Assertion".parse::<Level>().unwrap(), Level::Assert);
    assert_eq!("err".parse::<Level>().unwrap(), Level::Error);
}

#[test]
fn level_from_str_invalid() {
    assert!("invalid".parse::<Level>().is_err());
}

#[test]
fn level_default() {
    assert_eq!(Level::default(), Level::Info);
}

#[test]
fn level_all_is_sorted() {
    let all = Level::all();
    assert!(all.windows(2).all(|w| w[0] < w[1]));
}
