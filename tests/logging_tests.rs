#![cfg(feature = "std")]

use log::LevelFilter;
use seabattle::level_from;

#[test]
fn test_level_from_defaults_to_info() {
    assert_eq!(level_from(None), LevelFilter::Info);
    assert_eq!(level_from(Some("")), LevelFilter::Info);
    assert_eq!(level_from(Some("chatty")), LevelFilter::Info);
}

#[test]
fn test_level_from_parses_names() {
    assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
    assert_eq!(level_from(Some("TRACE")), LevelFilter::Trace);
    assert_eq!(level_from(Some("off")), LevelFilter::Off);
    assert_eq!(level_from(Some("warn")), LevelFilter::Warn);
}
