//! Tests for session configuration loading.

use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;
use tic_tac_toe::{Difficulty, Mark, SessionConfig};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults() {
    let config = SessionConfig::default();
    assert_eq!(config.auto_reset_delay(), Duration::from_secs(1));
    assert_eq!(config.computer_move_delay(), Duration::from_millis(500));
    assert!(!*config.opponent_enabled());
    assert_eq!(*config.difficulty(), Difficulty::Easy);
    assert_eq!(*config.computer_mark(), Mark::O);
    assert_eq!(*config.seed(), None);
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = write_config("");
    let config = SessionConfig::from_file(file.path()).unwrap();
    assert_eq!(config, SessionConfig::default());
}

#[test]
fn test_full_file() {
    let file = write_config(
        r#"
auto_reset_delay_ms = 2000
computer_move_delay_ms = 250
opponent_enabled = true
difficulty = "hard"
computer_mark = "X"
seed = 42
"#,
    );
    let config = SessionConfig::from_file(file.path()).unwrap();
    assert_eq!(config.auto_reset_delay(), Duration::from_secs(2));
    assert_eq!(config.computer_move_delay(), Duration::from_millis(250));
    assert!(*config.opponent_enabled());
    assert_eq!(*config.difficulty(), Difficulty::Hard);
    assert_eq!(*config.computer_mark(), Mark::X);
    assert_eq!(*config.seed(), Some(42));
}

#[test]
fn test_unknown_field_rejected() {
    let file = write_config("difficulty = \"medium\"\nspeed = 3\n");
    let err = SessionConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_unknown_difficulty_rejected() {
    let file = write_config("difficulty = \"impossible\"\n");
    assert!(SessionConfig::from_file(file.path()).is_err());
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SessionConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_load_or_default_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let config = SessionConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, SessionConfig::default());
}

#[test]
fn test_builders_override() {
    let config = SessionConfig::default()
        .with_opponent_enabled(true)
        .with_difficulty(Difficulty::Medium)
        .with_computer_mark(Mark::X)
        .with_seed(1)
        .with_delays(Duration::from_millis(10), Duration::from_millis(20));

    assert!(*config.opponent_enabled());
    assert_eq!(*config.difficulty(), Difficulty::Medium);
    assert_eq!(*config.computer_mark(), Mark::X);
    assert_eq!(*config.seed(), Some(1));
    assert_eq!(*config.auto_reset_delay_ms(), 10);
    assert_eq!(*config.computer_move_delay_ms(), 20);
}
