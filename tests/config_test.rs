//! Tests for loading configuration from disk.

use noughts::{Config, GameMode};
use noughts_core::Player;
use std::io::Write;
use std::time::Duration;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
mode = "pvp"
computer = "X"
computer_delay_ms = 0
auto_reset_delay_ms = 250
log_filter = "noughts=debug"
"#
    )
    .unwrap();

    let config = Config::load(Some(file.path())).unwrap();
    assert_eq!(*config.mode(), GameMode::Pvp);
    assert_eq!(*config.computer(), Player::X);
    assert_eq!(config.computer_delay(), Duration::ZERO);
    assert_eq!(config.auto_reset_delay(), Duration::from_millis(250));
    assert_eq!(config.log_filter(), "noughts=debug");
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_cli_overrides_file() {
    let config = Config::from_toml("mode = \"pvp\"")
        .unwrap()
        .with_overrides(Some(GameMode::Computer), Some(Player::X))
        .with_delays(10, 20);
    assert_eq!(*config.mode(), GameMode::Computer);
    assert_eq!(*config.computer(), Player::X);
    assert_eq!(config.computer_delay(), Duration::from_millis(10));
    assert_eq!(config.auto_reset_delay(), Duration::from_millis(20));
}
