//! Tests for loading settings from disk.

use std::io::Write;
use tictactoe_core::GridSize;
use tictactoe_grid::Settings;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::from_file(dir.path().join("absent.toml")).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "grid_size = 4").unwrap();
    writeln!(file, "log_filter = \"debug\"").unwrap();
    writeln!(file, "log_file = \"game.log\"").unwrap();

    let settings = Settings::from_file(file.path()).unwrap();
    assert_eq!(settings.grid_size(), &GridSize::Four);
    assert_eq!(settings.log_filter(), "debug");
    assert_eq!(settings.log_file().to_str(), Some("game.log"));
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "grid_size = [").unwrap();

    let err = Settings::from_file(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("Config error: Failed to parse config"));
}

#[test]
fn test_unknown_size_in_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "grid_size = 2").unwrap();
    assert!(Settings::from_file(file.path()).is_err());
}
