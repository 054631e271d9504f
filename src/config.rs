//! Settings loaded from a TOML file and the environment.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_core::GridSize;
use tracing::{debug, info, instrument};

/// Environment variable overriding the configured grid size.
pub const GRID_SIZE_ENV: &str = "TICTACTOE_GRID_SIZE";

/// User-configurable settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Grid size for new games.
    grid_size: GridSize,

    /// Log filter used when `RUST_LOG` is unset.
    log_filter: String,

    /// File the terminal UI writes logs to.
    log_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_size: GridSize::default(),
            log_filter: "info".to_string(),
            log_file: PathBuf::from("tictactoe_grid.log"),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    ///
    /// A missing file yields the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let settings = Self::from_toml(&content)?;
        info!(grid_size = %settings.grid_size, "Config loaded successfully");
        Ok(settings)
    }

    /// Parses settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Applies an override from [`GRID_SIZE_ENV`] if it is set.
    pub fn with_env(self) -> Result<Self, ConfigError> {
        self.with_env_lookup(|key| std::env::var(key).ok())
    }

    /// Applies environment overrides read through `lookup`.
    #[instrument(skip(self, lookup))]
    pub fn with_env_lookup(
        self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        match lookup(GRID_SIZE_ENV) {
            Some(value) => self.with_grid_size_str(&value),
            None => Ok(self),
        }
    }

    /// Overrides the grid size from a string such as `"4"` or `"4x4"`.
    #[instrument(skip(self))]
    pub fn with_grid_size_str(self, value: &str) -> Result<Self, ConfigError> {
        let grid_size = value
            .parse::<GridSize>()
            .map_err(|e| ConfigError::new(format!("Invalid grid size {:?}: {}", value, e.kind())))?;
        debug!(%grid_size, "Grid size overridden");
        Ok(self.with_grid_size(grid_size))
    }

    /// Overrides the grid size.
    pub fn with_grid_size(mut self, grid_size: GridSize) -> Self {
        self.grid_size = grid_size;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_empty_toml() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.grid_size(), &GridSize::Three);
        assert_eq!(settings.log_filter(), "info");
    }

    #[test]
    fn test_partial_toml() {
        let settings = Settings::from_toml("grid_size = 5\n").unwrap();
        assert_eq!(settings.grid_size(), &GridSize::Five);
        assert_eq!(settings.log_file(), &PathBuf::from("tictactoe_grid.log"));
    }

    #[test]
    fn test_rejects_unsupported_size() {
        let err = Settings::from_toml("grid_size = 7\n").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_grid_size_override() {
        let settings = Settings::default().with_grid_size_str("4x4").unwrap();
        assert_eq!(settings.grid_size(), &GridSize::Four);
        assert!(Settings::default().with_grid_size_str("9").is_err());
    }

    #[test]
    fn test_env_override_wins_over_file() {
        let settings = Settings::from_toml("grid_size = 3\nlog_filter = \"warn\"\n")
            .unwrap()
            .with_env_lookup(|key| (key == GRID_SIZE_ENV).then(|| "5".to_string()))
            .unwrap();
        assert_eq!(settings.grid_size(), &GridSize::Five);
        assert_eq!(settings.log_filter(), "warn");
    }

    #[test]
    fn test_env_unset_keeps_file_value() {
        let settings = Settings::from_toml("grid_size = 4\n")
            .unwrap()
            .with_env_lookup(|_| None)
            .unwrap();
        assert_eq!(settings.grid_size(), &GridSize::Four);
    }

    #[test]
    fn test_invalid_env_value_is_config_error() {
        for value in ["7", "4x9", "big"] {
            let err = Settings::default()
                .with_env_lookup(|_| Some(value.to_string()))
                .unwrap_err();
            assert!(err.message.starts_with("Invalid grid size"), "{}", err);
        }
    }
}
