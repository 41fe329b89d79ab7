//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_core::Player;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Who controls the second side.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Two humans share the keyboard.
    #[default]
    Pvp,
    /// One side is played by the minimax opponent.
    Computer,
}

impl GameMode {
    /// Returns the display label for this mode.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pvp => "vs Player",
            Self::Computer => "vs Computer",
        }
    }

    /// Switches between the two modes.
    pub fn toggle(self) -> Self {
        match self {
            Self::Pvp => Self::Computer,
            Self::Computer => Self::Pvp,
        }
    }
}

/// Settings for a game session and its front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Config {
    /// Player vs player or player vs computer.
    #[serde(default)]
    mode: GameMode,

    /// Side played by the computer in [`GameMode::Computer`].
    #[serde(default = "default_computer")]
    computer: Player,

    /// Pause before the computer answers, in milliseconds.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,

    /// Pause before a finished game restarts, in milliseconds.
    #[serde(default = "default_auto_reset_delay_ms")]
    auto_reset_delay_ms: u64,

    /// Log file used while the terminal UI owns the screen.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_computer() -> Player {
    Player::O
}

fn default_computer_delay_ms() -> u64 {
    500
}

fn default_auto_reset_delay_ms() -> u64 {
    1500
}

fn default_log_file() -> PathBuf {
    PathBuf::from("noughts.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            computer: default_computer(),
            computer_delay_ms: default_computer_delay_ms(),
            auto_reset_delay_ms: default_auto_reset_delay_ms(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Default config file looked up in the working directory.
    pub const DEFAULT_PATH: &'static str = "noughts.toml";

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(mode = ?config.mode, computer = %config.computer, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` when given, else [`Config::DEFAULT_PATH`] if it exists,
    /// else the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(Self::DEFAULT_PATH).exists() => Self::from_file(Self::DEFAULT_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, mode: Option<GameMode>, computer: Option<Player>) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(computer) = computer {
            self.computer = computer;
        }
        self
    }

    /// Sets both delays; mostly useful for tests and demos.
    pub fn with_delays(mut self, computer_delay_ms: u64, auto_reset_delay_ms: u64) -> Self {
        self.computer_delay_ms = computer_delay_ms;
        self.auto_reset_delay_ms = auto_reset_delay_ms;
        self
    }

    /// Pause before the computer answers.
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }

    /// Pause before a finished game restarts.
    pub fn auto_reset_delay(&self) -> Duration {
        Duration::from_millis(self.auto_reset_delay_ms)
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
    fn test_default_timings() {
        let config = Config::default();
        assert_eq!(*config.mode(), GameMode::Pvp);
        assert_eq!(*config.computer(), Player::O);
        assert_eq!(config.computer_delay(), Duration::from_millis(500));
        assert_eq!(config.auto_reset_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = Config::from_toml("mode = \"pvp\"\ncomputer = \"X\"\n").unwrap();
        assert_eq!(*config.mode(), GameMode::Pvp);
        assert_eq!(*config.computer(), Player::X);
        assert_eq!(*config.auto_reset_delay_ms(), 1500);
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_empty_toml_starts_in_pvp() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(*config.mode(), GameMode::Pvp);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let err = Config::from_toml("mode = \"solo\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::default().with_overrides(Some(GameMode::Computer), None);
        assert_eq!(*config.mode(), GameMode::Computer);
        assert_eq!(*config.computer(), Player::O);
        assert_eq!(GameMode::Pvp.toggle(), GameMode::Computer);
    }
}
