//! Session configuration loaded from TOML.

use crate::error::ConfigError;
use crate::games::tictactoe::Mark;
use crate::opponent::Difficulty;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for a game session.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Pause before a decided board is cleared automatically.
    #[serde(default = "default_auto_reset_delay_ms")]
    auto_reset_delay_ms: u64,

    /// Pause before the computer plays its move.
    #[serde(default = "default_computer_move_delay_ms")]
    computer_move_delay_ms: u64,

    /// Whether the computer opponent starts enabled.
    #[serde(default)]
    opponent_enabled: bool,

    /// Starting difficulty tier.
    #[serde(default)]
    difficulty: Difficulty,

    /// Mark played by the computer.
    #[serde(default = "default_computer_mark")]
    computer_mark: Mark,

    /// Seed for the random strategy; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_auto_reset_delay_ms() -> u64 {
    1000
}

fn default_computer_move_delay_ms() -> u64 {
    500
}

fn default_computer_mark() -> Mark {
    Mark::O
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            auto_reset_delay_ms: default_auto_reset_delay_ms(),
            computer_move_delay_ms: default_computer_move_delay_ms(),
            opponent_enabled: false,
            difficulty: Difficulty::default(),
            computer_mark: default_computer_mark(),
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` when it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Auto-reset delay as a [`Duration`].
    pub fn auto_reset_delay(&self) -> Duration {
        Duration::from_millis(self.auto_reset_delay_ms)
    }

    /// Computer move delay as a [`Duration`].
    pub fn computer_move_delay(&self) -> Duration {
        Duration::from_millis(self.computer_move_delay_ms)
    }

    /// Overrides whether the opponent starts enabled.
    pub fn with_opponent_enabled(mut self, enabled: bool) -> Self {
        self.opponent_enabled = enabled;
        self
    }

    /// Overrides the starting difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Overrides the computer's mark.
    pub fn with_computer_mark(mut self, mark: Mark) -> Self {
        self.computer_mark = mark;
        self
    }

    /// Overrides the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides both timer delays.
    pub fn with_delays(mut self, auto_reset: Duration, computer_move: Duration) -> Self {
        self.auto_reset_delay_ms = auto_reset.as_millis() as u64;
        self.computer_move_delay_ms = computer_move.as_millis() as u64;
        self
    }
}
