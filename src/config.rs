//! Game configuration.
//!
//! Attempts per question and sequence length are fixed by the game rules
//! (see [`MAX_ATTEMPTS`](crate::core::MAX_ATTEMPTS) and
//! [`SEQUENCE_LENGTH`](crate::core::SEQUENCE_LENGTH)); only the values below
//! are tunable.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Public question bank read at startup.
pub const DEFAULT_POOL_URL: &str =
    "https://raw.githubusercontent.com/isaiahasanchez/trizzle-db/main/db.json";

/// Delay between running out of attempts and revealing the answer.
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 3_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Runtime settings for a [`Session`](crate::session::Session).
///
/// # Example
///
/// ```rust
/// use trizzle::config::GameConfig;
///
/// let config = GameConfig::from_toml_str("reveal_delay_ms = 500\nshuffle_seed = 7").unwrap();
/// assert_eq!(config.reveal_delay().as_millis(), 500);
/// assert_eq!(config.shuffle_seed, Some(7));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub reveal_delay_ms: u64,
    pub pool_url: String,
    /// Fixed seed for option shuffles; entropy when `None`.
    pub shuffle_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
            pool_url: DEFAULT_POOL_URL.to_string(),
            shuffle_seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_game_rules() {
        let config = GameConfig::default();
        assert_eq!(config.reveal_delay(), Duration::from_secs(3));
        assert_eq!(config.pool_url, DEFAULT_POOL_URL);
        assert!(config.shuffle_seed.is_none());
    }

    #[test]
    fn empty_toml_yields_defaults() {
        assert_eq!(GameConfig::from_toml_str("").unwrap(), GameConfig::default());
    }

    #[test]
    fn toml_overrides_fields() {
        let config = GameConfig::from_toml_str(
            r#"
            reveal_delay_ms = 1000
            pool_url = "http://localhost:8080/db.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.reveal_delay(), Duration::from_secs(1));
        assert_eq!(config.pool_url, "http://localhost:8080/db.json");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = GameConfig::from_toml_str("max_attempts = 9").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
