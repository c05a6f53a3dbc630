//! # Client Configuration
//!
//! Wire constants and the user-facing configuration for talking to the game
//! server.

use crate::{ConsiditionError, ConsiditionResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Base path of the game API.
pub const DEFAULT_BASE_PATH: &str = "https://game.considition.com/api/game";

/// Map played when none is chosen.
pub const DEFAULT_MAP_NAME: &str = "training1";

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Environment variable consulted for the API key.
pub const API_KEY_ENV: &str = "CONSIDITION_API_KEY";

/// Configuration for a client session.
///
/// Every field has a default, so a config file only needs the values it
/// wants to change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the game API
    pub base_path: String,
    /// API key sent as `x-api-key`
    pub api_key: String,
    /// Map to create new games on
    pub map_name: String,
    /// Game to act on; `None` lets the server pick
    pub game_id: Option<String>,
}

impl ClientConfig {
    /// Creates a configuration with the given API key and default everything else.
    ///
    /// # Examples
    ///
    /// ```
    /// use considition::ClientConfig;
    ///
    /// let config = ClientConfig::new("secret");
    /// assert_eq!(config.map_name, "training1");
    /// assert!(config.game_id.is_none());
    /// ```
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Reads a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> ConsiditionResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Takes the API key from `CONSIDITION_API_KEY` when it is set.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                self.api_key = key;
            }
        }
        self
    }

    /// Checks that the configuration can be used to reach the server.
    pub fn validate(&self) -> ConsiditionResult<()> {
        if self.api_key.trim().is_empty() {
            return Err(ConsiditionError::Config(format!(
                "no API key configured (use --api-key or {})",
                API_KEY_ENV
            )));
        }
        if self.base_path.trim().is_empty() {
            return Err(ConsiditionError::Config("base path is empty".to_string()));
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
            api_key: String::new(),
            map_name: DEFAULT_MAP_NAME.to_string(),
            game_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_path, DEFAULT_BASE_PATH);
        assert_eq!(config.map_name, DEFAULT_MAP_NAME);
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn test_validate_requires_api_key() {
        assert!(matches!(
            ClientConfig::default().validate(),
            Err(ConsiditionError::Config(_))
        ));
        assert!(ClientConfig::new("key").validate().is_ok());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"apiKey": "ignored", "api_key": "abc", "map_name": "Kiruna"}}"#).unwrap();

        let config = ClientConfig::load(file.path()).unwrap();
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.map_name, "Kiruna");
        assert_eq!(config.base_path, DEFAULT_BASE_PATH);
    }

    #[test]
    fn test_load_missing_file() {
        let result = ClientConfig::load("/definitely/not/here.json");
        assert!(matches!(result, Err(ConsiditionError::Io(_))));
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            ClientConfig::load(file.path()),
            Err(ConsiditionError::Decode(_))
        ));
    }
}
