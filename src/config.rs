use std::path::Path;

use crate::error::ConfigError;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub players: PlayersConfig,
    pub ui: UiConfig,
}

/// Default player names, pre-filled into the name entry form. A name that
/// parses as a terminal color (e.g. "red", "#2e86de") also colors that
/// player's pieces.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub one: String,
    pub two: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Event poll interval in milliseconds.
    pub tick_rate_ms: u64,
    /// Capture mouse clicks for dropping pieces.
    pub mouse: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            players: PlayersConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            one: "Red".to_string(),
            two: "Yellow".to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            tick_rate_ms: 100,
            mouse: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players.one.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.one must not be empty".into(),
            ));
        }
        if self.players.two.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.two must not be empty".into(),
            ));
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::Validation("ui.tick_rate_ms must be > 0".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.players.one, "Red");
        assert_eq!(config.players.two, "Yellow");
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert!(config.ui.mouse);
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [players]
            one = "Alice"

            [ui]
            mouse = false
            "#,
        )
        .unwrap();

        assert_eq!(config.players.one, "Alice");
        assert_eq!(config.players.two, "Yellow"); // default fills the gap
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert!(!config.ui.mouse);
    }

    #[test]
    fn test_empty_player_name_rejected() {
        let mut config = AppConfig::default();
        config.players.two = "   ".to_string();
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: players.two must not be empty"
        );
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let mut config = AppConfig::default();
        config.ui.tick_rate_ms = 0;
        assert!(config.validate().is_err());
    }
}
