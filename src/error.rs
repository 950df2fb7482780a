use std::path::PathBuf;

use crate::game::COLS;

/// Errors surfaced by the game engine.
///
/// Rejected moves that are part of normal play (full column, finished game)
/// are not errors; they are [`crate::game::MoveOutcome`] variants. An error
/// here means the caller passed input the board cannot map to a cell.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("column {column} is out of bounds (board has {} columns)", COLS)]
    InvalidColumn { column: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_error_display() {
        let err = GameError::InvalidColumn { column: 7 };
        assert_eq!(
            err.to_string(),
            "column 7 is out of bounds (board has 7 columns)"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("players.one must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: players.one must not be empty"
        );
    }
}
