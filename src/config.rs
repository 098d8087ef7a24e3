use std::path::Path;

use crate::error::ConfigError;

/// Game configuration: board dimensions, the line length required to win,
/// and how many players take turns. Immutable once a game starts; changing
/// any of these means constructing a fresh game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub columns: usize,
    pub connect_length: usize,
    pub player_count: u8,
}

impl Default for GameConfig {
    /// The classic game: 6 rows, 7 columns, 4 in a row, 2 players.
    fn default() -> Self {
        GameConfig {
            rows: 6,
            columns: 7,
            connect_length: 4,
            player_count: 2,
        }
    }
}

impl GameConfig {
    /// Build and validate a configuration in one step.
    pub fn new(
        rows: usize,
        columns: usize,
        connect_length: usize,
        player_count: u8,
    ) -> Result<Self, ConfigError> {
        let config = GameConfig {
            rows,
            columns,
            connect_length,
            player_count,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    ///
    /// A winning line can run along either axis, so the connect length only
    /// has to fit the larger dimension.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::Validation("rows must be >= 1".into()));
        }
        if self.columns == 0 {
            return Err(ConfigError::Validation("columns must be >= 1".into()));
        }
        if self.connect_length < 2 {
            return Err(ConfigError::Validation(
                "connect_length must be >= 2".into(),
            ));
        }
        if self.connect_length > self.rows.max(self.columns) {
            return Err(ConfigError::Validation(
                "connect_length must be <= max(rows, columns)".into(),
            ));
        }
        if self.player_count < 2 {
            return Err(ConfigError::Validation("player_count must be >= 2".into()));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&GameConfig::default()).expect("default config serializes")
    }
}
