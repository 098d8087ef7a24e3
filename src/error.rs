use std::path::PathBuf;

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

/// Error returned by coordinate-taking reads when the requested cell lies
/// outside the board. Coordinates are never silently clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("coordinate ({column}, {row}) out of range for {columns}x{rows} board")]
pub struct CoordinateError {
    pub column: usize,
    pub row: usize,
    pub columns: usize,
    pub rows: usize,
}
