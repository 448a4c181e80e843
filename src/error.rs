use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DockError {
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write config {path}: {source}")]
    ConfigWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to render glyph {name}: {reason}")]
    Glyph { name: String, reason: String },

    #[error("failed to open {target}: {source}")]
    Launch {
        target: String,
        source: std::io::Error,
    },
}
