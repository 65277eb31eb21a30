use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or saving the editor configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// A placement or alignment name that is not recognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown placement '{0}' (expected left, right, top, bottom, auto or prefer-<side>)")]
    Placement(String),

    #[error("unknown alignment '{0}' (expected start, center, end, screen, auto or prefer-center)")]
    Alignment(String),
}
