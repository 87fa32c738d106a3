use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BadgeError {
    #[error("input file not found: {}", .path.display())]
    MissingInput { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid badge config: {}", .0.join("; "))]
    InvalidConfig(Vec<String>),

    #[error("badge not found: {0}")]
    BadgeNotFound(String),

    #[error("invalid badge name '{0}': must be lowercase alphanumeric with hyphens")]
    InvalidBadgeName(String),

    #[error("invalid date format '{0}'")]
    InvalidDateFormat(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, BadgeError>;
