use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Plugin not found: {id}")]
    PluginNotFound { id: String },

    #[error("Duplicate plugin id: {id}")]
    DuplicatePlugin { id: String },

    #[error("Terms section not found: {key}")]
    SectionNotFound { key: String },

    #[error("Invalid category: '{value}' - expected active or archived")]
    InvalidCategory { value: String },

    #[error("Invalid filter: '{value}' - expected all, active or archived")]
    InvalidFilter { value: String },

    #[error("Invalid sort key: '{value}' - expected downloads or name")]
    InvalidSortKey { value: String },

    #[error("Invalid date: '{value}' - expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("Unsupported file format: {path}")]
    UnsupportedFormat { path: PathBuf },

    #[error("Failed to parse {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Unknown config key: {key}")]
    ConfigKeyNotFound { key: String },

    #[error("Invalid value for {key}: {value}")]
    InvalidConfigValue { key: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, SiteError>;

impl SiteError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::PluginNotFound { .. } | Self::SectionNotFound { .. } => 2,
            Self::DuplicatePlugin { .. }
            | Self::InvalidCategory { .. }
            | Self::InvalidFilter { .. }
            | Self::InvalidSortKey { .. }
            | Self::InvalidDate { .. }
            | Self::UnsupportedFormat { .. }
            | Self::ConfigParse { .. }
            | Self::ConfigKeyNotFound { .. }
            | Self::InvalidConfigValue { .. } => 3,
            _ => 1,
        }
    }
}
