//! Configuration errors.

use super::error_code::{self, MagicErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown flag name: {0}")]
    UnknownFlag(String),

    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl MagicErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownFlag(_) => error_code::CONFIG_ERROR,
            Self::Io { .. } => error_code::IO_ERROR,
            Self::TomlParse(_) => error_code::CONFIG_PARSE_ERROR,
        }
    }
}
