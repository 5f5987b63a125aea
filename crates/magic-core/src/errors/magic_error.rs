//! The error taxonomy of the cookie binding.

use super::config_error::ConfigError;
use super::error_code::{self, MagicErrorCode};

/// Errors surfaced by [`Cookie`](crate::Cookie) operations.
///
/// Nothing is retried: native engine errors are not transient.
#[derive(Debug, thiserror::Error)]
pub enum MagicError {
    /// The engine could not be created (unsupported flag combination).
    /// No handle exists yet, so the message is fixed.
    #[error("{message}")]
    Construction { message: String },

    /// Operation attempted on a closed cookie.
    #[error("{operation}: cookie is closed")]
    InvalidHandle { operation: &'static str },

    /// An argument could not be marshaled into its C representation.
    #[error("{operation}: {reason}")]
    InvalidArgument {
        operation: &'static str,
        reason: String,
    },

    /// Library-level failure with a descriptive (or fixed) message.
    #[error("{message}")]
    Failure { message: String },

    /// OS-level failure reported through errno.
    #[error("{operation}: {source}")]
    SystemError {
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl MagicError {
    pub(crate) fn failure(operation: &str, detail: impl std::fmt::Display) -> Self {
        Self::Failure {
            message: format!("{operation}: {detail}"),
        }
    }

    /// The OS errno behind a `SystemError`, if any.
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            Self::SystemError { source, .. } => source.raw_os_error(),
            _ => None,
        }
    }

    pub fn is_invalid_handle(&self) -> bool {
        matches!(self, Self::InvalidHandle { .. })
    }
}

impl MagicErrorCode for MagicError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Construction { .. } => error_code::CONSTRUCTION,
            Self::InvalidHandle { .. } => error_code::INVALID_HANDLE,
            Self::InvalidArgument { .. } => error_code::INVALID_ARGUMENT,
            Self::Failure { .. } => error_code::FAILURE,
            Self::SystemError { .. } => error_code::SYSTEM_ERROR,
            Self::Config(e) => e.error_code(),
        }
    }
}

pub type MagicResult<T> = Result<T, MagicError>;
