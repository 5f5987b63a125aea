//! Error types for the cookie binding.

pub mod config_error;
pub mod error_code;
pub mod magic_error;
pub mod translate;

pub use config_error::ConfigError;
pub use error_code::MagicErrorCode;
pub use magic_error::{MagicError, MagicResult};
pub use translate::translate_native_error;
