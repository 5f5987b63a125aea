//! Stable string codes attached to every error, so hosts can branch on
//! the kind of failure without parsing messages.

pub const CONSTRUCTION: &str = "MAGIC_CONSTRUCTION";
pub const INVALID_HANDLE: &str = "MAGIC_INVALID_HANDLE";
pub const INVALID_ARGUMENT: &str = "MAGIC_INVALID_ARGUMENT";
pub const FAILURE: &str = "MAGIC_FAILURE";
pub const SYSTEM_ERROR: &str = "MAGIC_SYSTEM_ERROR";
pub const CONFIG_ERROR: &str = "MAGIC_CONFIG_ERROR";
pub const CONFIG_PARSE_ERROR: &str = "MAGIC_CONFIG_PARSE_ERROR";
pub const IO_ERROR: &str = "MAGIC_IO_ERROR";

/// Implemented by every error enum in the workspace.
pub trait MagicErrorCode {
    fn error_code(&self) -> &'static str;
}
