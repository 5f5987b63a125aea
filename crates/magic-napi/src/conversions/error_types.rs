//! MagicError → napi::Error conversion with structured error info.
//!
//! Reasons are formatted `"[<CODE>] <message>"` so JS callers can branch on
//! the code without parsing the message.

use std::sync::OnceLock;

use magic_core::{MagicError, MagicErrorCode};
use napi::Status;

/// Error code strings for structured JS error handling.
pub mod codes {
    pub use magic_core::errors::error_code::{
        CONFIG_ERROR, CONFIG_PARSE_ERROR, CONSTRUCTION, FAILURE, INVALID_ARGUMENT,
        INVALID_HANDLE, IO_ERROR, SYSTEM_ERROR,
    };
}

static ERROR_IDENTITY: OnceLock<String> = OnceLock::new();

/// Versioned identity of this binding build, computed once per process.
/// Introspection only: it is exposed through `magicErrorIdentity` and the
/// `raising to JS` log event, never inside the thrown error. JS callers
/// branch on the `[CODE]` reason prefix instead.
pub fn error_identity() -> &'static str {
    ERROR_IDENTITY.get_or_init(|| format!("magic.cookie.{}", env!("CARGO_PKG_VERSION")))
}

fn status_for(err: &MagicError) -> Status {
    match err {
        MagicError::InvalidHandle { .. } | MagicError::InvalidArgument { .. } => {
            Status::InvalidArg
        }
        _ => Status::GenericFailure,
    }
}

/// Format the reason string carried by the JS error.
pub fn error_reason(err: &MagicError) -> String {
    format!("[{}] {err}", err.error_code())
}

/// Map a MagicError to a structured napi::Error with an error code.
pub fn to_napi_error(err: MagicError) -> napi::Error {
    tracing::debug!(identity = error_identity(), code = err.error_code(), error = %err, "raising to JS");
    napi::Error::new(status_for(&err), error_reason(&err))
}
