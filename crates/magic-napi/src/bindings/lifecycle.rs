//! Process-level bindings: logging setup and library introspection.

use napi_derive::napi;

use crate::conversions::error_types;

/// Install the stderr tracing subscriber (filter from `MAGIC_LOG`).
/// Returns false if a subscriber was already installed.
#[napi(js_name = "magicInitLogging")]
pub fn magic_init_logging() -> bool {
    magic_core::tracing::init_tracing()
}

/// Version number of the loaded libmagic (e.g. 545 for 5.45).
#[napi(js_name = "magicVersion")]
pub fn magic_version() -> i32 {
    magic_core::native_version()
}

/// Versioned identity of this binding build (`magic.cookie.<version>`).
/// Thrown errors carry only the `[CODE] message` reason.
#[napi(js_name = "magicErrorIdentity")]
pub fn magic_error_identity() -> String {
    error_types::error_identity().to_string()
}
