//! Two-tier translation of a native failure into a [`MagicError`].
//!
//! libmagic reports database-level problems through `magic_error()` and
//! OS-level problems (e.g. a file that cannot be opened) only through
//! `magic_errno()`. The library message wins when there is one.

use super::magic_error::MagicError;

pub fn translate_native_error(
    operation: &'static str,
    native_message: Option<&str>,
    errno: i32,
) -> MagicError {
    match native_message {
        Some(message) if !message.is_empty() => {
            tracing::trace!(operation, message, "native library error");
            MagicError::failure(operation, message)
        }
        _ => {
            tracing::trace!(operation, errno, "native system error");
            MagicError::SystemError {
                operation,
                source: std::io::Error::from_raw_os_error(errno),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::MagicErrorCode;

    #[test]
    fn library_message_becomes_failure() {
        let err = translate_native_error("compile_database", Some("line 3: bad type"), 0);
        match err {
            MagicError::Failure { message } => {
                assert_eq!(message, "compile_database: line 3: bad type")
            }
            other => panic!("expected Failure, got {other:?}"),
        }
    }

    #[test]
    fn missing_message_falls_back_to_errno() {
        let err = translate_native_error("identify_file", None, 2);
        assert_eq!(err.error_code(), "MAGIC_SYSTEM_ERROR");
        assert_eq!(err.raw_os_error(), Some(2));
        assert!(err.to_string().starts_with("identify_file: "));
    }

    #[test]
    fn empty_message_is_treated_as_absent() {
        let err = translate_native_error("identify_buffer", Some(""), 13);
        assert_eq!(err.raw_os_error(), Some(13));
    }
}
