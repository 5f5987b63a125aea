//! `Cookie`: owning handle around one native libmagic engine.
//!
//! The handle owns exactly one `magic_t`. `close()` releases it and nulls the
//! pointer; `Drop` performs the same release if the caller never closed it.
//! Every operation on a closed cookie fails with `InvalidHandle` without
//! touching native memory.
//!
//! The engine is not thread-safe. `Cookie` is `Send` but not `Sync`, so a
//! handle can move between threads but never be used from two at once.

use std::cmp::Ordering;
use std::ffi::{c_char, c_int};
use std::hash::{Hash, Hasher};
use std::io;
use std::path::Path;
use std::ptr::NonNull;
use std::sync::OnceLock;

use magic_sys as sys;

use crate::config::MagicConfig;
use crate::errors::{translate_native_error, MagicError, MagicResult};
use crate::flags::Flags;
use crate::marshal;

/// Process-wide native version, queried once.
static NATIVE_VERSION: OnceLock<i32> = OnceLock::new();

/// The libmagic version number (e.g. `545` for 5.45).
pub fn native_version() -> i32 {
    // SAFETY: magic_version takes no arguments and reads a constant.
    *NATIVE_VERSION.get_or_init(|| unsafe { sys::magic_version() })
}

pub struct Cookie {
    raw: Option<NonNull<sys::magic_set>>,
    flags: Flags,
    detailed_load_errors: bool,
}

// SAFETY: a magic_set has no thread affinity; it only must not be used
// concurrently, which `!Sync` rules out.
unsafe impl Send for Cookie {}

impl Cookie {
    /// Create a new engine. No database is loaded yet.
    pub fn open(flags: Flags) -> MagicResult<Self> {
        // SAFETY: plain constructor call; a null return is handled below.
        let raw = unsafe { sys::magic_open(flags.effective()) };
        match NonNull::new(raw) {
            Some(ptr) => {
                tracing::debug!(address = ?ptr, %flags, "cookie opened");
                Ok(Self {
                    raw: Some(ptr),
                    flags,
                    detailed_load_errors: false,
                })
            }
            None => {
                let err = io::Error::last_os_error();
                if err.kind() == io::ErrorKind::InvalidInput {
                    Err(MagicError::Construction {
                        message: "open: unsupported flag combination (preserve_atime not supported)"
                            .to_string(),
                    })
                } else {
                    Err(MagicError::SystemError {
                        operation: "open",
                        source: err,
                    })
                }
            }
        }
    }

    /// Open, configure and load a database as described by `config`.
    pub fn from_config(config: &MagicConfig) -> MagicResult<Self> {
        let mut cookie = Self::open(config.effective_flags()?)?;
        cookie.set_detailed_load_errors(config.effective_detailed_load_errors());
        match config.database.as_deref() {
            Some(paths) if !paths.is_empty() => cookie.load_databases(paths)?,
            _ => cookie.load_database(None)?,
        }
        Ok(cookie)
    }

    /// Release the native engine. Calling it again is a no-op.
    pub fn close(&mut self) {
        if let Some(ptr) = self.raw.take() {
            // SAFETY: `ptr` came from magic_open and `take()` guarantees it is
            // released exactly once.
            unsafe { sys::magic_close(ptr.as_ptr()) };
            tracing::debug!(address = ?ptr, "cookie closed");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.raw.is_none()
    }

    /// Native address, or 0 once closed. Basis of the ordering relation.
    pub fn address(&self) -> usize {
        self.raw.map_or(0, |p| p.as_ptr() as usize)
    }

    fn handle(&self, operation: &'static str) -> MagicResult<sys::magic_t> {
        self.raw
            .map(NonNull::as_ptr)
            .ok_or(MagicError::InvalidHandle { operation })
    }

    /// Read the native error channels after a failed call on `cookie`.
    fn native_error(cookie: sys::magic_t, operation: &'static str) -> MagicError {
        // SAFETY: `cookie` is open; magic_error returns null or a string owned
        // by the cookie, copied before any further native call.
        let message = unsafe {
            let ptr = sys::magic_error(cookie);
            (!ptr.is_null()).then(|| marshal::copy_native_string(ptr))
        };
        let errno = unsafe { sys::magic_errno(cookie) };
        translate_native_error(operation, message.as_deref(), errno)
    }

    /// Flags last accepted by the engine, as given by the caller.
    pub fn flags(&self) -> MagicResult<Flags> {
        self.handle("flags")?;
        Ok(self.flags)
    }

    pub fn set_flags(&mut self, flags: Flags) -> MagicResult<()> {
        let cookie = self.handle("set_flags")?;
        // SAFETY: `cookie` is open.
        if unsafe { sys::magic_setflags(cookie, flags.effective()) } < 0 {
            return Err(MagicError::Failure {
                message: "set_flags: preserve_atime not supported".to_string(),
            });
        }
        self.flags = flags;
        Ok(())
    }

    /// Surface the native message on load failures instead of the fixed
    /// `load_database` diagnostic. Off by default.
    pub fn set_detailed_load_errors(&mut self, enabled: bool) {
        self.detailed_load_errors = enabled;
    }

    /// Load `path` (a file, directory or native path list), or the compiled-in
    /// default database when `None`.
    pub fn load_database(&mut self, path: Option<&Path>) -> MagicResult<()> {
        const OP: &str = "load_database";
        let cookie = self.handle(OP)?;
        let path_c = marshal::optional_path(OP, path)?;
        // SAFETY: `cookie` is open; `path_c` outlives the call.
        if unsafe { sys::magic_load(cookie, marshal::as_ptr(&path_c)) } < 0 {
            tracing::debug!(path = ?path, "magic database load failed");
            if self.detailed_load_errors {
                return Err(Self::native_error(cookie, OP));
            }
            return Err(MagicError::Failure {
                message: OP.to_string(),
            });
        }
        tracing::debug!(path = ?path, "magic database loaded");
        Ok(())
    }

    /// Load several databases at once.
    pub fn load_databases<P: AsRef<Path>>(&mut self, paths: &[P]) -> MagicResult<()> {
        let joined = marshal::join_path_list(paths);
        self.load_database(Some(Path::new(&joined)))
    }

    /// Compile a source magic file into `<basename>.mgc` in the current
    /// directory (see [`marshal::compiled_database_path`]).
    pub fn compile_database(&self, path: Option<&Path>) -> MagicResult<()> {
        const OP: &str = "compile_database";
        let cookie = self.handle(OP)?;
        let path_c = marshal::optional_path(OP, path)?;
        // SAFETY: `cookie` is open; `path_c` outlives the call.
        if unsafe { sys::magic_compile(cookie, marshal::as_ptr(&path_c)) } < 0 {
            return Err(Self::native_error(cookie, OP));
        }
        Ok(())
    }

    /// `Ok(false)` for an invalid database; only a closed cookie errors.
    pub fn check_database(&self, path: Option<&Path>) -> MagicResult<bool> {
        const OP: &str = "check_database";
        let cookie = self.handle(OP)?;
        // A path that cannot reach C names no valid database.
        let path_c = match marshal::optional_path(OP, path) {
            Ok(p) => p,
            Err(e) => {
                tracing::debug!(error = %e, "check_database: unmarshalable path");
                return Ok(false);
            }
        };
        // SAFETY: `cookie` is open; `path_c` outlives the call.
        Ok(unsafe { sys::magic_check(cookie, marshal::as_ptr(&path_c)) } >= 0)
    }

    pub fn identify_file(&self, path: &Path) -> MagicResult<String> {
        const OP: &str = "identify_file";
        let cookie = self.handle(OP)?;
        let path_c = marshal::path_to_cstring(OP, path)?;
        // SAFETY: `cookie` is open; `path_c` outlives the call.
        let result = unsafe { sys::magic_file(cookie, path_c.as_ptr()) };
        Self::take_result(cookie, result, OP)
    }

    /// Identify an in-memory buffer. Embedded NUL bytes are fine; the length
    /// is passed explicitly.
    pub fn identify_buffer(&self, buffer: &[u8]) -> MagicResult<String> {
        const OP: &str = "identify_buffer";
        let cookie = self.handle(OP)?;
        // SAFETY: `cookie` is open; the slice is valid for `len` bytes.
        let result = unsafe { sys::magic_buffer(cookie, buffer.as_ptr().cast(), buffer.len()) };
        Self::take_result(cookie, result, OP)
    }

    /// Identify the content behind an open descriptor. The descriptor is
    /// borrowed and left open.
    #[cfg(unix)]
    pub fn identify_descriptor<F: std::os::fd::AsRawFd>(&self, file: &F) -> MagicResult<String> {
        const OP: &str = "identify_descriptor";
        let cookie = self.handle(OP)?;
        let fd: c_int = file.as_raw_fd();
        // SAFETY: `cookie` is open; `fd` is borrowed from a live owner.
        let result = unsafe { sys::magic_descriptor(cookie, fd) };
        Self::take_result(cookie, result, OP)
    }

    fn take_result(
        cookie: sys::magic_t,
        result: *const c_char,
        operation: &'static str,
    ) -> MagicResult<String> {
        if result.is_null() {
            return Err(Self::native_error(cookie, operation));
        }
        // SAFETY: non-null results are NUL-terminated and live until the next
        // call on this cookie.
        Ok(unsafe { marshal::copy_native_string(result) })
    }
}

impl Drop for Cookie {
    fn drop(&mut self) {
        if self.raw.is_some() {
            tracing::debug!(address = self.address(), "finalizing unclosed cookie");
        }
        self.close();
    }
}

impl std::fmt::Debug for Cookie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cookie")
            .field("address", &format_args!("{:#x}", self.address()))
            .field("flags", &self.flags)
            .field("closed", &self.is_closed())
            .finish()
    }
}

impl PartialEq for Cookie {
    fn eq(&self, other: &Self) -> bool {
        self.address() == other.address()
    }
}

impl Eq for Cookie {}

impl PartialOrd for Cookie {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cookie {
    fn cmp(&self, other: &Self) -> Ordering {
        self.address().cmp(&other.address())
    }
}

impl Hash for Cookie {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send<T: Send>() {}

    #[test]
    fn cookie_is_send() {
        assert_send::<Cookie>();
    }

    #[test]
    fn open_close_close() {
        let mut cookie = Cookie::open(Flags::NONE).unwrap();
        assert!(!cookie.is_closed());
        assert_ne!(cookie.address(), 0);
        cookie.close();
        cookie.close();
        assert!(cookie.is_closed());
        assert_eq!(cookie.address(), 0);
    }

    #[test]
    fn flags_are_recorded() {
        let mut cookie = Cookie::open(Flags::MIME_TYPE).unwrap();
        assert_eq!(cookie.flags().unwrap(), Flags::MIME_TYPE);
        cookie.set_flags(Flags::SYMLINK).unwrap();
        assert_eq!(cookie.flags().unwrap(), Flags::SYMLINK);
    }

    #[test]
    fn native_version_is_cached_and_positive() {
        let first = native_version();
        assert!(first > 0);
        assert_eq!(first, native_version());
    }
}
