//! # magic-sys
//!
//! Raw bindings to the libmagic C API (`man 3 libmagic`).
//! Nothing here is safe to call directly; `magic-core` wraps these in an
//! owning `Cookie` type.

#![allow(non_camel_case_types)]

use std::ffi::{c_char, c_int, c_void};

/// Opaque engine state behind a `magic_t`.
#[repr(C)]
pub struct magic_set {
    _private: [u8; 0],
}

/// Native handle ("cookie"). Null on construction failure.
pub type magic_t = *mut magic_set;

// ---- Flags (numeric values of magic.h) ----

pub const MAGIC_NONE: c_int = 0x0000000;
pub const MAGIC_DEBUG: c_int = 0x0000001;
pub const MAGIC_SYMLINK: c_int = 0x0000002;
pub const MAGIC_COMPRESS: c_int = 0x0000004;
pub const MAGIC_DEVICES: c_int = 0x0000008;
pub const MAGIC_MIME_TYPE: c_int = 0x0000010;
pub const MAGIC_CONTINUE: c_int = 0x0000020;
pub const MAGIC_CHECK: c_int = 0x0000040;
pub const MAGIC_PRESERVE_ATIME: c_int = 0x0000080;
pub const MAGIC_RAW: c_int = 0x0000100;
pub const MAGIC_ERROR: c_int = 0x0000200;
pub const MAGIC_MIME_ENCODING: c_int = 0x0000400;
pub const MAGIC_MIME: c_int = MAGIC_MIME_TYPE | MAGIC_MIME_ENCODING;
pub const MAGIC_APPLE: c_int = 0x0000800;
pub const MAGIC_EXTENSION: c_int = 0x1000000;
pub const MAGIC_COMPRESS_TRANSP: c_int = 0x2000000;
pub const MAGIC_NODESC: c_int = MAGIC_EXTENSION | MAGIC_MIME | MAGIC_APPLE;

pub const MAGIC_NO_CHECK_COMPRESS: c_int = 0x0001000;
pub const MAGIC_NO_CHECK_TAR: c_int = 0x0002000;
pub const MAGIC_NO_CHECK_SOFT: c_int = 0x0004000;
pub const MAGIC_NO_CHECK_APPTYPE: c_int = 0x0008000;
pub const MAGIC_NO_CHECK_ELF: c_int = 0x0010000;
pub const MAGIC_NO_CHECK_TEXT: c_int = 0x0020000;
pub const MAGIC_NO_CHECK_CDF: c_int = 0x0040000;
pub const MAGIC_NO_CHECK_CSV: c_int = 0x0080000;
pub const MAGIC_NO_CHECK_TOKENS: c_int = 0x0100000;
pub const MAGIC_NO_CHECK_ENCODING: c_int = 0x0200000;
pub const MAGIC_NO_CHECK_JSON: c_int = 0x0400000;

extern "C" {
    pub fn magic_open(flags: c_int) -> magic_t;
    pub fn magic_close(cookie: magic_t);

    pub fn magic_file(cookie: magic_t, filename: *const c_char) -> *const c_char;
    pub fn magic_descriptor(cookie: magic_t, fd: c_int) -> *const c_char;
    pub fn magic_buffer(cookie: magic_t, buffer: *const c_void, length: usize) -> *const c_char;

    /// Last library-level error message, or null if the failure was an OS error.
    pub fn magic_error(cookie: magic_t) -> *const c_char;
    pub fn magic_errno(cookie: magic_t) -> c_int;

    /// Returns -1 (errno = EINVAL) for unsupported flag combinations.
    pub fn magic_setflags(cookie: magic_t, flags: c_int) -> c_int;
    pub fn magic_version() -> c_int;

    // `filename` may be null (default database) or a PATHSEP-separated list.
    pub fn magic_load(cookie: magic_t, filename: *const c_char) -> c_int;
    pub fn magic_compile(cookie: magic_t, filename: *const c_char) -> c_int;
    pub fn magic_check(cookie: magic_t, filename: *const c_char) -> c_int;
}
