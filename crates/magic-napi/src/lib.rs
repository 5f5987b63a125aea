//! # magic-napi
//!
//! Node.js bindings for the libmagic cookie. The JS `Cookie` class owns a
//! `magic_core::Cookie`; when the JS object is garbage-collected without an
//! explicit `close()`, its finalizer drops the inner cookie, which releases
//! the native engine only if it is still open.

pub mod bindings;
pub mod conversions;
