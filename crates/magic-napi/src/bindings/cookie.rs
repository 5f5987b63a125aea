//! The JS `Cookie` class.
//!
//! Each instance exclusively owns one native engine. `close()` is explicit
//! and idempotent; the GC finalizer covers instances that were never closed.
//! JS objects are only touched from the JS thread, so no locking is needed.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use napi::bindgen_prelude::Buffer;
use napi_derive::napi;

use magic_core::{Cookie, Flags, MagicConfig};

use crate::conversions::error_types::to_napi_error;

#[napi(js_name = "Cookie")]
pub struct JsCookie {
    inner: Cookie,
}

fn optional_path(path: &Option<String>) -> Option<&Path> {
    path.as_deref().map(Path::new)
}

#[napi]
impl JsCookie {
    /// Open a new detection engine. `flags` defaults to none; the
    /// error-reporting bit is always added.
    #[napi(factory)]
    pub fn open(flags: Option<i32>) -> napi::Result<Self> {
        let flags = Flags::from_bits(flags.unwrap_or(0));
        let inner = Cookie::open(flags).map_err(to_napi_error)?;
        Ok(Self { inner })
    }

    /// Open, configure and load from a TOML configuration string.
    #[napi(factory)]
    pub fn from_config(config_toml: String) -> napi::Result<Self> {
        let config = MagicConfig::from_toml(&config_toml).map_err(|e| to_napi_error(e.into()))?;
        let inner = Cookie::from_config(&config).map_err(to_napi_error)?;
        Ok(Self { inner })
    }

    /// Release the native engine now. Safe to call more than once.
    #[napi]
    pub fn close(&mut self) {
        self.inner.close();
    }

    #[napi(getter)]
    pub fn closed(&self) -> bool {
        self.inner.is_closed()
    }

    #[napi(getter)]
    pub fn flags(&self) -> napi::Result<i32> {
        self.inner.flags().map(Flags::bits).map_err(to_napi_error)
    }

    #[napi]
    pub fn set_flags(&mut self, flags: i32) -> napi::Result<()> {
        self.inner
            .set_flags(Flags::from_bits(flags))
            .map_err(to_napi_error)
    }

    /// Switch load failures from the fixed diagnostic to the native message.
    #[napi]
    pub fn set_detailed_load_errors(&mut self, enabled: bool) {
        self.inner.set_detailed_load_errors(enabled);
    }

    /// Load a database, or the default one when `path` is omitted.
    #[napi]
    pub fn load_database(&mut self, path: Option<String>) -> napi::Result<()> {
        self.inner
            .load_database(optional_path(&path))
            .map_err(to_napi_error)
    }

    #[napi]
    pub fn load_databases(&mut self, paths: Vec<String>) -> napi::Result<()> {
        let paths: Vec<PathBuf> = paths.into_iter().map(PathBuf::from).collect();
        self.inner.load_databases(&paths).map_err(to_napi_error)
    }

    #[napi]
    pub fn compile_database(&self, path: Option<String>) -> napi::Result<()> {
        self.inner
            .compile_database(optional_path(&path))
            .map_err(to_napi_error)
    }

    /// `false` for an invalid database; throws only on a closed cookie.
    #[napi]
    pub fn check_database(&self, path: Option<String>) -> napi::Result<bool> {
        self.inner
            .check_database(optional_path(&path))
            .map_err(to_napi_error)
    }

    #[napi]
    pub fn identify_file(&self, path: String) -> napi::Result<String> {
        self.inner
            .identify_file(Path::new(&path))
            .map_err(to_napi_error)
    }

    /// Identify the bytes of `buffer`; its length is passed explicitly, so
    /// embedded zero bytes are fine.
    #[napi]
    pub fn identify_buffer(&self, buffer: Buffer) -> napi::Result<String> {
        self.inner
            .identify_buffer(&buffer)
            .map_err(to_napi_error)
    }

    /// Same native instance (or both closed).
    #[napi]
    pub fn equals(&self, other: &JsCookie) -> bool {
        self.inner == other.inner
    }

    /// Total order by native address: -1, 0 or 1.
    #[napi]
    pub fn compare(&self, other: &JsCookie) -> i32 {
        match self.inner.cmp(&other.inner) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }
}
