//! Flag constants and lookup, numerically identical to `magic.h`.

use napi_derive::napi;

use magic_core::Flags;

use crate::conversions::error_types::to_napi_error;

#[napi]
pub const MAGIC_NONE: i32 = Flags::NONE.bits();
#[napi]
pub const MAGIC_DEBUG: i32 = Flags::DEBUG.bits();
#[napi]
pub const MAGIC_SYMLINK: i32 = Flags::SYMLINK.bits();
#[napi]
pub const MAGIC_COMPRESS: i32 = Flags::COMPRESS.bits();
#[napi]
pub const MAGIC_DEVICES: i32 = Flags::DEVICES.bits();
#[napi]
pub const MAGIC_MIME_TYPE: i32 = Flags::MIME_TYPE.bits();
#[napi]
pub const MAGIC_CONTINUE: i32 = Flags::CONTINUE.bits();
#[napi]
pub const MAGIC_CHECK: i32 = Flags::CHECK.bits();
#[napi]
pub const MAGIC_PRESERVE_ATIME: i32 = Flags::PRESERVE_ATIME.bits();
#[napi]
pub const MAGIC_RAW: i32 = Flags::RAW.bits();
#[napi]
pub const MAGIC_MIME_ENCODING: i32 = Flags::MIME_ENCODING.bits();
#[napi]
pub const MAGIC_MIME: i32 = Flags::MIME.bits();
#[napi]
pub const MAGIC_APPLE: i32 = Flags::APPLE.bits();
#[napi]
pub const MAGIC_EXTENSION: i32 = Flags::EXTENSION.bits();
#[napi]
pub const MAGIC_COMPRESS_TRANSP: i32 = Flags::COMPRESS_TRANSP.bits();
#[napi]
pub const MAGIC_NODESC: i32 = Flags::NODESC.bits();
#[napi]
pub const MAGIC_NO_CHECK_COMPRESS: i32 = Flags::NO_CHECK_COMPRESS.bits();
#[napi]
pub const MAGIC_NO_CHECK_TAR: i32 = Flags::NO_CHECK_TAR.bits();
#[napi]
pub const MAGIC_NO_CHECK_SOFT: i32 = Flags::NO_CHECK_SOFT.bits();
#[napi]
pub const MAGIC_NO_CHECK_APPTYPE: i32 = Flags::NO_CHECK_APPTYPE.bits();
#[napi]
pub const MAGIC_NO_CHECK_ELF: i32 = Flags::NO_CHECK_ELF.bits();
#[napi]
pub const MAGIC_NO_CHECK_TEXT: i32 = Flags::NO_CHECK_TEXT.bits();
#[napi]
pub const MAGIC_NO_CHECK_CDF: i32 = Flags::NO_CHECK_CDF.bits();
#[napi]
pub const MAGIC_NO_CHECK_CSV: i32 = Flags::NO_CHECK_CSV.bits();
#[napi]
pub const MAGIC_NO_CHECK_TOKENS: i32 = Flags::NO_CHECK_TOKENS.bits();
#[napi]
pub const MAGIC_NO_CHECK_ENCODING: i32 = Flags::NO_CHECK_ENCODING.bits();
#[napi]
pub const MAGIC_NO_CHECK_JSON: i32 = Flags::NO_CHECK_JSON.bits();

/// Combine flag names (`"mime_type"`, `"MAGIC_SYMLINK"`, ...) into a mask.
#[napi(js_name = "magicFlags")]
pub fn magic_flags(names: Vec<String>) -> napi::Result<i32> {
    Flags::from_names(&names)
        .map(Flags::bits)
        .map_err(|e| to_napi_error(e.into()))
}
