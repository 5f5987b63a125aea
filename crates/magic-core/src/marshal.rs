//! Host → C argument marshaling.

use std::ffi::{CStr, CString, OsStr, OsString};
use std::os::raw::c_char;
use std::path::{Path, PathBuf};

use crate::errors::{MagicError, MagicResult};

/// Separator libmagic uses between entries of a database path list.
#[cfg(windows)]
pub const PATH_LIST_SEPARATOR: char = ';';
#[cfg(not(windows))]
pub const PATH_LIST_SEPARATOR: char = ':';

const COMPILED_EXTENSION: &str = ".mgc";

/// Convert a path to a NUL-terminated C string.
pub(crate) fn path_to_cstring(operation: &'static str, path: &Path) -> MagicResult<CString> {
    let bytes = os_str_bytes(operation, path.as_os_str())?;
    CString::new(bytes).map_err(|_| MagicError::InvalidArgument {
        operation,
        reason: format!("path contains a NUL byte: {}", path.display()),
    })
}

/// `None` stays `None` (native default database).
pub(crate) fn optional_path(
    operation: &'static str,
    path: Option<&Path>,
) -> MagicResult<Option<CString>> {
    path.map(|p| path_to_cstring(operation, p)).transpose()
}

pub(crate) fn as_ptr(path: &Option<CString>) -> *const c_char {
    path.as_ref().map_or(std::ptr::null(), |c| c.as_ptr())
}

#[cfg(unix)]
fn os_str_bytes(_operation: &'static str, s: &OsStr) -> MagicResult<Vec<u8>> {
    use std::os::unix::ffi::OsStrExt;
    Ok(s.as_bytes().to_vec())
}

#[cfg(not(unix))]
fn os_str_bytes(operation: &'static str, s: &OsStr) -> MagicResult<Vec<u8>> {
    s.to_str()
        .map(|s| s.as_bytes().to_vec())
        .ok_or_else(|| MagicError::InvalidArgument {
            operation,
            reason: format!("path is not valid UTF-8: {}", s.to_string_lossy()),
        })
}

/// Copy a native result string into host memory. The native buffer belongs
/// to the cookie and is overwritten by the next call.
///
/// # Safety
/// `ptr` must be non-null and point to a NUL-terminated string that stays
/// valid for the duration of this call.
pub(crate) unsafe fn copy_native_string(ptr: *const c_char) -> String {
    CStr::from_ptr(ptr).to_string_lossy().into_owned()
}

/// Join several database paths into one native path list.
pub fn join_path_list<P: AsRef<Path>>(paths: &[P]) -> OsString {
    let mut joined = OsString::new();
    for (i, p) in paths.iter().enumerate() {
        if i > 0 {
            joined.push(PATH_LIST_SEPARATOR.to_string());
        }
        joined.push(p.as_ref().as_os_str());
    }
    joined
}

/// Name of the file `magic_compile` writes for `source`: the basename with
/// `.mgc` appended (unless already present), relative to the current
/// working directory.
pub fn compiled_database_path(source: &Path) -> PathBuf {
    let name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if name.ends_with(COMPILED_EXTENSION) {
        PathBuf::from(name)
    } else {
        PathBuf::from(format!("{name}{COMPILED_EXTENSION}"))
    }
}
