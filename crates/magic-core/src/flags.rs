//! Detection flags.
//!
//! `Flags` is a thin newtype over the native bitmask. Values are numerically
//! identical to the `magic.h` constants and are passed through unchanged,
//! except that [`Flags::ERROR`] is always added before reaching the engine.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

use magic_sys as sys;

use crate::errors::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flags(i32);

impl Flags {
    pub const NONE: Flags = Flags(sys::MAGIC_NONE);
    /// Print debugging messages to stderr.
    pub const DEBUG: Flags = Flags(sys::MAGIC_DEBUG);
    /// Follow symlinks.
    pub const SYMLINK: Flags = Flags(sys::MAGIC_SYMLINK);
    /// Look inside compressed files.
    pub const COMPRESS: Flags = Flags(sys::MAGIC_COMPRESS);
    /// Look at the contents of devices.
    pub const DEVICES: Flags = Flags(sys::MAGIC_DEVICES);
    pub const MIME_TYPE: Flags = Flags(sys::MAGIC_MIME_TYPE);
    /// Return all matches, not just the first.
    pub const CONTINUE: Flags = Flags(sys::MAGIC_CONTINUE);
    /// Print warnings when loading the database.
    pub const CHECK: Flags = Flags(sys::MAGIC_CHECK);
    /// Restore access time on exit. Not supported on every platform.
    pub const PRESERVE_ATIME: Flags = Flags(sys::MAGIC_PRESERVE_ATIME);
    /// Don't convert unprintable characters.
    pub const RAW: Flags = Flags(sys::MAGIC_RAW);
    /// Report errors instead of embedding them in the result string.
    pub const ERROR: Flags = Flags(sys::MAGIC_ERROR);
    pub const MIME_ENCODING: Flags = Flags(sys::MAGIC_MIME_ENCODING);
    pub const MIME: Flags = Flags(sys::MAGIC_MIME);
    pub const APPLE: Flags = Flags(sys::MAGIC_APPLE);
    pub const EXTENSION: Flags = Flags(sys::MAGIC_EXTENSION);
    pub const COMPRESS_TRANSP: Flags = Flags(sys::MAGIC_COMPRESS_TRANSP);
    pub const NODESC: Flags = Flags(sys::MAGIC_NODESC);
    pub const NO_CHECK_COMPRESS: Flags = Flags(sys::MAGIC_NO_CHECK_COMPRESS);
    pub const NO_CHECK_TAR: Flags = Flags(sys::MAGIC_NO_CHECK_TAR);
    pub const NO_CHECK_SOFT: Flags = Flags(sys::MAGIC_NO_CHECK_SOFT);
    pub const NO_CHECK_APPTYPE: Flags = Flags(sys::MAGIC_NO_CHECK_APPTYPE);
    pub const NO_CHECK_ELF: Flags = Flags(sys::MAGIC_NO_CHECK_ELF);
    pub const NO_CHECK_TEXT: Flags = Flags(sys::MAGIC_NO_CHECK_TEXT);
    pub const NO_CHECK_CDF: Flags = Flags(sys::MAGIC_NO_CHECK_CDF);
    pub const NO_CHECK_CSV: Flags = Flags(sys::MAGIC_NO_CHECK_CSV);
    pub const NO_CHECK_TOKENS: Flags = Flags(sys::MAGIC_NO_CHECK_TOKENS);
    pub const NO_CHECK_ENCODING: Flags = Flags(sys::MAGIC_NO_CHECK_ENCODING);
    pub const NO_CHECK_JSON: Flags = Flags(sys::MAGIC_NO_CHECK_JSON);

    /// Name table used by configuration files. Names are the lowercase
    /// `magic.h` suffixes (`MAGIC_MIME_TYPE` -> `"mime_type"`).
    pub const NAMED: &'static [(&'static str, Flags)] = &[
        ("none", Self::NONE),
        ("debug", Self::DEBUG),
        ("symlink", Self::SYMLINK),
        ("compress", Self::COMPRESS),
        ("devices", Self::DEVICES),
        ("mime_type", Self::MIME_TYPE),
        ("continue", Self::CONTINUE),
        ("check", Self::CHECK),
        ("preserve_atime", Self::PRESERVE_ATIME),
        ("raw", Self::RAW),
        ("error", Self::ERROR),
        ("mime_encoding", Self::MIME_ENCODING),
        ("mime", Self::MIME),
        ("apple", Self::APPLE),
        ("extension", Self::EXTENSION),
        ("compress_transp", Self::COMPRESS_TRANSP),
        ("nodesc", Self::NODESC),
        ("no_check_compress", Self::NO_CHECK_COMPRESS),
        ("no_check_tar", Self::NO_CHECK_TAR),
        ("no_check_soft", Self::NO_CHECK_SOFT),
        ("no_check_apptype", Self::NO_CHECK_APPTYPE),
        ("no_check_elf", Self::NO_CHECK_ELF),
        ("no_check_text", Self::NO_CHECK_TEXT),
        ("no_check_cdf", Self::NO_CHECK_CDF),
        ("no_check_csv", Self::NO_CHECK_CSV),
        ("no_check_tokens", Self::NO_CHECK_TOKENS),
        ("no_check_encoding", Self::NO_CHECK_ENCODING),
        ("no_check_json", Self::NO_CHECK_JSON),
    ];

    /// Wrap a raw bitmask. Unknown bits are kept; the engine decides.
    pub const fn from_bits(bits: i32) -> Self {
        Flags(bits)
    }

    pub const fn bits(self) -> i32 {
        self.0
    }

    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    /// The bitmask actually handed to the native engine.
    pub const fn effective(self) -> i32 {
        self.0 | sys::MAGIC_ERROR
    }

    /// Look up a single flag by its configuration name (case-insensitive,
    /// optional `magic_` prefix).
    pub fn from_name(name: &str) -> Result<Flags, ConfigError> {
        let lowered = name.trim().to_ascii_lowercase();
        let key = lowered.strip_prefix("magic_").unwrap_or(lowered.as_str());
        Self::NAMED
            .iter()
            .find(|(n, _)| *n == key)
            .map(|(_, f)| *f)
            .ok_or_else(|| ConfigError::UnknownFlag(name.to_string()))
    }

    /// Combine a list of flag names into one mask.
    pub fn from_names<I, S>(names: I) -> Result<Flags, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .try_fold(Flags::NONE, |acc, n| Ok(acc | Flags::from_name(n.as_ref())?))
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Flags {
    type Output = Flags;

    fn bitand(self, rhs: Flags) -> Flags {
        Flags(self.0 & rhs.0)
    }
}

impl From<i32> for Flags {
    fn from(bits: i32) -> Self {
        Flags(bits)
    }
}

impl From<Flags> for i32 {
    fn from(flags: Flags) -> Self {
        flags.0
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_always_reports_errors() {
        assert_eq!(Flags::NONE.effective(), sys::MAGIC_ERROR);
        assert_eq!(
            Flags::MIME_TYPE.effective(),
            sys::MAGIC_MIME_TYPE | sys::MAGIC_ERROR
        );
    }

    #[test]
    fn mime_is_type_and_encoding() {
        assert_eq!(Flags::MIME, Flags::MIME_TYPE | Flags::MIME_ENCODING);
        assert!(Flags::MIME.contains(Flags::MIME_TYPE));
        assert!(!Flags::MIME_TYPE.contains(Flags::MIME));
    }

    #[test]
    fn names_are_case_insensitive_and_accept_prefix() {
        assert_eq!(Flags::from_name("MAGIC_SYMLINK").unwrap(), Flags::SYMLINK);
        assert_eq!(Flags::from_name(" mime_type ").unwrap(), Flags::MIME_TYPE);
        assert!(Flags::from_name("sniff_harder").is_err());
    }

    #[test]
    fn from_names_combines() {
        let flags = Flags::from_names(["symlink", "compress"]).unwrap();
        assert_eq!(flags, Flags::SYMLINK | Flags::COMPRESS);
        assert_eq!(Flags::from_names(Vec::<String>::new()).unwrap(), Flags::NONE);
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(Flags::MIME.to_string(), "0x410");
    }
}
