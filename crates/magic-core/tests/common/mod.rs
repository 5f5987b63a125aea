//! Shared fixtures: tiny magic sources written to a temp dir.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A single rule matching files that start with `RSTMAGIC`.
pub const VALID_MAGIC: &str = "0\tstring\tRSTMAGIC\tmagic-bind test data\n";
pub const VALID_DESCRIPTION: &str = "magic-bind test data";

/// Unknown type keyword; the native parser rejects it.
pub const INVALID_MAGIC: &str = "0\tnotatype\tRSTMAGIC\tbroken rule\n";

/// First bytes of a 64-bit little-endian ELF executable header.
pub const ELF_HEADER: [u8; 20] = [
    0x7f, b'E', b'L', b'F', 2, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0x3e, 0,
];

pub fn write_file(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

pub struct Fixture {
    pub dir: TempDir,
    pub valid_source: PathBuf,
    pub invalid_source: PathBuf,
    pub sample: PathBuf,
}

pub fn fixture() -> Fixture {
    let dir = TempDir::new().unwrap();
    let valid_source = write_file(dir.path(), "valid.magic", VALID_MAGIC.as_bytes());
    let invalid_source = write_file(dir.path(), "invalid.magic", INVALID_MAGIC.as_bytes());
    let sample = write_file(dir.path(), "sample.bin", b"RSTMAGIC and then some payload\n");
    Fixture {
        dir,
        valid_source,
        invalid_source,
        sample,
    }
}
