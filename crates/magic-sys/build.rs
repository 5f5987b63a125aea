//! Link configuration for libmagic.
//!
//! `LIBMAGIC_LIB_DIR` adds a library search path (for non-system installs).
//! `LIBMAGIC_STATIC=1` links `libmagic.a` instead of the shared library.

use std::env;

fn main() {
    println!("cargo:rerun-if-env-changed=LIBMAGIC_LIB_DIR");
    println!("cargo:rerun-if-env-changed=LIBMAGIC_STATIC");

    if let Ok(dir) = env::var("LIBMAGIC_LIB_DIR") {
        println!("cargo:rustc-link-search=native={dir}");
    }

    let kind = match env::var("LIBMAGIC_STATIC").as_deref() {
        Ok("1") | Ok("true") => "static",
        _ => "dylib",
    };
    println!("cargo:rustc-link-lib={kind}=magic");
}
