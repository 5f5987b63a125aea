//! Database load / check / compile behavior and its error channels.

mod common;

use std::path::Path;

use magic_core::{Cookie, Flags, MagicConfig, MagicError, MagicErrorCode};

// ---- check ----

#[test]
fn check_reports_validity_as_bool() {
    let fx = common::fixture();
    let cookie = Cookie::open(Flags::NONE).unwrap();
    assert!(cookie.check_database(Some(fx.valid_source.as_path())).unwrap());
    assert!(!cookie.check_database(Some(fx.invalid_source.as_path())).unwrap());
}

#[test]
fn check_default_database_is_valid() {
    let cookie = Cookie::open(Flags::NONE).unwrap();
    assert!(cookie.check_database(None).unwrap());
}

#[test]
fn check_missing_or_unmarshalable_path_is_false() {
    let cookie = Cookie::open(Flags::NONE).unwrap();
    assert!(!cookie
        .check_database(Some(Path::new("/nonexistent/magic/source")))
        .unwrap());
    assert!(!cookie.check_database(Some(Path::new("nul\0path"))).unwrap());
}

// ---- load ----

#[test]
fn load_failure_uses_fixed_message_by_default() {
    let mut cookie = Cookie::open(Flags::NONE).unwrap();
    let err = cookie
        .load_database(Some(Path::new("/nonexistent/magic.mgc")))
        .unwrap_err();
    match err {
        MagicError::Failure { ref message } => assert_eq!(message, "load_database"),
        other => panic!("expected Failure, got {other:?}"),
    }
    assert_eq!(err.error_code(), "MAGIC_FAILURE");
}

#[test]
fn load_failure_can_surface_native_detail() {
    let mut cookie = Cookie::open(Flags::NONE).unwrap();
    cookie.set_detailed_load_errors(true);
    let err = cookie
        .load_database(Some(Path::new("/nonexistent/magic.mgc")))
        .unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("load_database: "), "got {message}");
    assert_ne!(message, "load_database");
}

#[test]
fn load_several_databases() {
    let fx = common::fixture();
    let other = common::write_file(
        fx.dir.path(),
        "other.magic",
        b"0\tstring\tOTHERMAG\tsecond test format\n",
    );
    let mut cookie = Cookie::open(Flags::NONE).unwrap();
    cookie
        .load_databases(&[fx.valid_source.clone(), other])
        .unwrap();

    assert_eq!(
        cookie.identify_buffer(b"RSTMAGIC").unwrap(),
        common::VALID_DESCRIPTION
    );
    assert_eq!(
        cookie.identify_buffer(b"OTHERMAG").unwrap(),
        "second test format"
    );
}

// ---- compile ----

#[test]
fn compile_invalid_source_surfaces_native_error() {
    let fx = common::fixture();
    let cookie = Cookie::open(Flags::NONE).unwrap();
    let err = cookie
        .compile_database(Some(fx.invalid_source.as_path()))
        .unwrap_err();
    assert!(
        err.to_string().starts_with("compile_database: "),
        "got {err}"
    );
    assert!(matches!(
        err,
        MagicError::Failure { .. } | MagicError::SystemError { .. }
    ));
}

// ---- config ----

#[test]
fn from_config_opens_and_loads() {
    let fx = common::fixture();
    let config = MagicConfig::from_toml(&format!(
        "flags = [\"raw\"]\ndatabase = [{:?}]\n",
        fx.valid_source.display().to_string()
    ))
    .unwrap();

    let cookie = Cookie::from_config(&config).unwrap();
    assert_eq!(cookie.flags().unwrap(), Flags::RAW);
    assert_eq!(
        cookie.identify_file(&fx.sample).unwrap(),
        common::VALID_DESCRIPTION
    );
}

#[test]
fn from_config_rejects_unknown_flags_before_opening() {
    let config = MagicConfig::from_toml("flags = [\"no_such_flag\"]").unwrap();
    let err = Cookie::from_config(&config).unwrap_err();
    assert_eq!(err.error_code(), "MAGIC_CONFIG_ERROR");
}

#[test]
fn from_config_detailed_load_errors() {
    let config = MagicConfig::from_toml(
        "database = [\"/nonexistent/x.mgc\"]\ndetailed_load_errors = true\n",
    )
    .unwrap();
    let err = Cookie::from_config(&config).unwrap_err();
    assert!(err.to_string().starts_with("load_database: "), "got {err}");
}
