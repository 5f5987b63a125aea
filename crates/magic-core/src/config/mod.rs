//! Configuration for opening a cookie from a TOML file.

pub mod magic_config;

pub use magic_config::MagicConfig;
