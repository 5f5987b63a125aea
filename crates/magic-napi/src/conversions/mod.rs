//! Rust ↔ JS conversions.

pub mod error_types;
