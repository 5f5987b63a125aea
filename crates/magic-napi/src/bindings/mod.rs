//! NAPI-exported binding modules.

pub mod cookie;
pub mod flags;
pub mod lifecycle;
