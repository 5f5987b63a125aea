//! # magic-core
//!
//! Safe binding to libmagic. A [`Cookie`] owns one native detection engine;
//! everything else here supports it: [`Flags`], the error taxonomy, argument
//! marshaling, configuration and tracing setup.
//!
//! ```no_run
//! use magic_core::{Cookie, Flags};
//!
//! let mut cookie = Cookie::open(Flags::MIME_TYPE)?;
//! cookie.load_database(None)?;
//! let mime = cookie.identify_buffer(b"%PDF-1.7\n")?;
//! assert_eq!(mime, "application/pdf");
//! cookie.close();
//! # Ok::<(), magic_core::MagicError>(())
//! ```

pub mod config;
pub mod cookie;
pub mod errors;
pub mod flags;
pub mod marshal;
pub mod tracing;

pub use config::MagicConfig;
pub use cookie::{native_version, Cookie};
pub use errors::{ConfigError, MagicError, MagicErrorCode, MagicResult};
pub use flags::Flags;
