//! Tracing setup.
//!
//! The library only emits events; hosts that want them on stderr call
//! [`init_tracing`] once. The filter comes from `MAGIC_LOG`
//! (`tracing-subscriber` env-filter syntax), defaulting to `warn`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "MAGIC_LOG";
const DEFAULT_DIRECTIVE: &str = "warn";

/// Install a global fmt subscriber. Returns `false` if one was already set.
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .is_ok()
}
