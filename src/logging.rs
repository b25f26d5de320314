//! Logging setup for the sign-up backend.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the tracing subscriber.
///
/// Called once at startup. `RUST_LOG` overrides the default filter, which
/// logs this crate and `tower_http` at info level.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("signup_backend=info,tower_http=info"));

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true));

    // Ignore the error if a subscriber is already installed (tests).
    let _ = subscriber.try_init();
}
