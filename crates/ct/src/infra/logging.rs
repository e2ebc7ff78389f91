//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_FILTER: &str = "ct=info";

/// Install the global subscriber. `RUST_LOG` takes precedence over the built-in filter.
///
/// Log lines go to stderr so stdout only ever carries the copy summary.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false),
    );

    // A subscriber may already be installed when running inside tests.
    let _ = subscriber.try_init();
}
