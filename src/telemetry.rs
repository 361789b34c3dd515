//! Tracing setup for the binary.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber, logging to stderr so stdout stays machine-readable.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Calling this more than
/// once is a no-op.
pub fn init(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
