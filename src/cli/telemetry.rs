use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Map the `-v` count to a log level
#[must_use]
pub const fn level(verbose: u8) -> Level {
    match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber, `RUST_LOG` takes precedence over `-v`
pub fn init(level: Level) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    // ignore the error if a subscriber is already set
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .try_init();
}
