//! Logging setup.
//!
//! Diagnostics go through `tracing` and are written to stderr. Verbosity is
//! controlled by `RUST_LOG` (default `warn`, so only retries and failures
//! show up); `SPEECH_LOG_FORMAT=json` switches to one JSON object per line.

/// Environment variable selecting the log format.
pub const LOG_FORMAT_ENV: &str = "SPEECH_LOG_FORMAT";

pub fn logs_are_json() -> bool {
    matches!(std::env::var(LOG_FORMAT_ENV).as_deref(), Ok("json"))
}

/// Install the global subscriber. Safe to call more than once.
pub fn init_tracing() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);
    let builder = tracing_subscriber::registry().with(filter);

    if logs_are_json() {
        let _ = builder.with(fmt_layer.json().flatten_event(true)).try_init();
    } else {
        let _ = builder.with(fmt_layer.compact()).try_init();
    }
}
