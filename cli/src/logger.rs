use anyhow::{anyhow, Result};
use std::env;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` when set, otherwise `debug` in verbose mode and `info`
/// elsewhere. `DIVPOW10_LOG_FORMAT` selects `pretty` (default), `compact` or `json`. Logs go to
/// stderr so that a table written to stdout stays clean.
pub fn init_tracing(verbose: bool) -> Result<()> {
    let log_level = if verbose { "debug" } else { "info" };
    let log_format = env::var("DIVPOW10_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let result = match log_format.as_str() {
        "json" => tracing_subscriber::fmt()
            .json()
            .with_writer(std::io::stderr)
            .with_env_filter(env_filter)
            .try_init(),
        "compact" => tracing_subscriber::fmt()
            .compact()
            .with_target(true)
            .with_writer(std::io::stderr)
            .with_env_filter(env_filter)
            .try_init(),
        _ => tracing_subscriber::fmt()
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_env_filter(env_filter)
            .try_init(),
    };

    result.map_err(|e| anyhow!("Failed to initialize logger: {e}"))
}
