//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str =
    "info,coverart_server=debug,coverart_database=debug,coverart_interface=debug";

/// Initialize console logging.
///
/// `RUST_LOG` takes precedence over the built-in filter; `verbose` raises
/// the fallback level to `debug` for every target. With `json` set, events
/// are written as JSON lines.
pub fn init_telemetry(json: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let fallback = if verbose { "debug" } else { DEFAULT_FILTER };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))?;

    let fmt_layer = if json {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().with_target(true).boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
