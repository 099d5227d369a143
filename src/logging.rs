//! Logging initialisation
//!
//! Library code logs through `tracing` macros. The binary installs a stderr
//! subscriber once at startup; `RUST_LOG` takes precedence over the level
//! chosen here.

use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Level used when neither `--verbose` nor `RUST_LOG` is given
pub fn default_level(verbose: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

/// Install the global subscriber.
///
/// Returns an error if a subscriber is already installed.
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose).as_str().to_lowercase()));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {}", e))
}
