use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

use crate::{Error, Result};

/// Install the global fmt subscriber writing to stderr.
///
/// `level` is the default directive (e.g. `"warn"`); `RUST_LOG` overrides it
/// when set and valid. Call once at startup.
pub fn init(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}
