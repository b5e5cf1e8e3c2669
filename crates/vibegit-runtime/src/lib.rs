// Runtime module - everything that touches the host: config files, the
// environment, the rounds directory and the global log subscriber.

pub mod config;
pub mod error;
pub mod loader;
pub mod logging;

pub use config::{Config, Env, RoundsSection, ServerSection, ServerSettings, resolve_config_path};
pub use error::{Error, Result};
pub use loader::{RoundCatalog, discover_round_files};
