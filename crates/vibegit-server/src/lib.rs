// Backend process: two read-only JSON endpoints, no shared state

pub mod error;
pub mod handlers;
pub mod server;

pub use error::{Error, Result};
pub use server::{ServerConfig, ServerHandle, build_router, start};
