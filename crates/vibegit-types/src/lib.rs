pub mod build;
pub mod error;
pub mod event;
pub mod round;
pub mod summary;
mod util;

pub use build::*;
pub use error::{Error, Result};
pub use event::*;
pub use round::*;
pub use summary::*;
pub use util::*;
