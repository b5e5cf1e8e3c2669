pub mod event;
pub mod kind;

pub use event::*;
pub use kind::*;
