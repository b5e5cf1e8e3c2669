// NOTE: vibegit CLI layout
//
// - args: clap definitions only
// - commands: resolves config/env once, loads the catalog, dispatches
// - handlers: one module per command, no parsing or printing logic of their own
// - presentation: view models (JSON shape) and text views (plain output)

mod args;
mod commands;
mod handlers;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, RoundsCommand, RoundsSourceArgs};
pub use commands::run;
