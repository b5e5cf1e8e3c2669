//! Testing infrastructure for vibegit integration tests.
//!
//! - `TestWorld`: isolated temp environment with a rounds directory and config
//! - `assertions`: checks over the CLI's JSON output
//! - `fixtures`: round document builders and bundled sample files

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use fixtures::{RoundBuilder, SampleFiles};
pub use world::{CliResult, TestWorld};
