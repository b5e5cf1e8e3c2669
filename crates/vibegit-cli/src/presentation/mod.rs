//! # Presentation Layer
//!
//! ```text
//! [ Handler ] --> [ ViewModel ] ==(JSON)==> serde_json --> stdout
//!                               ==(Text)==> [ View ] --> stdout
//! ```
//!
//! View models hold raw data (milliseconds, ids, flags), never formatted
//! strings; `--format json` dumps them unchanged. Views own all layout.

pub mod formatters;
pub mod view_models;
pub mod views;

pub use view_models::{RoundListViewModel, TimelineRoundViewModel, TimelineViewModel};
pub use views::{RoundListView, TimelineRow, render_timeline, timeline_rows};

use is_terminal::IsTerminal;

/// Color only when stdout is a terminal and `NO_COLOR` is unset
pub fn use_color() -> bool {
    std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}
