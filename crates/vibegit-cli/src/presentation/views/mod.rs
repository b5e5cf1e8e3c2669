mod round_list;
mod timeline;

pub use round_list::RoundListView;
pub use timeline::{TimelineRow, render_timeline, timeline_rows};

pub const NO_DATA: &str = "no data";
