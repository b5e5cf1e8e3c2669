// Engine module - pure transformations over loaded rounds
// Sits between raw round documents (types) and presentation (cli / any front end)

pub mod classify;
pub mod group;
pub mod ingest;
pub mod layout;
pub mod summary;
pub mod timeline;

pub use classify::{Classified, Role, TimelineItem, classify, classify_round};
pub use group::{RoundGroup, group_by_round};
pub use ingest::{
    IngestReport, Ingested, ParsedRound, RoundDocument, SkipReason, Skipped, ingest, parse_round,
};
pub use layout::{AxisLayout, axis_layout};
pub use summary::{RAW_SNIPPET_CHARS, SUMMARY_LINE_CHARS, summarize};
pub use timeline::TimelineState;

use vibegit_types::RoundFile;

/// Classify and group the events of several rounds in one pass
pub fn build_groups<'a, I>(rounds: I) -> Vec<RoundGroup>
where
    I: IntoIterator<Item = &'a RoundFile>,
{
    group_by_round(rounds.into_iter().flat_map(classify_round))
}
