use std::collections::BTreeMap;
use vibegit_types::{
    EventKind, NO_USER_MESSAGE, RoundFile, RoundSummary, collapse_whitespace, ellipsize,
    truncate_chars,
};

/// Raw characters kept from the first user message
pub const RAW_SNIPPET_CHARS: usize = 200;

/// Characters shown in the summary line before the ellipsis
pub const SUMMARY_LINE_CHARS: usize = 120;

/// Compute the display summary of one round.
///
/// Deterministic: counts live in an ordered map, so the same round always
/// yields an identical summary.
pub fn summarize(round: &RoundFile) -> RoundSummary {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut assistant_reply_count = 0;

    for event in &round.events {
        *counts.entry(event.kind.as_str().to_string()).or_insert(0) += 1;
        if event.kind == EventKind::AssistantMessage {
            assistant_reply_count += 1;
        }
    }

    let first_user_message = round
        .sorted_events()
        .into_iter()
        .find(|e| e.kind == EventKind::UserMessage)
        .and_then(|e| e.content.as_deref())
        .map(|content| truncate_chars(content, RAW_SNIPPET_CHARS));

    let summary_line = first_user_message
        .as_deref()
        .map(collapse_whitespace)
        .filter(|line| !line.is_empty())
        .map(|line| ellipsize(&line, SUMMARY_LINE_CHARS))
        .unwrap_or_else(|| NO_USER_MESSAGE.to_string());

    let started = round.started_at_utc();
    let ended = round.ended_at_utc();

    let duration_ms = match (started, ended) {
        (Some(start), Some(end)) => Some((end - start).num_milliseconds()),
        _ => None,
    };

    let date_str = started.map(|start| start.format("%Y%m%d").to_string());

    RoundSummary {
        round_id: round.round_id.clone(),
        started_at: round.started_at.clone(),
        ended_at: round.ended_at.clone(),
        status: round.status.clone(),
        duration_ms,
        counts,
        event_count: round.events.len(),
        first_user_message,
        summary_line,
        assistant_reply_count,
        date_str,
    }
}
