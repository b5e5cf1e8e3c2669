use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Placeholder label for rounds without any user message
pub const NO_USER_MESSAGE: &str = "(no user message)";

/// Display-oriented aggregate of one round, computed once at load time.
///
/// Serialized in camelCase since it feeds front ends directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSummary {
    pub round_id: String,
    pub started_at: String,
    pub ended_at: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// `ended_at - started_at` in milliseconds. Negative values are kept;
    /// `None` when either timestamp is unparseable.
    pub duration_ms: Option<i64>,

    /// Event count per type tag
    pub counts: BTreeMap<String, usize>,

    pub event_count: usize,

    /// First user message, at most 200 raw characters
    pub first_user_message: Option<String>,

    /// Whitespace-collapsed label, at most 120 characters plus an ellipsis
    pub summary_line: String,

    pub assistant_reply_count: usize,

    /// Start date as `YYYYMMDD` (UTC)
    pub date_str: Option<String>,
}

impl RoundSummary {
    pub fn count_of(&self, tag: &str) -> usize {
        self.counts.get(tag).copied().unwrap_or(0)
    }

    pub fn has_user_message(&self) -> bool {
        self.first_user_message.is_some()
    }
}
