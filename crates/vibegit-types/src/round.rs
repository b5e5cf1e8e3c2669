use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::collections::BTreeMap;

use crate::event::RawEvent;
use crate::util::parse_timestamp;

/// One recorded session round as stored on disk.
///
/// Events are kept in file order; they are not guaranteed to be sorted by
/// `seq`, use [`RoundFile::sorted_events`] before display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundFile {
    #[serde(default, alias = "schema", skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,

    pub round_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    #[serde(default)]
    pub started_at: String,

    #[serde(default)]
    pub ended_at: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default)]
    pub events: Vec<RawEvent>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<BTreeMap<String, Number>>,
}

impl RoundFile {
    pub fn new(
        round_id: impl Into<String>,
        started_at: impl Into<String>,
        ended_at: impl Into<String>,
    ) -> Self {
        Self {
            schema_version: None,
            round_id: round_id.into(),
            session_id: None,
            started_at: started_at.into(),
            ended_at: ended_at.into(),
            status: None,
            events: Vec::new(),
            stats: None,
        }
    }

    /// Strict parse of a single round document
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn started_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.started_at)
    }

    pub fn ended_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.ended_at)
    }

    /// Events ordered by sequence number (stable for duplicate `seq`)
    pub fn sorted_events(&self) -> Vec<&RawEvent> {
        let mut events: Vec<&RawEvent> = self.events.iter().collect();
        events.sort_by_key(|e| e.seq);
        events
    }
}
