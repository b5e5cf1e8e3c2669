use serde::Serialize;
use serde_json::{Map, Number, Value};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use vibegit_types::{EventKind, RawEvent, RoundFile, RoundSummary};

use crate::summary::summarize;

// NOTE: Ingestion contract
//
// - A document is accepted when it is an object with a non-empty `round_id`
//   and an `events` array (possibly empty). Anything else is skipped.
// - Skipping never fails the load. Skipped documents are listed in the report
//   so callers can log them; the summary set is the same either way.
// - An event entry is kept when it has a string `type` and a non-negative
//   integer `seq`; otherwise it is dropped from its round. Optional fields of
//   the wrong shape read as absent.
// - Output is ordered by start timestamp (stable). Unparseable starts go last.

/// One round document as handed to ingestion, with an optional origin label
/// (usually the file path) used in reports.
///
/// `value` holds the reason up front when the source never produced JSON.
#[derive(Debug, Clone)]
pub struct RoundDocument {
    pub source: Option<String>,
    pub value: Result<Value, SkipReason>,
}

impl RoundDocument {
    pub fn new(source: impl Into<String>, value: Value) -> Self {
        Self {
            source: Some(source.into()),
            value: Ok(value),
        }
    }

    pub fn unparseable(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            value: Err(SkipReason::InvalidJson),
        }
    }

    pub fn unreadable(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            value: Err(SkipReason::Unreadable),
        }
    }
}

impl From<Value> for RoundDocument {
    fn from(value: Value) -> Self {
        Self {
            source: None,
            value: Ok(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Source could not be read
    Unreadable,
    /// Source is not valid JSON
    InvalidJson,
    /// Document is not a JSON object
    NotAnObject,
    /// `round_id` is absent, not a string, or blank
    MissingRoundId,
    /// `events` is absent or not an array
    EventsNotArray,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Unreadable => write!(f, "could not be read"),
            SkipReason::InvalidJson => write!(f, "not valid JSON"),
            SkipReason::NotAnObject => write!(f, "document is not a JSON object"),
            SkipReason::MissingRoundId => write!(f, "missing or empty round_id"),
            SkipReason::EventsNotArray => write!(f, "events is not an array"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skipped {
    /// Position of the document in the ingestion input
    pub index: usize,
    pub source: Option<String>,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    pub accepted: usize,
    pub skipped: Vec<Skipped>,
    /// Event entries dropped across all accepted rounds
    pub dropped_events: usize,
    /// `round_id`s carried by more than one accepted document, in the order
    /// the first repeat was seen. Every copy is kept.
    pub duplicate_ids: Vec<String>,
}

impl IngestReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.dropped_events == 0 && self.duplicate_ids.is_empty()
    }
}

/// Result of ingesting a document set.
///
/// `rounds[i]` is the round `summaries[i]` was computed from.
#[derive(Debug, Clone, Default)]
pub struct Ingested {
    pub rounds: Vec<RoundFile>,
    pub summaries: Vec<RoundSummary>,
    pub report: IngestReport,
}

impl Ingested {
    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    pub fn find(&self, round_id: &str) -> Option<(&RoundFile, &RoundSummary)> {
        self.rounds
            .iter()
            .zip(&self.summaries)
            .find(|(round, _)| round.round_id == round_id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRound {
    pub round: RoundFile,
    pub dropped_events: usize,
}

/// Validate and read a single round document
pub fn parse_round(value: &Value) -> Result<ParsedRound, SkipReason> {
    let obj = value.as_object().ok_or(SkipReason::NotAnObject)?;

    let round_id = obj
        .get("round_id")
        .and_then(Value::as_str)
        .filter(|id| !id.trim().is_empty())
        .ok_or(SkipReason::MissingRoundId)?;

    let raw_events = obj
        .get("events")
        .and_then(Value::as_array)
        .ok_or(SkipReason::EventsNotArray)?;

    let mut events = Vec::with_capacity(raw_events.len());
    let mut dropped_events = 0;
    for raw in raw_events {
        match read_event(raw) {
            Some(event) => events.push(event),
            None => dropped_events += 1,
        }
    }

    let round = RoundFile {
        schema_version: scalar_string(obj, &["schema_version", "schema"]),
        round_id: round_id.to_string(),
        session_id: scalar_string(obj, &["session_id"]),
        started_at: scalar_string(obj, &["started_at"]).unwrap_or_default(),
        ended_at: scalar_string(obj, &["ended_at"]).unwrap_or_default(),
        status: scalar_string(obj, &["status"]),
        events,
        stats: numeric_map(obj.get("stats")),
    };

    Ok(ParsedRound {
        round,
        dropped_events,
    })
}

/// Ingest a document set into summaries ordered by start time
pub fn ingest<I, D>(documents: I) -> Ingested
where
    I: IntoIterator<Item = D>,
    D: Into<RoundDocument>,
{
    let mut report = IngestReport::default();
    let mut rounds = Vec::new();
    let mut seen_ids = HashSet::new();

    for (index, doc) in documents.into_iter().enumerate() {
        let doc = doc.into();
        let parsed = match &doc.value {
            Ok(value) => parse_round(value),
            Err(reason) => Err(*reason),
        };
        match parsed {
            Ok(parsed) => {
                report.accepted += 1;
                report.dropped_events += parsed.dropped_events;
                let round_id = &parsed.round.round_id;
                if !seen_ids.insert(round_id.clone())
                    && !report.duplicate_ids.contains(round_id)
                {
                    report.duplicate_ids.push(round_id.clone());
                }
                rounds.push(parsed.round);
            }
            Err(reason) => report.skipped.push(Skipped {
                index,
                source: doc.source,
                reason,
            }),
        }
    }

    let mut pairs: Vec<(RoundFile, RoundSummary)> = rounds
        .into_iter()
        .map(|round| {
            let summary = summarize(&round);
            (round, summary)
        })
        .collect();

    // sort_by is stable: equal starts keep encounter order
    pairs.sort_by(|(a, _), (b, _)| compare_start(a, b));

    let (rounds, summaries) = pairs.into_iter().unzip();
    Ingested {
        rounds,
        summaries,
        report,
    }
}

fn compare_start(a: &RoundFile, b: &RoundFile) -> Ordering {
    match (a.started_at_utc(), b.started_at_utc()) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Lenient read of one event entry; `None` when `seq` or `type` is unusable
fn read_event(value: &Value) -> Option<RawEvent> {
    let obj = value.as_object()?;
    let seq = match obj.get("seq")? {
        Value::Number(n) => n.as_u64()?,
        Value::String(s) => s.trim().parse().ok()?,
        _ => return None,
    };
    let kind = obj.get("type")?.as_str().map(EventKind::from)?;

    Some(RawEvent {
        seq,
        ts: scalar_string(obj, &["ts", "timestamp"]).unwrap_or_default(),
        kind,
        content: scalar_string(obj, &["content"]),
        path: scalar_string(obj, &["path"]),
        tool: scalar_string(obj, &["tool", "tool_name"]),
        args_summary: scalar_string(obj, &["args_summary"]),
        meta: ["meta", "metadata"]
            .iter()
            .filter_map(|key| obj.get(*key))
            .find_map(|value| value.as_object().cloned()),
    })
}

fn scalar_string(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .find_map(|value| match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
}

fn numeric_map(value: Option<&Value>) -> Option<BTreeMap<String, Number>> {
    let obj = value?.as_object()?;
    let stats: BTreeMap<String, Number> = obj
        .iter()
        .filter_map(|(key, value)| match value {
            Value::Number(n) => Some((key.clone(), n.clone())),
            _ => None,
        })
        .collect();
    Some(stats)
}
