//! Fixtures for round documents.
//!
//! `RoundBuilder` produces raw JSON documents (what ingestion actually reads),
//! so tests can also build deliberately malformed rounds.

use anyhow::Result;
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use vibegit_types::RoundFile;

/// Names of the bundled samples, in file-name order.
pub const SAMPLE_NAMES: [&str; 5] = [
    "round_bugfix.json",
    "round_docs.json",
    "round_missing_id.json",
    "round_refactor.json",
    "round_tools.json",
];

/// Number of bundled samples that ingestion accepts
pub const VALID_SAMPLE_COUNT: usize = 4;

/// Builder for a single round document.
#[derive(Debug, Clone)]
pub struct RoundBuilder {
    doc: Value,
    next_seq: u64,
}

impl RoundBuilder {
    pub fn new(round_id: &str) -> Self {
        Self {
            doc: json!({
                "schema_version": "round/v1",
                "round_id": round_id,
                "session_id": "session-test",
                "started_at": "2024-01-01T00:00:00Z",
                "ended_at": "2024-01-01T00:00:05Z",
                "status": "completed",
                "events": []
            }),
            next_seq: 1,
        }
    }

    pub fn window(mut self, started_at: &str, ended_at: &str) -> Self {
        self.doc["started_at"] = json!(started_at);
        self.doc["ended_at"] = json!(ended_at);
        self
    }

    /// Append an event with the next sequence number
    pub fn event(mut self, kind: &str, content: Option<&str>) -> Self {
        let seq = self.next_seq;
        let mut event = json!({
            "seq": seq,
            "ts": format!("2024-01-01T00:00:{:02}Z", seq.min(59)),
            "type": kind,
        });
        if let Some(content) = content {
            event["content"] = json!(content);
        }
        self.push(event)
    }

    pub fn user(self, content: &str) -> Self {
        self.event("user_message", Some(content))
    }

    pub fn assistant(self, content: &str) -> Self {
        self.event("assistant_message", Some(content))
    }

    pub fn tool(self, name: &str, args_summary: &str) -> Self {
        let seq = self.next_seq;
        self.push(json!({
            "seq": seq,
            "ts": format!("2024-01-01T00:00:{:02}Z", seq.min(59)),
            "type": "tool_call",
            "tool": name,
            "args_summary": args_summary,
        }))
    }

    /// Append an arbitrary event value as-is (may be malformed)
    pub fn raw_event(mut self, event: Value) -> Self {
        if let Some(events) = self.doc["events"].as_array_mut() {
            events.push(event);
        }
        self
    }

    /// Reverse the event array so events are out of `seq` order
    pub fn shuffled(mut self) -> Self {
        if let Some(events) = self.doc["events"].as_array_mut() {
            events.reverse();
        }
        self
    }

    pub fn without(mut self, field: &str) -> Self {
        if let Some(obj) = self.doc.as_object_mut() {
            obj.remove(field);
        }
        self
    }

    pub fn set(mut self, field: &str, value: Value) -> Self {
        self.doc[field] = value;
        self
    }

    pub fn build(self) -> Value {
        self.doc
    }

    /// Strictly typed round (panics on malformed documents)
    pub fn build_round(self) -> RoundFile {
        serde_json::from_value(self.doc).expect("builder produced an invalid round")
    }

    fn push(mut self, event: Value) -> Self {
        self.next_seq += 1;
        if let Some(events) = self.doc["events"].as_array_mut() {
            events.push(event);
        }
        self
    }
}

/// Sample file manager for the bundled round documents.
pub struct SampleFiles {
    samples_dir: PathBuf,
}

impl Default for SampleFiles {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleFiles {
    /// Samples live in `crates/vibegit-testing/samples/`.
    pub fn new() -> Self {
        let samples_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples");
        Self { samples_dir }
    }

    pub fn dir(&self) -> &Path {
        &self.samples_dir
    }

    pub fn path(&self, sample_name: &str) -> PathBuf {
        self.samples_dir.join(sample_name)
    }

    pub fn load(&self, sample_name: &str) -> Result<Value> {
        let content = fs::read_to_string(self.path(sample_name))?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn load_all(&self) -> Result<Vec<Value>> {
        SAMPLE_NAMES.iter().map(|name| self.load(name)).collect()
    }

    /// Copy a sample file to a destination.
    pub fn copy_to(&self, sample_name: &str, dest: &Path) -> Result<()> {
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(self.path(sample_name), dest)?;
        Ok(())
    }

    /// Copy every bundled sample into `dir`.
    pub fn copy_all_to(&self, dir: &Path) -> Result<()> {
        for name in SAMPLE_NAMES {
            self.copy_to(name, &dir.join(name))?;
        }
        Ok(())
    }
}
