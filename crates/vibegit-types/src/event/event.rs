use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::kind::EventKind;

/// One recorded interaction step within a round.
///
/// Only `seq` and `type` are required. Every other field is optional and an
/// absent value simply means "not present" when rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEvent {
    /// Sequence number, unique and monotonic within a round
    pub seq: u64,

    /// ISO 8601 timestamp, kept as recorded (parsed on read)
    #[serde(default, alias = "timestamp")]
    pub ts: String,

    #[serde(rename = "type")]
    pub kind: EventKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// File path for file_view / file_write events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default, alias = "tool_name", skip_serializing_if = "Option::is_none")]
    pub tool: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args_summary: Option<String>,

    /// Free-form recorder metadata
    #[serde(default, alias = "metadata", skip_serializing_if = "Option::is_none")]
    pub meta: Option<Map<String, Value>>,
}

impl RawEvent {
    pub fn new(seq: u64, ts: impl Into<String>, kind: EventKind) -> Self {
        Self {
            seq,
            ts: ts.into(),
            kind,
            content: None,
            path: None,
            tool: None,
            args_summary: None,
            meta: None,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_tool(mut self, tool: impl Into<String>, args_summary: Option<String>) -> Self {
        self.tool = Some(tool.into());
        self.args_summary = args_summary;
        self
    }

    /// Content text, treating an empty string as absent
    pub fn text(&self) -> Option<&str> {
        self.content.as_deref().filter(|c| !c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_event() {
        let json = r#"{"seq": 3, "type": "tool_call", "tool_name": "grep"}"#;
        let event: RawEvent = serde_json::from_str(json).unwrap();

        assert_eq!(event.seq, 3);
        assert_eq!(event.kind, EventKind::ToolCall);
        assert_eq!(event.tool.as_deref(), Some("grep"));
        assert_eq!(event.ts, "");
        assert!(event.content.is_none());
        assert!(event.meta.is_none());
    }

    #[test]
    fn test_serialization_skips_absent_fields() {
        let event = RawEvent::new(1, "2024-01-01T00:00:00Z", EventKind::UserMessage)
            .with_content("hi");

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], "user_message");
        assert_eq!(value["content"], "hi");
        assert!(value.get("path").is_none());
        assert!(value.get("meta").is_none());
    }

    #[test]
    fn test_empty_content_is_not_text() {
        let event = RawEvent::new(1, "", EventKind::AssistantMessage).with_content("");
        assert!(event.text().is_none());
    }
}
