use serde::{Deserialize, Serialize};
use std::fmt;

/// Type tag of a recorded event.
///
/// Known tags get their own variant; anything else is kept verbatim in
/// `Other` so per-type counts and fallback titles still see the raw tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventKind {
    UserMessage,
    AssistantMessage,
    FileView,
    FileWrite,
    ToolCall,
    Other(String),
}

impl EventKind {
    pub fn as_str(&self) -> &str {
        match self {
            EventKind::UserMessage => "user_message",
            EventKind::AssistantMessage => "assistant_message",
            EventKind::FileView => "file_view",
            EventKind::FileWrite => "file_write",
            EventKind::ToolCall => "tool_call",
            EventKind::Other(tag) => tag,
        }
    }

    pub fn is_file_op(&self) -> bool {
        matches!(self, EventKind::FileView | EventKind::FileWrite)
    }
}

impl From<&str> for EventKind {
    fn from(tag: &str) -> Self {
        match tag {
            "user_message" => EventKind::UserMessage,
            "assistant_message" => EventKind::AssistantMessage,
            "file_view" => EventKind::FileView,
            "file_write" => EventKind::FileWrite,
            "tool_call" => EventKind::ToolCall,
            other => EventKind::Other(other.to_string()),
        }
    }
}

impl From<String> for EventKind {
    fn from(tag: String) -> Self {
        EventKind::from(tag.as_str())
    }
}

impl From<EventKind> for String {
    fn from(kind: EventKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags() {
        assert_eq!(EventKind::from("user_message"), EventKind::UserMessage);
        assert_eq!(EventKind::from("tool_call"), EventKind::ToolCall);
        assert_eq!(EventKind::FileWrite.as_str(), "file_write");
    }

    #[test]
    fn test_unknown_tag_is_preserved() {
        let kind: EventKind = serde_json::from_str("\"plan_update\"").unwrap();
        assert_eq!(kind, EventKind::Other("plan_update".to_string()));
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"plan_update\"");
    }
}
