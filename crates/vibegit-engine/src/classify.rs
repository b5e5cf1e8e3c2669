use serde::Serialize;
use std::fmt;
use vibegit_types::{EventKind, RawEvent, RoundFile};

/// Display role of a timeline entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
    File,
    Tool,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
            Role::File => "file",
            Role::Tool => "tool",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classified {
    pub role: Role,
    pub title: String,
    pub detail: Option<String>,
}

/// Map an event to its role and title/detail pair.
///
/// Total over the tag domain: unknown tags become `System` entries titled
/// with the raw tag and carrying the raw content.
pub fn classify(event: &RawEvent) -> Classified {
    let content = event.content.clone();

    let (role, title, detail) = match &event.kind {
        EventKind::UserMessage => (Role::User, "User".to_string(), content),
        EventKind::AssistantMessage => (Role::Assistant, "Assistant".to_string(), content),
        EventKind::FileView => (
            Role::File,
            "Viewed file".to_string(),
            event.path.clone().or(content),
        ),
        EventKind::FileWrite => (
            Role::File,
            "Wrote file".to_string(),
            event.path.clone().or(content),
        ),
        EventKind::ToolCall => (
            Role::Tool,
            event
                .tool
                .clone()
                .unwrap_or_else(|| EventKind::ToolCall.as_str().to_string()),
            event.args_summary.clone().or(content),
        ),
        EventKind::Other(tag) => (Role::System, tag.clone(), content),
    };

    Classified {
        role,
        title,
        detail,
    }
}

/// A classified event tagged with its round, ready for grouping
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineItem {
    pub round_id: String,
    pub seq: u64,
    pub ts: String,
    pub role: Role,
    pub title: String,
    pub detail: Option<String>,
}

/// Classify every event of a round, in file order
pub fn classify_round(round: &RoundFile) -> Vec<TimelineItem> {
    round
        .events
        .iter()
        .map(|event| {
            let Classified {
                role,
                title,
                detail,
            } = classify(event);
            TimelineItem {
                round_id: round.round_id.clone(),
                seq: event.seq,
                ts: event.ts.clone(),
                role,
                title,
                detail,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let user = RawEvent::new(1, "", EventKind::UserMessage).with_content("hi");
        let classified = classify(&user);
        assert_eq!(classified.role, Role::User);
        assert_eq!(classified.title, "User");
        assert_eq!(classified.detail.as_deref(), Some("hi"));

        let reply = RawEvent::new(2, "", EventKind::AssistantMessage).with_content("hello");
        assert_eq!(classify(&reply).role, Role::Assistant);
    }

    #[test]
    fn test_file_events_prefer_path() {
        let view = RawEvent::new(1, "", EventKind::FileView)
            .with_path("src/main.rs")
            .with_content("fn main() {}");
        let classified = classify(&view);
        assert_eq!(classified.role, Role::File);
        assert_eq!(classified.title, "Viewed file");
        assert_eq!(classified.detail.as_deref(), Some("src/main.rs"));

        let write = RawEvent::new(2, "", EventKind::FileWrite).with_content("patched");
        let classified = classify(&write);
        assert_eq!(classified.title, "Wrote file");
        assert_eq!(classified.detail.as_deref(), Some("patched"));
    }

    #[test]
    fn test_tool_call() {
        let call = RawEvent::new(1, "", EventKind::ToolCall)
            .with_tool("grep", Some("pattern=TODO".to_string()));
        let classified = classify(&call);
        assert_eq!(classified.role, Role::Tool);
        assert_eq!(classified.title, "grep");
        assert_eq!(classified.detail.as_deref(), Some("pattern=TODO"));

        let anonymous = RawEvent::new(2, "", EventKind::ToolCall);
        let classified = classify(&anonymous);
        assert_eq!(classified.title, "tool_call");
        assert_eq!(classified.detail, None);
    }

    #[test]
    fn test_unknown_tag_falls_back_to_system() {
        let event =
            RawEvent::new(1, "", EventKind::from("plan_update")).with_content("step 2 of 3");
        let classified = classify(&event);
        assert_eq!(classified.role, Role::System);
        assert_eq!(classified.title, "plan_update");
        assert_eq!(classified.detail.as_deref(), Some("step 2 of 3"));
    }

    #[test]
    fn test_classify_round_tags_items() {
        let mut round = RoundFile::new("r-9", "", "");
        round.events = vec![
            RawEvent::new(2, "t2", EventKind::AssistantMessage),
            RawEvent::new(1, "t1", EventKind::UserMessage),
        ];

        let items = classify_round(&round);
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|item| item.round_id == "r-9"));
        assert_eq!(items[0].seq, 2);
        assert_eq!(items[1].ts, "t1");
    }
}
