use serde::Serialize;
use std::collections::HashMap;

use crate::classify::TimelineItem;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundGroup {
    pub round_id: String,
    pub items: Vec<TimelineItem>,
}

/// Partition items by round id.
///
/// Groups appear in first-encountered order; items within a group are
/// sorted by `seq` (stable, so duplicate sequence numbers keep input order).
pub fn group_by_round<I>(items: I) -> Vec<RoundGroup>
where
    I: IntoIterator<Item = TimelineItem>,
{
    let mut groups: Vec<RoundGroup> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for item in items {
        let pos = match positions.get(&item.round_id) {
            Some(pos) => *pos,
            None => {
                positions.insert(item.round_id.clone(), groups.len());
                groups.push(RoundGroup {
                    round_id: item.round_id.clone(),
                    items: Vec::new(),
                });
                groups.len() - 1
            }
        };
        groups[pos].items.push(item);
    }

    for group in &mut groups {
        group.items.sort_by_key(|item| item.seq);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Role;

    fn item(round: &str, seq: u64) -> TimelineItem {
        TimelineItem {
            round_id: round.to_string(),
            seq,
            ts: format!("2024-01-01T00:00:{:02}Z", seq),
            role: Role::System,
            title: "note".to_string(),
            detail: None,
        }
    }

    #[test]
    fn test_groups_keep_first_seen_order() {
        let groups = group_by_round(vec![
            item("b", 2),
            item("a", 1),
            item("b", 1),
            item("c", 1),
            item("a", 3),
        ]);

        let ids: Vec<&str> = groups.iter().map(|g| g.round_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);

        let b_seqs: Vec<u64> = groups[0].items.iter().map(|i| i.seq).collect();
        assert_eq!(b_seqs, vec![1, 2]);
    }

    #[test]
    fn test_empty_input() {
        assert!(group_by_round(Vec::new()).is_empty());
    }
}
