use std::collections::BTreeSet;

use crate::layout::{AxisLayout, axis_layout};

/// Per-round open/closed flags plus the last measured axis.
///
/// Every round is independent: opening or closing is idempotent and has no
/// transition constraints. After any change the owner re-measures marker
/// positions and calls [`TimelineState::relayout`]; the same applies on
/// container resize.
#[derive(Debug, Clone, Default)]
pub struct TimelineState {
    open: BTreeSet<String>,
    layout: Option<AxisLayout>,
}

impl TimelineState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, round_id: &str) -> bool {
        self.open.contains(round_id)
    }

    pub fn open(&mut self, round_id: impl Into<String>) {
        self.open.insert(round_id.into());
    }

    pub fn close(&mut self, round_id: &str) {
        self.open.remove(round_id);
    }

    /// Flip one round, returning its new state
    pub fn toggle(&mut self, round_id: &str) -> bool {
        if self.open.remove(round_id) {
            false
        } else {
            self.open.insert(round_id.to_string());
            true
        }
    }

    pub fn expand_all<I, S>(&mut self, round_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.open.extend(round_ids.into_iter().map(Into::into));
    }

    pub fn collapse_all(&mut self) {
        self.open.clear();
    }

    pub fn open_rounds(&self) -> impl Iterator<Item = &str> {
        self.open.iter().map(String::as_str)
    }

    pub fn layout(&self) -> Option<AxisLayout> {
        self.layout
    }

    /// Recompute the axis from freshly measured marker offsets.
    ///
    /// Returns whether the stored layout changed; repeated calls with the same
    /// markers converge and report `false`.
    pub fn relayout(&mut self, markers: &[f64]) -> bool {
        let next = axis_layout(markers);
        if next == self.layout {
            return false;
        }
        self.layout = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close_are_idempotent() {
        let mut state = TimelineState::new();
        state.open("r-1");
        state.open("r-1");
        assert!(state.is_open("r-1"));
        assert_eq!(state.open_rounds().count(), 1);

        state.close("r-1");
        state.close("r-1");
        assert!(!state.is_open("r-1"));
    }

    #[test]
    fn test_toggle_is_per_round() {
        let mut state = TimelineState::new();
        assert!(state.toggle("a"));
        assert!(state.toggle("b"));
        assert!(!state.toggle("a"));
        assert!(!state.is_open("a"));
        assert!(state.is_open("b"));
    }

    #[test]
    fn test_expand_and_collapse_all() {
        let mut state = TimelineState::new();
        state.expand_all(["a", "b", "c"]);
        assert_eq!(state.open_rounds().collect::<Vec<_>>(), vec!["a", "b", "c"]);

        state.collapse_all();
        assert_eq!(state.open_rounds().count(), 0);
    }

    #[test]
    fn test_relayout_converges() {
        let mut state = TimelineState::new();
        assert!(state.layout().is_none());

        assert!(state.relayout(&[0.0, 3.0, 9.0]));
        assert!(!state.relayout(&[0.0, 3.0, 9.0]));
        assert_eq!(state.layout().unwrap().span, 9.0);

        // resize moved the last marker
        assert!(state.relayout(&[0.0, 3.0, 12.0]));
        assert_eq!(state.layout().unwrap().span, 12.0);

        assert!(state.relayout(&[]));
        assert!(state.layout().is_none());
    }
}
