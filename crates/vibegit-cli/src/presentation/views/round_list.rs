use std::fmt;

use super::NO_DATA;
use crate::presentation::formatters::{NO_DATE, format_duration, paint_dim, paint_id};
use crate::presentation::view_models::RoundListViewModel;

const STATUS_WIDTH: usize = 9;

pub struct RoundListView<'a> {
    data: &'a RoundListViewModel,
    color: bool,
}

impl<'a> RoundListView<'a> {
    pub fn new(data: &'a RoundListViewModel, color: bool) -> Self {
        Self { data, color }
    }

    fn render_footer(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut parts = vec![format!("{} round(s)", self.data.rounds.len())];
        if !self.data.skipped.is_empty() {
            parts.push(format!("{} skipped", self.data.skipped.len()));
        }
        if self.data.dropped_events > 0 {
            parts.push(format!("{} malformed event(s) dropped", self.data.dropped_events));
        }
        writeln!(f, "{}", paint_dim(&parts.join(", "), self.color))
    }
}

impl<'a> fmt::Display for RoundListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.rounds.is_empty() {
            writeln!(f, "{}", NO_DATA)?;
            if !self.data.skipped.is_empty() {
                self.render_footer(f)?;
            }
            return Ok(());
        }

        let id_width = self
            .data
            .rounds
            .iter()
            .map(|r| r.round_id.chars().count())
            .max()
            .unwrap_or(0);

        for round in &self.data.rounds {
            let id = format!("{:<width$}", round.round_id, width = id_width);
            writeln!(
                f,
                "{:<8}  {}  {:<status$}  {:>7}  {:>3} events  {}",
                round.date_str.as_deref().unwrap_or(NO_DATE),
                paint_id(&id, self.color),
                round.status.as_deref().unwrap_or("-"),
                format_duration(round.duration_ms),
                round.event_count,
                round.summary_line,
                status = STATUS_WIDTH,
            )?;
        }

        writeln!(f)?;
        self.render_footer(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vibegit_engine::summarize;
    use vibegit_testing::RoundBuilder;

    fn view_model(rounds: Vec<vibegit_types::RoundSummary>) -> RoundListViewModel {
        RoundListViewModel {
            dir: "rounds".to_string(),
            rounds,
            skipped: Vec::new(),
            dropped_events: 0,
        }
    }

    #[test]
    fn test_empty_list_says_no_data() {
        let vm = view_model(Vec::new());
        assert_eq!(RoundListView::new(&vm, false).to_string(), "no data\n");
    }

    #[test]
    fn test_one_line_per_round() {
        let rounds = vec![
            summarize(&RoundBuilder::new("r-a").user("first task").build_round()),
            summarize(&RoundBuilder::new("r-longer").build_round()),
        ];
        let vm = view_model(rounds);
        let out = RoundListView::new(&vm, false).to_string();

        insta::assert_snapshot!(out, @r###"
        20240101  r-a       completed       5s    1 events  first task
        20240101  r-longer  completed       5s    0 events  (no user message)

        2 round(s)
        "###);
    }
}
