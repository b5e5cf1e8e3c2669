use std::fmt::Write;

use vibegit_engine::TimelineState;

use super::NO_DATA;
use crate::presentation::formatters::{
    NO_DATE, format_duration, paint_dim, paint_id, paint_role, preview,
};
use crate::presentation::view_models::{TimelineRoundViewModel, TimelineViewModel};

const DETAIL_PREVIEW_CHARS: usize = 100;
const TITLE_WIDTH: usize = 12;

const MARKER: char = '●';
const AXIS: char = '│';

/// One rendered line. Round headers are the axis markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineRow {
    pub marker: bool,
    pub text: String,
}

/// Lay out rows without the gutter
pub fn timeline_rows(view_model: &TimelineViewModel, color: bool) -> Vec<TimelineRow> {
    let mut rows = Vec::new();

    for round in &view_model.rounds {
        rows.push(TimelineRow {
            marker: true,
            text: header(round, color),
        });

        let Some(items) = &round.items else {
            continue;
        };
        if items.is_empty() {
            rows.push(TimelineRow {
                marker: false,
                text: format!("    {}", paint_dim("(no events)", color)),
            });
        }
        for item in items {
            let title = format!("{:<width$}", item.title, width = TITLE_WIDTH);
            let mut text = format!(
                "    #{:<4}{}",
                item.seq,
                paint_role(&title, item.role, color)
            );
            if let Some(detail) = &item.detail {
                text.push(' ');
                text.push_str(&preview(detail, DETAIL_PREVIEW_CHARS));
            }
            rows.push(TimelineRow {
                marker: false,
                text: text.trim_end().to_string(),
            });
        }
    }

    rows
}

/// Render the timeline, measuring marker rows and updating the axis in `state`
pub fn render_timeline(
    view_model: &TimelineViewModel,
    state: &mut TimelineState,
    color: bool,
) -> String {
    if view_model.is_empty() {
        state.relayout(&[]);
        return format!("{}\n", NO_DATA);
    }

    let rows = timeline_rows(view_model, color);
    let markers: Vec<f64> = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| row.marker)
        .map(|(offset, _)| offset as f64)
        .collect();
    state.relayout(&markers);
    let layout = state.layout();

    let mut out = String::new();
    for (offset, row) in rows.iter().enumerate() {
        let gutter = if row.marker {
            MARKER
        } else if layout.is_some_and(|axis| axis.covers(offset as f64)) {
            AXIS
        } else {
            ' '
        };
        let _ = writeln!(out, "{} {}", gutter, row.text);
    }
    out
}

fn header(round: &TimelineRoundViewModel, color: bool) -> String {
    let summary = &round.summary;
    let arrow = if round.open { '▾' } else { '▸' };
    format!(
        "{} {}  {}  {}  {} events  {}",
        arrow,
        paint_id(&summary.round_id, color),
        summary.date_str.as_deref().unwrap_or(NO_DATE),
        format_duration(summary.duration_ms),
        summary.event_count,
        summary.summary_line,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use vibegit_engine::{AxisLayout, summarize};
    use vibegit_testing::RoundBuilder;
    use vibegit_types::RoundFile;

    fn rounds() -> Vec<RoundFile> {
        vec![
            RoundBuilder::new("r-1")
                .user("fix the parser")
                .tool("cargo", "test")
                .assistant("done")
                .shuffled()
                .build_round(),
            RoundBuilder::new("r-2").user("second").build_round(),
            RoundBuilder::new("r-3").build_round(),
        ]
    }

    fn view_model(rounds: &[RoundFile], state: &TimelineState) -> TimelineViewModel {
        let summaries: Vec<_> = rounds.iter().map(summarize).collect();
        TimelineViewModel::build(rounds, &summaries, state)
    }

    #[test]
    fn test_collapsed_rounds_are_all_markers() {
        let rounds = rounds();
        let mut state = TimelineState::new();
        let out = render_timeline(&view_model(&rounds, &state), &mut state, false);

        assert_eq!(out.lines().count(), 3);
        assert!(out.lines().all(|line| line.starts_with('●')));
        assert_eq!(
            state.layout(),
            Some(AxisLayout {
                start: 0.0,
                span: 2.0
            })
        );
    }

    #[test]
    fn test_open_round_lists_items_by_seq_inside_axis() {
        let rounds = rounds();
        let mut state = TimelineState::new();
        state.open("r-1");
        let out = render_timeline(&view_model(&rounds, &state), &mut state, false);

        insta::assert_snapshot!(out, @r###"
        ● ▾ r-1  20240101  5s  3 events  fix the parser
        │     #1   User         fix the parser
        │     #2   cargo        test
        │     #3   Assistant    done
        ● ▸ r-2  20240101  5s  1 events  second
        ● ▸ r-3  20240101  5s  0 events  (no user message)
        "###);
        assert_eq!(
            state.layout(),
            Some(AxisLayout {
                start: 0.0,
                span: 5.0
            })
        );
    }

    #[test]
    fn test_relayout_converges_after_toggle() {
        let rounds = rounds();
        let mut state = TimelineState::new();
        render_timeline(&view_model(&rounds, &state), &mut state, false);
        let collapsed = state.layout();

        assert!(state.toggle("r-2"));
        render_timeline(&view_model(&rounds, &state), &mut state, false);
        assert_ne!(state.layout(), collapsed);

        // same state, same markers: nothing moves
        let rows = timeline_rows(&view_model(&rounds, &state), false);
        let markers: Vec<f64> = rows
            .iter()
            .enumerate()
            .filter(|(_, r)| r.marker)
            .map(|(i, _)| i as f64)
            .collect();
        assert!(!state.relayout(&markers));
    }

    #[test]
    fn test_open_round_without_events_and_last_marker_ends_axis() {
        let rounds = rounds();
        let mut state = TimelineState::new();
        state.open("r-3");
        let out = render_timeline(&view_model(&rounds, &state), &mut state, false);

        let last = out.lines().last().unwrap();
        // below the last marker the gutter is blank
        assert_eq!(last, "      (no events)");
    }

    #[test]
    fn test_rounds_sharing_an_id_keep_their_own_items() {
        let rounds = vec![
            RoundBuilder::new("dup").user("first copy").build_round(),
            RoundBuilder::new("dup")
                .user("second copy")
                .assistant("reply")
                .build_round(),
        ];
        let mut state = TimelineState::new();
        state.open("dup");

        let vm = view_model(&rounds, &state);
        let counts: Vec<usize> = vm
            .rounds
            .iter()
            .map(|r| r.items.as_ref().map_or(0, Vec::len))
            .collect();
        assert_eq!(counts, vec![1, 2]);

        let out = render_timeline(&vm, &mut state, false);
        assert!(out.contains("#1   User         first copy"));
        assert!(out.contains("#1   User         second copy"));
    }

    #[test]
    fn test_empty_timeline() {
        let mut state = TimelineState::new();
        let vm = TimelineViewModel { rounds: Vec::new() };
        assert_eq!(render_timeline(&vm, &mut state, false), "no data\n");
        assert_eq!(state.layout(), None);
    }
}
