use serde::Serialize;
use vibegit_engine::{Skipped, TimelineItem, TimelineState, classify_round, group_by_round};
use vibegit_runtime::RoundCatalog;
use vibegit_types::{RoundFile, RoundSummary};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundListViewModel {
    pub dir: String,
    pub rounds: Vec<RoundSummary>,
    pub skipped: Vec<Skipped>,
    pub dropped_events: usize,
}

impl RoundListViewModel {
    pub fn from_catalog(catalog: &RoundCatalog) -> Self {
        Self {
            dir: catalog.dir().display().to_string(),
            rounds: catalog.summaries().to_vec(),
            skipped: catalog.report().skipped.clone(),
            dropped_events: catalog.report().dropped_events,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineRoundViewModel {
    #[serde(flatten)]
    pub summary: RoundSummary,
    pub open: bool,
    /// Present only for expanded rounds, ordered by `seq`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<TimelineItem>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimelineViewModel {
    pub rounds: Vec<TimelineRoundViewModel>,
}

impl TimelineViewModel {
    pub fn from_catalog(catalog: &RoundCatalog, state: &TimelineState) -> Self {
        Self::build(catalog.rounds(), catalog.summaries(), state)
    }

    /// Rounds in the given order with the items of open rounds attached.
    ///
    /// `rounds[i]` must be the round `summaries[i]` describes. Items are built
    /// per round, so two rounds sharing an id never see each other's events.
    pub fn build(rounds: &[RoundFile], summaries: &[RoundSummary], state: &TimelineState) -> Self {
        let rounds = rounds
            .iter()
            .zip(summaries)
            .map(|(round, summary)| {
                let open = state.is_open(&summary.round_id);
                let items = open.then(|| {
                    group_by_round(classify_round(round))
                        .into_iter()
                        .next()
                        .map(|group| group.items)
                        .unwrap_or_default()
                });
                TimelineRoundViewModel {
                    summary: summary.clone(),
                    open,
                    items,
                }
            })
            .collect();

        Self { rounds }
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
}
