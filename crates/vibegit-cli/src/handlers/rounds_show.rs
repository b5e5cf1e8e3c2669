use anyhow::{Result, bail};
use vibegit_engine::TimelineState;
use vibegit_runtime::RoundCatalog;

use crate::presentation::{TimelineViewModel, render_timeline, use_color};
use crate::types::OutputFormat;

pub fn handle(
    catalog: &RoundCatalog,
    open: &[String],
    all: bool,
    format: OutputFormat,
) -> Result<()> {
    let mut state = TimelineState::new();

    if all {
        state.expand_all(catalog.summaries().iter().map(|s| s.round_id.clone()));
    }
    for round_id in open {
        if catalog.find(round_id).is_none() {
            bail!("Round not found: {}", round_id);
        }
        state.open(round_id.clone());
    }

    let view_model = TimelineViewModel::from_catalog(catalog, &state);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view_model)?),
        OutputFormat::Plain => {
            print!("{}", render_timeline(&view_model, &mut state, use_color()))
        }
    }

    Ok(())
}
