use anyhow::Result;
use vibegit_runtime::RoundCatalog;

use crate::presentation::{RoundListView, RoundListViewModel, use_color};
use crate::types::OutputFormat;

pub fn handle(catalog: &RoundCatalog, format: OutputFormat) -> Result<()> {
    let view_model = RoundListViewModel::from_catalog(catalog);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view_model)?),
        OutputFormat::Plain => print!("{}", RoundListView::new(&view_model, use_color())),
    }

    Ok(())
}
