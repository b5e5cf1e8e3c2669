use anyhow::Result;
use chrono::Utc;
use vibegit_types::HealthResponse;

use crate::types::OutputFormat;

/// Same payload `GET /health` returns, computed locally
pub fn handle(format: OutputFormat) -> Result<()> {
    let payload = HealthResponse::ok_at(Utc::now());

    match format {
        OutputFormat::Plain => println!("{}", serde_json::to_string_pretty(&payload)?),
        OutputFormat::Json => println!("{}", serde_json::to_string(&payload)?),
    }

    Ok(())
}
