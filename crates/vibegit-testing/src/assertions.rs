//! Assertions over `--format json` output of the rounds commands.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert that JSON output lists the expected number of rounds.
pub fn assert_round_count(json: &Value, expected: usize) -> Result<()> {
    let rounds = json["rounds"]
        .as_array()
        .context("Expected 'rounds' array in JSON")?;

    if rounds.len() != expected {
        anyhow::bail!("Expected {} rounds, got {}", expected, rounds.len());
    }

    Ok(())
}

/// Round ids in output order.
pub fn round_ids(json: &Value) -> Result<Vec<String>> {
    let rounds = json["rounds"]
        .as_array()
        .context("Expected 'rounds' array in JSON")?;

    rounds
        .iter()
        .enumerate()
        .map(|(i, round)| {
            round["roundId"]
                .as_str()
                .map(str::to_string)
                .with_context(|| format!("Round {} missing roundId", i))
        })
        .collect()
}

/// Assert that every round's per-type counts add up to its event count.
pub fn assert_counts_consistent(json: &Value) -> Result<()> {
    let rounds = json["rounds"]
        .as_array()
        .context("Expected 'rounds' array in JSON")?;

    for (i, round) in rounds.iter().enumerate() {
        let counts = round["counts"]
            .as_object()
            .with_context(|| format!("Round {} missing counts", i))?;
        let sum: u64 = counts.values().filter_map(Value::as_u64).sum();
        let total = round["eventCount"]
            .as_u64()
            .with_context(|| format!("Round {} missing eventCount", i))?;

        if sum != total {
            anyhow::bail!("Round {}: counts sum to {} but eventCount is {}", i, sum, total);
        }
    }

    Ok(())
}
