//! One-shot move suggestion for a board snapshot.

use anyhow::{Context, Result};
use noughts_engine::{Board, MoveSelector};
use tracing::instrument;

/// Returns the computer's choice for `snapshot` as text or JSON.
///
/// Text output is `<index> <label> (<rule>)`; JSON output is an object with
/// `position`, `index` and `rule`.
#[instrument]
pub fn suggest(snapshot: &str, seed: Option<u64>, json: bool) -> Result<String> {
    let board: Board = snapshot
        .parse()
        .with_context(|| format!("Invalid board {:?}", snapshot))?;
    let mut selector = seed.map(MoveSelector::seeded).unwrap_or_default();
    let choice = selector.select(&board)?;

    if json {
        let value = serde_json::json!({
            "position": choice.position,
            "index": choice.position.to_index(),
            "rule": choice.rule,
        });
        Ok(value.to_string())
    } else {
        Ok(format!(
            "{} {} ({})",
            choice.position.to_index(),
            choice.position,
            choice.rule
        ))
    }
}
