use anyhow::{Context, Result};

use crate::standings::{StandingsRow, calculate_standings};
use crate::store::ResultsStore;

/// Fetch teams and results and rank them. Nothing is cached between calls.
pub fn load_standings(store: &dyn ResultsStore) -> Result<Vec<StandingsRow>> {
    let teams = store.list_teams().context("Failed to load teams")?;
    let results = store.list_results().context("Failed to load match results")?;

    Ok(calculate_standings(&teams, &results))
}
