use anyhow::{Context, Result};
use log::info;
use std::path::{Path, PathBuf};

use crate::database::{self, DbPool, get_connection};
use crate::domain::{MatchRow, Team};
use crate::store::mock::{MATCHES_FIXTURE, TEAMS_FIXTURE, load_fixture};

/// Loads the fixture files into a freshly reset database
pub struct IngestionService {
    pool: DbPool,
    fixtures: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestSummary {
    pub teams: usize,
    pub matches: usize,
}

impl IngestionService {
    pub fn new(pool: DbPool, fixtures: impl AsRef<Path>) -> Self {
        Self {
            pool,
            fixtures: fixtures.as_ref().to_path_buf(),
        }
    }

    pub fn run(&self) -> Result<IngestSummary> {
        info!("=== Starting Fixture Ingestion ===");

        info!("Step 1: Reading fixtures from {}...", self.fixtures.display());
        let teams: Vec<Team> = load_fixture(&self.fixtures.join(TEAMS_FIXTURE))?;
        let matches: Vec<MatchRow> = load_fixture(&self.fixtures.join(MATCHES_FIXTURE))?;
        info!("  → {} teams, {} matches", teams.len(), matches.len());

        info!("Step 2: Writing database...");
        self.write(&teams, &matches)?;

        info!("=== Ingestion Complete ===");
        Ok(IngestSummary {
            teams: teams.len(),
            matches: matches.len(),
        })
    }

    /// All or nothing: a failed insert leaves the previous data in place
    fn write(&self, teams: &[Team], matches: &[MatchRow]) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        let tx = conn.transaction().context("Failed to start transaction")?;

        database::setup::reset_database(&tx)?;
        for team in teams {
            database::teams::insert_team(&tx, team)?;
        }
        for row in matches {
            database::matches::insert_match(&tx, row)?;
        }

        tx.commit().context("Failed to commit fixtures")
    }
}
