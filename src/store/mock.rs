use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::domain::{MatchResult, MatchRow, Team};

use super::ResultsStore;

pub const MATCHES_FIXTURE: &str = "mock_matches.json";
pub const TEAMS_FIXTURE: &str = "mock_teams.json";

/// Serves the JSON fixtures in `dir`, re-read on every call
pub struct MockStore {
    dir: PathBuf,
}

impl MockStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn load<T: DeserializeOwned>(&self, file_name: &str) -> Result<T> {
        load_fixture(&self.dir.join(file_name))
    }
}

pub fn load_fixture<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read fixture file: {}", path.display()))?;

    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse fixture file: {}", path.display()))
}

impl ResultsStore for MockStore {
    fn list_matches(&self) -> Result<Vec<MatchRow>> {
        let mut rows: Vec<MatchRow> = self.load(MATCHES_FIXTURE)?;
        rows.sort_by_key(|row| (row.match_date, row.match_id));
        Ok(rows)
    }

    fn list_teams(&self) -> Result<Vec<Team>> {
        self.load(TEAMS_FIXTURE)
    }

    fn list_results(&self) -> Result<Vec<MatchResult>> {
        let rows: Vec<MatchRow> = self.load(MATCHES_FIXTURE)?;
        Ok(rows.iter().map(MatchRow::result).collect())
    }
}
