//! Read-only access to teams and matches, backed by SQLite or by fixture files.

pub mod mock;
pub mod sqlite;

use anyhow::Result;
use std::sync::Arc;

use crate::config::DataSource;
use crate::database::create_pool;

use crate::domain::{MatchResult, MatchRow, Team};

pub use mock::MockStore;
pub use sqlite::SqliteStore;

pub trait ResultsStore: Send + Sync {
    /// Matches with joined team names, ordered by date ascending
    fn list_matches(&self) -> Result<Vec<MatchRow>>;

    fn list_teams(&self) -> Result<Vec<Team>>;

    /// Score lines of every match, played or not
    fn list_results(&self) -> Result<Vec<MatchResult>>;
}

/// Open the store selected by the configuration
pub fn open_store(source: &DataSource) -> Result<Arc<dyn ResultsStore>> {
    match source {
        DataSource::Mock { dir } => {
            log::info!("Serving fixtures from {}", dir.display());
            Ok(Arc::new(MockStore::new(dir)))
        }
        DataSource::Database { path } => {
            log::info!("Opening database {}", path.display());
            let pool = create_pool(path)?;
            Ok(Arc::new(SqliteStore::new(pool)))
        }
    }
}
