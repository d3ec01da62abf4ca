use anyhow::Result;

use crate::database::{self, DbPool};
use crate::domain::{MatchResult, MatchRow, Team};

use super::ResultsStore;

pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl ResultsStore for SqliteStore {
    fn list_matches(&self) -> Result<Vec<MatchRow>> {
        let conn = database::get_connection(&self.pool)?;
        database::matches::list_with_teams(&conn)
    }

    fn list_teams(&self) -> Result<Vec<Team>> {
        let conn = database::get_connection(&self.pool)?;
        database::teams::list_all(&conn)
    }

    fn list_results(&self) -> Result<Vec<MatchResult>> {
        let conn = database::get_connection(&self.pool)?;
        database::matches::list_results(&conn)
    }
}
