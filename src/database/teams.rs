use anyhow::{Context, Result};
use rusqlite::{Connection, params};

use crate::domain::Team;

pub fn list_all(conn: &Connection) -> Result<Vec<Team>> {
    let sql = "SELECT team_id, name, city FROM teams ORDER BY team_id";

    let mut stmt = conn.prepare(sql).context("Failed to prepare teams query")?;
    let rows = stmt
        .query_map([], parse_team_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to read teams")?;

    Ok(rows)
}

pub fn insert_team(conn: &Connection, team: &Team) -> Result<()> {
    let sql = "INSERT INTO teams (team_id, name, city) VALUES (?1, ?2, ?3)";

    conn.execute(sql, params![team.team_id, team.name, team.city])
        .with_context(|| format!("Failed to insert team {}", team.team_id))
        .map(|_| ())
}

fn parse_team_row(row: &rusqlite::Row) -> rusqlite::Result<Team> {
    Ok(Team {
        team_id: row.get(0)?,
        name: row.get(1)?,
        city: row.get(2)?,
    })
}
