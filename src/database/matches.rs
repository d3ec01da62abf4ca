use anyhow::{Context, Result};
use rusqlite::{Connection, params};

use crate::domain::{MatchResult, MatchRow};

/// All matches with team names joined in, oldest first
pub fn list_with_teams(conn: &Connection) -> Result<Vec<MatchRow>> {
    let sql = "
        SELECT
            m.match_id,
            m.match_date,
            m.home_team_id,
            m.away_team_id,
            m.home_score,
            m.away_score,
            ht.name AS home_team,
            at.name AS away_team
        FROM matches m
        LEFT JOIN teams ht ON m.home_team_id = ht.team_id
        LEFT JOIN teams at ON m.away_team_id = at.team_id
        ORDER BY m.match_date ASC, m.match_id ASC
    ";

    let mut stmt = conn.prepare(sql).context("Failed to prepare matches query")?;
    let rows = stmt
        .query_map([], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to read matches")?;

    Ok(rows)
}

/// Scores only, for the standings
pub fn list_results(conn: &Connection) -> Result<Vec<MatchResult>> {
    let sql = "SELECT home_team_id, away_team_id, home_score, away_score FROM matches";

    let mut stmt = conn.prepare(sql).context("Failed to prepare results query")?;
    let rows = stmt
        .query_map([], |row| {
            Ok(MatchResult {
                home_team_id: row.get(0)?,
                away_team_id: row.get(1)?,
                home_score: row.get(2)?,
                away_score: row.get(3)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to read match results")?;

    Ok(rows)
}

pub fn insert_match(conn: &Connection, row: &MatchRow) -> Result<()> {
    let sql = "INSERT INTO matches (match_id, match_date, home_team_id, away_team_id, home_score, away_score) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

    conn.execute(
        sql,
        params![
            row.match_id,
            row.match_date,
            row.home_team_id,
            row.away_team_id,
            row.home_score,
            row.away_score
        ],
    )
    .with_context(|| format!("Failed to insert match {}", row.match_id))
    .map(|_| ())
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<MatchRow> {
    Ok(MatchRow {
        match_id: row.get(0)?,
        match_date: row.get(1)?,
        home_team_id: row.get(2)?,
        away_team_id: row.get(3)?,
        home_score: row.get(4)?,
        away_score: row.get(5)?,
        home_team: row.get(6)?,
        away_team: row.get(7)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{setup, teams};
    use crate::domain::Team;
    use chrono::NaiveDate;

    fn seeded() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        setup::reset_database(&conn).unwrap();
        for (id, name) in [(1, "Alpha"), (2, "Beta")] {
            teams::insert_team(&conn, &Team { team_id: id, name: name.to_string(), city: Some("Paris".to_string()) }).unwrap();
        }
        let matches = [
            (10, Some((2024, 3, 1)), 1, 2, Some(2), Some(1)),
            (11, Some((2024, 1, 1)), 2, 3, None, None),
            (12, None, 1, 2, Some(0), Some(0)),
        ];
        for (id, date, home, away, hs, aws) in matches {
            insert_match(
                &conn,
                &MatchRow {
                    match_id: id,
                    match_date: date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
                    home_team_id: home,
                    away_team_id: away,
                    home_score: hs,
                    away_score: aws,
                    home_team: None,
                    away_team: None,
                },
            )
            .unwrap();
        }
        conn
    }

    #[test]
    fn test_list_with_teams_joins_and_orders() {
        let conn = seeded();

        let rows = list_with_teams(&conn).unwrap();

        assert_eq!(rows.iter().map(|r| r.match_id).collect::<Vec<_>>(), vec![12, 11, 10]);
        let unknown_away = &rows[1];
        assert_eq!(unknown_away.home_team.as_deref(), Some("Beta"));
        assert_eq!(unknown_away.away_team, None);
        assert_eq!(rows[2].match_date, NaiveDate::from_ymd_opt(2024, 3, 1));
    }

    #[test]
    fn test_list_results_keeps_nulls() {
        let conn = seeded();

        let results = list_results(&conn).unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(results.iter().filter(|r| r.final_score().is_none()).count(), 1);
    }

    #[test]
    fn test_teams_round_trip() {
        let conn = seeded();

        let teams = teams::list_all(&conn).unwrap();

        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].city.as_deref(), Some("Paris"));
    }

    #[test]
    fn test_missing_table_is_an_error() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(list_with_teams(&conn).is_err());
    }
}
