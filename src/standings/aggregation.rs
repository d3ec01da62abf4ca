use std::cmp::Ordering;
use std::collections::HashMap;

use crate::collation;
use crate::domain::{MatchResult, Team, TeamId};

use super::types::{Outcome, StandingsRow};

type StandingsTable = HashMap<TeamId, StandingsRow>;

/// Build the ranked league table from the full team and match lists.
///
/// Every team in `teams` gets a row. Unplayed matches (either score missing)
/// are skipped, and a side whose team id is unknown is ignored.
pub fn calculate_standings(teams: &[Team], results: &[MatchResult]) -> Vec<StandingsRow> {
    let mut table = initialize_table(teams);

    for result in results {
        apply_result(&mut table, result);
    }

    rank_rows(table.into_values().collect())
}

fn initialize_table(teams: &[Team]) -> StandingsTable {
    teams
        .iter()
        .map(|team| (team.team_id, StandingsRow::empty(team)))
        .collect()
}

fn apply_result(table: &mut StandingsTable, result: &MatchResult) {
    let Some((home_score, away_score)) = result.final_score() else {
        return;
    };

    match Outcome::from_scores(home_score, away_score) {
        Outcome::HomeWin => {
            update(table, result.home_team_id, StandingsRow::record_win);
            update(table, result.away_team_id, StandingsRow::record_loss);
        }
        Outcome::AwayWin => {
            update(table, result.away_team_id, StandingsRow::record_win);
            update(table, result.home_team_id, StandingsRow::record_loss);
        }
        Outcome::Draw => {
            update(table, result.home_team_id, StandingsRow::record_draw);
            update(table, result.away_team_id, StandingsRow::record_draw);
        }
    }
}

fn update(table: &mut StandingsTable, team_id: TeamId, record: fn(&mut StandingsRow)) {
    if let Some(row) = table.get_mut(&team_id) {
        record(row);
    }
}

/// Points desc, wins desc, then name in reading order
pub fn rank_rows(mut rows: Vec<StandingsRow>) -> Vec<StandingsRow> {
    rows.sort_by(compare_rows);
    rows
}

pub fn compare_rows(a: &StandingsRow, b: &StandingsRow) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.wins.cmp(&a.wins))
        .then_with(|| collation::compare(&a.name, &b.name))
        // rows arrive in hash order, keep the result deterministic
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.id.cmp(&b.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(id: TeamId, name: &str) -> Team {
        Team {
            team_id: id,
            name: name.to_string(),
            city: None,
        }
    }

    fn result(home: TeamId, away: TeamId, home_score: Option<i32>, away_score: Option<i32>) -> MatchResult {
        MatchResult {
            home_team_id: home,
            away_team_id: away,
            home_score,
            away_score,
        }
    }

    fn row<'a>(rows: &'a [StandingsRow], name: &str) -> &'a StandingsRow {
        rows.iter().find(|r| r.name == name).unwrap()
    }

    #[test]
    fn test_home_win() {
        let teams = vec![team(1, "Alpha"), team(2, "Beta")];
        let results = vec![result(1, 2, Some(2), Some(0))];

        let rows = calculate_standings(&teams, &results);

        assert_eq!(rows[0].name, "Alpha");
        let alpha = row(&rows, "Alpha");
        assert_eq!((alpha.played, alpha.wins, alpha.draws, alpha.losses, alpha.points), (1, 1, 0, 0, 3));
        let beta = row(&rows, "Beta");
        assert_eq!((beta.played, beta.wins, beta.draws, beta.losses, beta.points), (1, 0, 0, 1, 0));
    }

    #[test]
    fn test_away_win_and_draw() {
        let teams = vec![team(1, "Alpha"), team(2, "Beta"), team(3, "Gamma")];
        let results = vec![
            result(1, 2, Some(0), Some(1)),
            result(2, 3, Some(2), Some(2)),
        ];

        let rows = calculate_standings(&teams, &results);

        let beta = row(&rows, "Beta");
        assert_eq!((beta.wins, beta.draws, beta.points), (1, 1, 4));
        let gamma = row(&rows, "Gamma");
        assert_eq!((gamma.played, gamma.draws, gamma.points), (1, 1, 1));
        assert_eq!(rows.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(), vec!["Beta", "Gamma", "Alpha"]);
    }

    #[test]
    fn test_unplayed_match_is_ignored() {
        let teams = vec![team(1, "Alpha"), team(2, "Beta")];
        let results = vec![result(1, 2, None, Some(3)), result(1, 2, Some(1), None)];

        let rows = calculate_standings(&teams, &results);

        assert!(rows.iter().all(|r| r.played == 0 && r.points == 0));
    }

    #[test]
    fn test_unknown_team_side_is_ignored() {
        let teams = vec![team(1, "Alpha")];
        let results = vec![result(1, 99, Some(3), Some(1)), result(42, 1, Some(0), Some(0))];

        let rows = calculate_standings(&teams, &results);

        assert_eq!(rows.len(), 1);
        assert_eq!((rows[0].played, rows[0].wins, rows[0].draws, rows[0].points), (2, 1, 1, 4));
    }

    #[test]
    fn test_team_without_matches_still_listed() {
        let teams = vec![team(1, "Alpha"), team(2, "Beta"), team(3, "Idle")];
        let results = vec![result(1, 2, Some(1), Some(0))];

        let rows = calculate_standings(&teams, &results);

        assert_eq!(rows.len(), 3);
        assert_eq!(row(&rows, "Idle").played, 0);
    }

    #[test]
    fn test_name_breaks_ties() {
        let teams = vec![team(1, "Zeta"), team(2, "Alpha"), team(3, "Mu"), team(4, "Nu")];
        let results = vec![result(1, 3, Some(1), Some(0)), result(2, 4, Some(2), Some(1))];

        let rows = calculate_standings(&teams, &results);

        assert_eq!(rows[0].name, "Alpha");
        assert_eq!(rows[1].name, "Zeta");
    }

    #[test]
    fn test_wins_break_point_ties() {
        // Alpha: 1 win + 0 draws = 3 pts; Beta: 3 draws = 3 pts
        let teams = vec![team(1, "Beta"), team(2, "Alpha"), team(3, "C"), team(4, "D")];
        let results = vec![
            result(1, 3, Some(0), Some(0)),
            result(1, 4, Some(1), Some(1)),
            result(3, 1, Some(2), Some(2)),
            result(2, 4, Some(1), Some(0)),
        ];

        let rows = calculate_standings(&teams, &results);
        let alpha_pos = rows.iter().position(|r| r.name == "Alpha").unwrap();
        let beta_pos = rows.iter().position(|r| r.name == "Beta").unwrap();

        assert_eq!(row(&rows, "Alpha").points, row(&rows, "Beta").points);
        assert!(alpha_pos < beta_pos);
    }

    #[test]
    fn test_natural_name_order() {
        let teams = vec![team(1, "Team 10"), team(2, "team 2"), team(3, "Équipe")];

        let rows = calculate_standings(&teams, &[]);

        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Équipe", "team 2", "Team 10"]);
    }

    #[test]
    fn test_invariants_and_point_total() {
        let teams: Vec<Team> = (1..=6).map(|id| team(id, &format!("Club {id}"))).collect();
        let mut results = Vec::new();
        for home in 1..=6 {
            for away in 1..=6 {
                if home != away {
                    let home_score = ((home * 7 + away * 3) % 4) as i32;
                    let away_score = ((home * 5 + away) % 3) as i32;
                    results.push(result(home, away, Some(home_score), Some(away_score)));
                }
            }
        }
        results.push(result(1, 2, None, None));

        let rows = calculate_standings(&teams, &results);

        for row in &rows {
            assert_eq!(row.played, row.wins + row.draws + row.losses);
            assert_eq!(row.points, 3 * row.wins + row.draws);
        }
        let decisive = results
            .iter()
            .filter_map(|r| r.final_score())
            .filter(|(h, a)| h != a)
            .count() as u32;
        let drawn = results
            .iter()
            .filter_map(|r| r.final_score())
            .filter(|(h, a)| h == a)
            .count() as u32;
        let total: u32 = rows.iter().map(|r| r.points).sum();
        assert_eq!(total, 3 * decisive + 2 * drawn);
    }

    #[test]
    fn test_idempotent() {
        let teams = vec![team(1, "Alpha"), team(2, "Beta"), team(3, "Gamma"), team(4, "alpha")];
        let results = vec![result(1, 2, Some(1), Some(1)), result(3, 4, Some(0), Some(2))];

        let first = calculate_standings(&teams, &results);
        let second = calculate_standings(&teams, &results);

        assert_eq!(first, second);
    }

    #[test]
    fn test_ordering_is_total_for_distinct_teams() {
        let teams = vec![team(1, "alpha"), team(2, "Alpha"), team(3, "Alpha")];

        let rows = calculate_standings(&teams, &[]);

        for pair in rows.windows(2) {
            assert_eq!(compare_rows(&pair[0], &pair[1]), Ordering::Less);
        }
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 3, 1]);
    }
}
