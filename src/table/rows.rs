use crate::domain::MatchRow;
use crate::standings::StandingsRow;

use super::compare::SortValue;
use super::page::TableRow;
use super::view::{SortDirection, SortKey, SortSpec, ViewState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKey {
    MatchId,
    MatchDate,
    HomeTeam,
    AwayTeam,
    ScoreDiff,
}

impl SortKey for MatchKey {
    fn name(&self) -> &'static str {
        match self {
            MatchKey::MatchId => "match_id",
            MatchKey::MatchDate => "match_date",
            MatchKey::HomeTeam => "home_team",
            MatchKey::AwayTeam => "away_team",
            MatchKey::ScoreDiff => "score_diff",
        }
    }

    fn all() -> &'static [Self] {
        &[
            MatchKey::MatchId,
            MatchKey::MatchDate,
            MatchKey::HomeTeam,
            MatchKey::AwayTeam,
            MatchKey::ScoreDiff,
        ]
    }
}

impl TableRow for MatchRow {
    type Key = MatchKey;

    fn haystack(&self) -> String {
        let date = self.match_date.map(|d| d.to_string()).unwrap_or_default();
        format!("{} {} {}", self.home_team_label(), self.away_team_label(), date)
    }

    fn sort_value(&self, key: MatchKey) -> SortValue {
        match key {
            MatchKey::MatchId => SortValue::number(self.match_id),
            MatchKey::MatchDate => SortValue::optional(self.match_date),
            MatchKey::HomeTeam => SortValue::text(self.home_team_label()),
            MatchKey::AwayTeam => SortValue::text(self.away_team_label()),
            MatchKey::ScoreDiff => SortValue::Computed(self.score_diff()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandingsKey {
    Name,
    Played,
    Wins,
    Draws,
    Losses,
    Points,
}

impl SortKey for StandingsKey {
    fn name(&self) -> &'static str {
        match self {
            StandingsKey::Name => "name",
            StandingsKey::Played => "played",
            StandingsKey::Wins => "wins",
            StandingsKey::Draws => "draws",
            StandingsKey::Losses => "losses",
            StandingsKey::Points => "points",
        }
    }

    fn all() -> &'static [Self] {
        &[
            StandingsKey::Name,
            StandingsKey::Played,
            StandingsKey::Wins,
            StandingsKey::Draws,
            StandingsKey::Losses,
            StandingsKey::Points,
        ]
    }
}

impl TableRow for StandingsRow {
    type Key = StandingsKey;

    fn haystack(&self) -> String {
        self.name.clone()
    }

    fn sort_value(&self, key: StandingsKey) -> SortValue {
        match key {
            StandingsKey::Name => SortValue::text(self.name.clone()),
            StandingsKey::Played => SortValue::number(self.played),
            StandingsKey::Wins => SortValue::number(self.wins),
            StandingsKey::Draws => SortValue::number(self.draws),
            StandingsKey::Losses => SortValue::number(self.losses),
            StandingsKey::Points => SortValue::number(self.points),
        }
    }
}

/// Most recent matches first
pub fn default_matches_view(page_size: usize) -> ViewState<MatchKey> {
    ViewState::new(Some(SortSpec::new(MatchKey::MatchDate, SortDirection::Desc)), page_size)
}

/// Standings keep the ranking they were served in
pub fn default_standings_view(page_size: usize) -> ViewState<StandingsKey> {
    ViewState::new(None, page_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::compute_visible_page;
    use chrono::NaiveDate;

    fn match_row(id: i64, date: Option<(i32, u32, u32)>, home: Option<&str>, away: Option<&str>, score: (Option<i32>, Option<i32>)) -> MatchRow {
        MatchRow {
            match_id: id,
            match_date: date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            home_team_id: id * 10,
            away_team_id: id * 10 + 1,
            home_score: score.0,
            away_score: score.1,
            home_team: home.map(String::from),
            away_team: away.map(String::from),
        }
    }

    fn sample() -> Vec<MatchRow> {
        vec![
            match_row(1, Some((2024, 1, 5)), Some("Alpha"), Some("Beta"), (Some(2), Some(0))),
            match_row(2, Some((2024, 2, 10)), Some("Gamma"), None, (Some(1), Some(3))),
            match_row(3, None, Some("Beta"), Some("Delta"), (None, None)),
            match_row(4, Some((2023, 12, 24)), Some("Élan"), Some("Alpha"), (Some(1), Some(1))),
        ]
    }

    fn ids(page: &crate::table::VisiblePage<'_, MatchRow>) -> Vec<i64> {
        page.rows.iter().map(|m| m.match_id).collect()
    }

    #[test]
    fn test_default_view_is_newest_first() {
        let rows = sample();
        let page = compute_visible_page(&rows, &default_matches_view(25));

        // missing date sorts as the empty string, last when descending
        assert_eq!(ids(&page), vec![2, 1, 4, 3]);
    }

    #[test]
    fn test_filter_matches_fallback_label_and_date() {
        let rows = sample();

        let by_label = default_matches_view(25).with_filter_text("team 21");
        assert_eq!(ids(&compute_visible_page(&rows, &by_label)), vec![2]);

        let by_date = default_matches_view(25).with_filter_text("2024-01");
        assert_eq!(ids(&compute_visible_page(&rows, &by_date)), vec![1]);

        let by_team = default_matches_view(25).with_filter_text("ALPHA");
        assert_eq!(ids(&compute_visible_page(&rows, &by_team)), vec![1, 4]);
    }

    #[test]
    fn test_sort_by_score_diff() {
        let rows = sample();
        let view = default_matches_view(25).toggle_sort(MatchKey::ScoreDiff);

        let page = compute_visible_page(&rows, &view);

        // diffs: +2, -2, 0, 0
        assert_eq!(ids(&page), vec![2, 3, 4, 1]);
    }

    #[test]
    fn test_sort_by_home_team_ignores_accents() {
        let rows = sample();
        let view = default_matches_view(25).toggle_sort(MatchKey::HomeTeam);

        let page = compute_visible_page(&rows, &view);

        assert_eq!(ids(&page), vec![1, 3, 4, 2]);
    }

    #[test]
    fn test_standings_sort_and_filter() {
        let standings = vec![
            StandingsRow { id: 1, name: "Alpha".into(), city: None, played: 2, wins: 2, draws: 0, losses: 0, points: 6 },
            StandingsRow { id: 2, name: "Beta".into(), city: None, played: 10, wins: 1, draws: 1, losses: 8, points: 4 },
        ];

        let by_played = default_standings_view(25).toggle_sort(StandingsKey::Played).toggle_sort(StandingsKey::Played);
        let page = compute_visible_page(&standings, &by_played);
        assert_eq!(page.rows[0].name, "Beta");

        let filtered = default_standings_view(25).with_filter_text("alp");
        let page = compute_visible_page(&standings, &filtered);
        assert_eq!(page.rows.len(), 1);
        assert_eq!(page.rows[0].id, 1);
    }

    #[test]
    fn test_key_lookup() {
        assert_eq!(MatchKey::from_name("score_diff"), Some(MatchKey::ScoreDiff));
        assert_eq!(StandingsKey::from_name("points"), Some(StandingsKey::Points));
        assert_eq!(StandingsKey::from_name("city"), None);
    }
}
