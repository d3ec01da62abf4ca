use chrono::NaiveDate;

use crate::domain::{MatchRow, score_or_zero, team_label};
use crate::standings::StandingsRow;
use crate::table::{MatchKey, SortDirection, SortKey, StandingsKey, ViewState, VisiblePage};

pub const DATE_PLACEHOLDER: &str = "-";
pub const NO_DATA_MESSAGE: &str = "No results available yet.";

/// What a table area shows: a spinner, the table, an empty notice or an error
#[derive(Debug, Clone, PartialEq)]
pub enum Panel<T> {
    Loading,
    Table(T),
    NoData,
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column<K> {
    pub label: &'static str,
    pub key: Option<K>,
}

impl<K> Column<K> {
    const fn new(label: &'static str, key: Option<K>) -> Self {
        Self { label, key }
    }
}

pub const MATCH_COLUMNS: [Column<MatchKey>; 5] = [
    Column::new("#", Some(MatchKey::MatchId)),
    Column::new("Date", Some(MatchKey::MatchDate)),
    Column::new("Home", Some(MatchKey::HomeTeam)),
    Column::new("Away", Some(MatchKey::AwayTeam)),
    Column::new("Score", Some(MatchKey::ScoreDiff)),
];

pub const STANDINGS_COLUMNS: [Column<StandingsKey>; 7] = [
    Column::new("#", None),
    Column::new("Team", Some(StandingsKey::Name)),
    Column::new("P", Some(StandingsKey::Played)),
    Column::new("W", Some(StandingsKey::Wins)),
    Column::new("D", Some(StandingsKey::Draws)),
    Column::new("L", Some(StandingsKey::Losses)),
    Column::new("Pts", Some(StandingsKey::Points)),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchDisplayRow {
    pub match_id: i64,
    pub date: String,
    pub home_team: String,
    pub home_initials: String,
    pub away_team: String,
    pub away_initials: String,
    pub score: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsDisplayRow {
    pub rank: usize,
    pub team: String,
    pub initials: String,
    pub city: String,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub points: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationControls {
    pub current_page: usize,
    pub total_pages: usize,
}

impl PaginationControls {
    pub fn first_enabled(&self) -> bool {
        self.current_page > 1
    }

    pub fn prev_page(&self) -> usize {
        self.current_page.saturating_sub(1).max(1)
    }

    pub fn next_page(&self) -> usize {
        (self.current_page + 1).min(self.total_pages)
    }

    pub fn last_enabled(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn label(&self) -> String {
        format!("Page {} / {}", self.current_page, self.total_pages)
    }
}

/// Two-letter badge: "Real Madrid" -> "RM", "Arsenal" -> "AR"
pub fn initials(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    match words.as_slice() {
        [] => String::new(),
        [single] => single.chars().take(2).collect::<String>().to_uppercase(),
        [first, .., last] => first
            .chars()
            .take(1)
            .chain(last.chars().take(1))
            .collect::<String>()
            .to_uppercase(),
    }
}

/// "5 January 2024", or a dash when the date is unknown
pub fn format_match_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%-d %B %Y").to_string())
        .unwrap_or_else(|| DATE_PLACEHOLDER.to_string())
}

pub fn format_score(home_score: Option<i32>, away_score: Option<i32>) -> String {
    format!("{} - {}", score_or_zero(home_score), score_or_zero(away_score))
}

pub fn sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Asc) => "▲",
        Some(SortDirection::Desc) => "▼",
        None => "",
    }
}

pub fn column_indicator<K: SortKey>(view: &ViewState<K>, column: &Column<K>) -> &'static str {
    sort_indicator(column.key.and_then(|key| view.sort_direction_for(key)))
}

pub fn render_match_rows(page: &VisiblePage<'_, MatchRow>) -> Vec<MatchDisplayRow> {
    page.rows.iter().map(|row| render_match_row(row)).collect()
}

fn render_match_row(row: &MatchRow) -> MatchDisplayRow {
    let home_team = row.home_team_label();
    let away_team = row.away_team_label();

    MatchDisplayRow {
        match_id: row.match_id,
        date: format_match_date(row.match_date),
        home_initials: initials(&home_team),
        away_initials: initials(&away_team),
        home_team,
        away_team,
        score: format_score(row.home_score, row.away_score),
    }
}

/// `ranked` is the full row set in league order. Ranks are league positions,
/// so filtering or re-sorting the page never renumbers a team.
pub fn render_standings_rows(
    ranked: &[StandingsRow],
    page: &VisiblePage<'_, StandingsRow>,
) -> Vec<StandingsDisplayRow> {
    page.rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let team = team_label(Some(&row.name), row.id);
            let position = ranked
                .iter()
                .position(|candidate| std::ptr::eq(candidate, *row))
                .unwrap_or(page.offset + index);
            StandingsDisplayRow {
                rank: position + 1,
                initials: initials(&team),
                team,
                city: row.city.clone().unwrap_or_default(),
                played: row.played,
                wins: row.wins,
                draws: row.draws,
                losses: row.losses,
                points: row.points,
            }
        })
        .collect()
}

/// `None` when everything fits on one page and the pager is hidden
pub fn pagination<R>(page: &VisiblePage<'_, R>) -> Option<PaginationControls> {
    (page.total_pages > 1).then_some(PaginationControls {
        current_page: page.current_page,
        total_pages: page.total_pages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{TableState, default_matches_view, default_standings_view};

    #[test]
    fn test_initials() {
        assert_eq!(initials("Arsenal"), "AR");
        assert_eq!(initials("real madrid"), "RM");
        assert_eq!(initials("  Paris  Saint Germain "), "PG");
        assert_eq!(initials("X"), "X");
        assert_eq!(initials(""), "");
        assert_eq!(initials("   "), "");
        assert_eq!(initials("équipe 7"), "É7");
    }

    #[test]
    fn test_format_match_date() {
        assert_eq!(format_match_date(NaiveDate::from_ymd_opt(2024, 1, 5)), "5 January 2024");
        assert_eq!(format_match_date(None), "-");
    }

    #[test]
    fn test_match_row_fallbacks() {
        let rows = vec![MatchRow {
            match_id: 9,
            match_date: None,
            home_team_id: 4,
            away_team_id: 5,
            home_score: None,
            away_score: Some(2),
            home_team: None,
            away_team: Some("Beta City".to_string()),
        }];
        let state = TableState::new(rows, default_matches_view(25), true);

        let rendered = render_match_rows(&state.visible_page());

        assert_eq!(
            rendered,
            vec![MatchDisplayRow {
                match_id: 9,
                date: "-".to_string(),
                home_team: "Team 4".to_string(),
                home_initials: "T4".to_string(),
                away_team: "Beta City".to_string(),
                away_initials: "BC".to_string(),
                score: "0 - 2".to_string(),
            }]
        );
    }

    #[test]
    fn test_standings_rank_follows_offset() {
        let rows: Vec<StandingsRow> = (1..=12)
            .map(|id| StandingsRow {
                id,
                name: if id == 12 { String::new() } else { format!("Club {id}") },
                city: Some("Lyon".to_string()),
                played: 1,
                wins: 1,
                draws: 0,
                losses: 0,
                points: 3,
            })
            .collect();
        let mut state = TableState::new(rows, default_standings_view(5), false);
        state.goto_page(3);

        let page = state.visible_page();
        let rendered = render_standings_rows(state.rows(), &page);

        assert_eq!(rendered.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![11, 12]);
        assert_eq!(rendered[1].team, "Team 12");
        assert_eq!(rendered[0].city, "Lyon");
    }

    fn ranked(names: &[&str]) -> Vec<StandingsRow> {
        names
            .iter()
            .enumerate()
            .map(|(idx, name)| StandingsRow {
                id: idx as i64 + 1,
                name: name.to_string(),
                city: None,
                played: 3,
                wins: 0,
                draws: 0,
                losses: 3,
                points: 0,
            })
            .collect()
    }

    #[test]
    fn test_filtered_standings_keep_league_position() {
        let rows = ranked(&["Lyon", "Rennes", "Nantes", "Nice"]);
        let view = default_standings_view(25).with_filter_text("nantes");
        let state = TableState::new(rows, view, false);

        let rendered = render_standings_rows(state.rows(), &state.visible_page());

        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].team, "Nantes");
        assert_eq!(rendered[0].rank, 3);
    }

    #[test]
    fn test_resorted_standings_keep_league_position() {
        let rows = ranked(&["Lyon", "Rennes", "Nantes"]);
        let view = default_standings_view(25).toggle_sort(crate::table::StandingsKey::Name);
        let state = TableState::new(rows, view, true);

        let rendered = render_standings_rows(state.rows(), &state.visible_page());

        let pairs: Vec<(&str, usize)> = rendered.iter().map(|r| (r.team.as_str(), r.rank)).collect();
        assert_eq!(pairs, vec![("Lyon", 1), ("Nantes", 3), ("Rennes", 2)]);
    }

    #[test]
    fn test_pagination_controls() {
        let rows: Vec<StandingsRow> = Vec::new();
        let state = TableState::new(rows, default_standings_view(25), false);
        assert_eq!(pagination(&state.visible_page()), None);

        let controls = PaginationControls { current_page: 1, total_pages: 3 };
        assert!(!controls.first_enabled());
        assert!(controls.last_enabled());
        assert_eq!(controls.prev_page(), 1);
        assert_eq!(controls.next_page(), 2);
        assert_eq!(controls.label(), "Page 1 / 3");

        let last = PaginationControls { current_page: 3, total_pages: 3 };
        assert!(!last.last_enabled());
        assert_eq!(last.next_page(), 3);
    }

    #[test]
    fn test_sort_indicators() {
        let view = default_matches_view(25);
        assert_eq!(column_indicator(&view, &MATCH_COLUMNS[1]), "▼");
        assert_eq!(column_indicator(&view, &MATCH_COLUMNS[0]), "");
        assert_eq!(sort_indicator(Some(SortDirection::Asc)), "▲");
    }
}
