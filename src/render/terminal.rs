use colored::Colorize;

use crate::domain::MatchRow;
use crate::standings::StandingsRow;
use crate::table::{TableRow, TableState};

use super::display::{
    Column, MATCH_COLUMNS, NO_DATA_MESSAGE, Panel, STANDINGS_COLUMNS, column_indicator, pagination,
    render_match_rows, render_standings_rows,
};

pub fn matches_table(panel: Panel<&TableState<MatchRow>>) -> String {
    render_panel(panel, |state| {
        let page = state.visible_page();
        let body: Vec<Vec<String>> = render_match_rows(&page)
            .into_iter()
            .map(|row| {
                vec![
                    row.match_id.to_string(),
                    row.date,
                    format!("[{}] {}", row.home_initials, row.home_team),
                    format!("[{}] {}", row.away_initials, row.away_team),
                    row.score,
                ]
            })
            .collect();
        let footer = pagination(&page).map(|controls| controls.label());
        grid(&header_labels(state, &MATCH_COLUMNS), &body, footer)
    })
}

pub fn standings_table(panel: Panel<&TableState<StandingsRow>>) -> String {
    render_panel(panel, |state| {
        let page = state.visible_page();
        let body: Vec<Vec<String>> = render_standings_rows(state.rows(), &page)
            .into_iter()
            .map(|row| {
                vec![
                    row.rank.to_string(),
                    format!("[{}] {}", row.initials, row.team),
                    row.played.to_string(),
                    row.wins.to_string(),
                    row.draws.to_string(),
                    row.losses.to_string(),
                    row.points.to_string(),
                ]
            })
            .collect();
        let footer = pagination(&page).map(|controls| controls.label());
        grid(&header_labels(state, &STANDINGS_COLUMNS), &body, footer)
    })
}

fn render_panel<T>(panel: Panel<T>, table: impl FnOnce(T) -> String) -> String {
    match panel {
        Panel::Loading => "Loading…".dimmed().to_string(),
        Panel::Table(state) => table(state),
        Panel::NoData => NO_DATA_MESSAGE.yellow().to_string(),
        Panel::Error(message) => format!("{} {}", "Error:".red().bold(), message),
    }
}

fn header_labels<R: TableRow>(state: &TableState<R>, columns: &[Column<R::Key>]) -> Vec<String> {
    columns
        .iter()
        .map(|column| {
            let indicator = column_indicator(state.view(), column);
            if indicator.is_empty() {
                column.label.to_string()
            } else {
                format!("{} {}", column.label, indicator)
            }
        })
        .collect()
}

fn grid(header: &[String], body: &[Vec<String>], footer: Option<String>) -> String {
    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            body.iter()
                .filter_map(|row| row.get(col))
                .chain(std::iter::once(&header[col]))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = vec![format_line(header, &widths).bold().to_string()];
    lines.extend(body.iter().map(|row| format_line(row, &widths)));
    if let Some(footer) = footer {
        lines.push(footer.dimmed().to_string());
    }
    lines.join("\n")
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let padding = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(padding))
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{default_matches_view, default_standings_view};

    #[test]
    fn test_matches_table_lists_rows() {
        colored::control::set_override(false);
        let rows = vec![MatchRow {
            match_id: 3,
            match_date: None,
            home_team_id: 1,
            away_team_id: 2,
            home_score: Some(4),
            away_score: Some(1),
            home_team: Some("Olympique Lyon".to_string()),
            away_team: Some("Nantes".to_string()),
        }];
        let state = TableState::new(rows, default_matches_view(25), true);

        let output = matches_table(Panel::Table(&state));

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Date ▼"));
        assert!(lines[1].contains("[OL] Olympique Lyon"));
        assert!(lines[1].contains("[NA] Nantes"));
        assert!(lines[1].ends_with("4 - 1"));
    }

    #[test]
    fn test_standings_footer_shows_page() {
        colored::control::set_override(false);
        let rows: Vec<StandingsRow> = (1..=4)
            .map(|id| StandingsRow {
                id,
                name: format!("Club {id}"),
                city: None,
                played: 0,
                wins: 0,
                draws: 0,
                losses: 0,
                points: 0,
            })
            .collect();
        let state = TableState::new(rows, default_standings_view(2), false);

        let output = standings_table(Panel::Table(&state));

        assert!(output.ends_with("Page 1 / 2"));
    }

    #[test]
    fn test_error_panel_keeps_message() {
        colored::control::set_override(false);
        let output = matches_table(Panel::Error("HTTP 503".to_string()));
        assert_eq!(output, "Error: HTTP 503");
    }
}
