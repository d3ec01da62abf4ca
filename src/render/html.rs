//! Server-rendered results and standings pages.

use maud::{DOCTYPE, Markup, html};
use urlencoding::encode;

use crate::domain::MatchRow;
use crate::standings::StandingsRow;
use crate::table::{PAGE_SIZE_CHOICES, SortKey, TableRow, TableState, ViewState};

use super::display::{
    Column, MATCH_COLUMNS, NO_DATA_MESSAGE, PaginationControls, Panel, STANDINGS_COLUMNS,
    column_indicator, pagination, render_match_rows, render_standings_rows,
};

pub const MATCHES_PATH: &str = "/resultats";
pub const STANDINGS_PATH: &str = "/classement";

pub fn matches_page(panel: Panel<&TableState<MatchRow>>, refresh_secs: u64) -> Markup {
    layout("Results", MATCHES_PATH, panel, refresh_secs, |state| {
        let page = state.visible_page();
        let rows = render_match_rows(&page);
        html! {
            (controls(MATCHES_PATH, state.view()))
            table class="results-table" {
                (table_head(MATCHES_PATH, state, &MATCH_COLUMNS))
                tbody id="table-body" {
                    @for row in &rows {
                        tr {
                            td { (row.match_id) }
                            td { (row.date) }
                            td { (team_cell(&row.home_initials, &row.home_team)) }
                            td { (team_cell(&row.away_initials, &row.away_team)) }
                            td class="score" { (row.score) }
                        }
                    }
                }
            }
            (pager(MATCHES_PATH, state.view(), pagination(&page)))
        }
    })
}

pub fn standings_page(panel: Panel<&TableState<StandingsRow>>, refresh_secs: u64) -> Markup {
    layout("Standings", STANDINGS_PATH, panel, refresh_secs, |state| {
        let page = state.visible_page();
        let rows = render_standings_rows(state.rows(), &page);
        html! {
            (controls(STANDINGS_PATH, state.view()))
            table class="standings-table" {
                (table_head(STANDINGS_PATH, state, &STANDINGS_COLUMNS))
                tbody id="standings-body" {
                    @for row in &rows {
                        tr {
                            td { (row.rank) }
                            td { (team_cell(&row.initials, &row.team)) }
                            td { (row.played) }
                            td { (row.wins) }
                            td { (row.draws) }
                            td { (row.losses) }
                            td class="points" { (row.points) }
                        }
                    }
                }
            }
            (pager(STANDINGS_PATH, state.view(), pagination(&page)))
        }
    })
}

fn layout<T>(
    title: &str,
    active_path: &str,
    panel: Panel<T>,
    refresh_secs: u64,
    table: impl FnOnce(T) -> Markup,
) -> Markup {
    let status = match &panel {
        Panel::Error(_) => "Connection error ✗",
        Panel::Loading => "Loading…",
        _ => "Connected ✓",
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta http-equiv="refresh" content=(refresh_secs);
                title { (title) " · matchday" }
            }
            body {
                header {
                    nav {
                        (nav_link("Results", MATCHES_PATH, active_path))
                        " "
                        (nav_link("Standings", STANDINGS_PATH, active_path))
                    }
                    span id="status-text" { (status) }
                }
                main {
                    h1 { (title) }
                    @match panel {
                        Panel::Loading => div id="loading" { "Loading…" },
                        Panel::Table(state) => div id="results-container" { (table(state)) },
                        Panel::NoData => div id="error-container" class="no-data" { (NO_DATA_MESSAGE) },
                        Panel::Error(message) => div id="error-container" class="error" {
                            p id="error-text" { (message) }
                        },
                    }
                }
            }
        }
    }
}

fn nav_link(label: &str, path: &str, active_path: &str) -> Markup {
    html! {
        @if path == active_path {
            a href=(path) class="active" { (label) }
        } @else {
            a href=(path) { (label) }
        }
    }
}

fn team_cell(initials: &str, name: &str) -> Markup {
    html! {
        div class="team-cell" {
            div class="team-logo" { (initials) }
            span class="team-name" { (name) }
        }
    }
}

fn controls<K: SortKey>(path: &str, view: &ViewState<K>) -> Markup {
    html! {
        form method="get" action=(path) class="table-controls" {
            input type="search" id="search-input" name="q" value=(view.filter_text) placeholder="Filter…";
            @if let Some(sort) = view.sort {
                input type="hidden" name="sort" value=(sort.key.name());
                input type="hidden" name="dir" value=(sort.dir.as_str());
            }
            select id="per-page" name="per_page" {
                @for size in PAGE_SIZE_CHOICES {
                    option value=(size) selected[size == view.page_size] { (size) }
                }
            }
            button type="submit" { "Apply" }
        }
    }
}

fn table_head<R: TableRow>(path: &str, state: &TableState<R>, columns: &[Column<R::Key>]) -> Markup {
    html! {
        thead {
            tr {
                @for column in columns {
                    @match column.key.filter(|_| state.is_sortable()) {
                        Some(key) => th class="sortable" data-key=(key.name()) {
                            a href={ (path) (view_query(&state.view().clone().toggle_sort(key))) } {
                                (column.label) " "
                                span class="sort-indicator" { (column_indicator(state.view(), column)) }
                            }
                        },
                        None => th { (column.label) },
                    }
                }
            }
        }
    }
}

fn pager<K: SortKey>(
    path: &str,
    view: &ViewState<K>,
    controls: Option<PaginationControls>,
) -> Markup {
    let Some(controls) = controls else {
        return html! {};
    };
    let link = |page: usize| format!("{}{}", path, view_query(&view.clone().goto_page(page)));

    html! {
        div id="pagination" class="pagination" {
            (page_button("«", controls.first_enabled(), &link(1)))
            (page_button("‹", controls.first_enabled(), &link(controls.prev_page())))
            span { (controls.label()) }
            (page_button("›", controls.last_enabled(), &link(controls.next_page())))
            (page_button("»", controls.last_enabled(), &link(controls.total_pages)))
        }
    }
}

fn page_button(label: &str, enabled: bool, href: &str) -> Markup {
    html! {
        @if enabled {
            a class="page-btn" href=(href) { (label) }
        } @else {
            span class="page-btn disabled" { (label) }
        }
    }
}

/// Query string that reproduces `view`
pub fn view_query<K: SortKey>(view: &ViewState<K>) -> String {
    let mut parts = Vec::new();
    if !view.filter_text.is_empty() {
        parts.push(format!("q={}", encode(&view.filter_text)));
    }
    if let Some(sort) = view.sort {
        parts.push(format!("sort={}", sort.key.name()));
        parts.push(format!("dir={}", sort.dir.as_str()));
    }
    parts.push(format!("per_page={}", view.page_size));
    parts.push(format!("page={}", view.current_page));
    format!("?{}", parts.join("&"))
}
