use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::Markup;
use std::sync::Arc;

use super::AppState;
use super::matches::MATCHES_ERROR;
use super::teams::TEAMS_ERROR;
use crate::render::Panel;
use crate::render::html::{matches_page, standings_page};
use crate::services::standings::load_standings;
use crate::table::{
    TableParams, TableRow, TableState, ViewState, default_matches_view, default_standings_view,
    view_from_params,
};

pub async fn get_matches_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TableParams>,
) -> Response {
    let refresh_secs = state.config.table.refresh_interval.as_secs();
    let view = view_from_params(default_matches_view(state.config.table.page_size), &params, true);

    match state.store.list_matches() {
        Ok(rows) if rows.is_empty() => respond(StatusCode::OK, matches_page(Panel::NoData, refresh_secs)),
        Ok(rows) => {
            let table = table_state(rows, view, true);
            respond(StatusCode::OK, matches_page(Panel::Table(&table), refresh_secs))
        }
        Err(e) => {
            log::error!("{}: {:#}", MATCHES_ERROR, e);
            let panel = Panel::Error(MATCHES_ERROR.to_string());
            respond(StatusCode::INTERNAL_SERVER_ERROR, matches_page(panel, refresh_secs))
        }
    }
}

pub async fn get_standings_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TableParams>,
) -> Response {
    let refresh_secs = state.config.table.refresh_interval.as_secs();
    let sortable = state.config.table.standings_sortable;
    let view = view_from_params(default_standings_view(state.config.table.page_size), &params, sortable);

    match load_standings(state.store.as_ref()) {
        Ok(rows) if rows.is_empty() => respond(StatusCode::OK, standings_page(Panel::NoData, refresh_secs)),
        Ok(rows) => {
            let table = table_state(rows, view, sortable);
            respond(StatusCode::OK, standings_page(Panel::Table(&table), refresh_secs))
        }
        Err(e) => {
            log::error!("{}: {:#}", TEAMS_ERROR, e);
            let panel = Panel::Error(TEAMS_ERROR.to_string());
            respond(StatusCode::INTERNAL_SERVER_ERROR, standings_page(panel, refresh_secs))
        }
    }
}

fn respond(status: StatusCode, markup: Markup) -> Response {
    (status, markup).into_response()
}

/// Out-of-range page numbers are pulled back inside the filtered row count
fn table_state<R: TableRow>(rows: Vec<R>, view: ViewState<R::Key>, sortable: bool) -> TableState<R> {
    let page = view.current_page;
    let mut table = TableState::new(rows, view, sortable);
    table.goto_page(page);
    table
}
