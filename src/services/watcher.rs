//! Terminal client that polls the results API and redraws the table.
//!
//! A refresh is started on launch and on every tick. Fetches run as separate
//! tasks so a slow request never holds up the next tick. Completions can
//! therefore arrive out of order, and each one carries the sequence number it
//! was issued with. Only a completion newer than the last applied one is shown.

use anyhow::Result;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::domain::MatchRow;
use crate::http::ApiClient;
use crate::render::Panel;
use crate::render::terminal::{matches_table, standings_table};
use crate::standings::StandingsRow;
use crate::table::{
    TableParams, TableRow, TableState, ViewState, default_matches_view, default_standings_view,
    view_from_params,
};

pub const MATCHES_ENDPOINT: &str = "/api/matches";
pub const TEAMS_ENDPOINT: &str = "/api/teams";

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum WatchView {
    Matches,
    Standings,
}

#[derive(Debug, Clone)]
pub struct WatchOptions {
    pub view: WatchView,
    pub params: TableParams,
    /// Fetch and print a single time instead of polling
    pub once: bool,
}

/// Issues refresh numbers and remembers the newest one applied
#[derive(Debug, Default)]
pub struct RefreshSequence {
    issued: AtomicU64,
    applied: AtomicU64,
}

impl RefreshSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Record `seq` as applied. False when a newer refresh already was.
    pub fn try_apply(&self, seq: u64) -> bool {
        self.applied.fetch_max(seq, Ordering::SeqCst) < seq
    }

    pub fn last_applied(&self) -> u64 {
        self.applied.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Status {
    Loading,
    Ready,
    Failed(String),
}

/// Table contents plus the outcome of the latest applied refresh
pub struct Screen<R: TableRow> {
    table: TableState<R>,
    status: Status,
}

impl<R: TableRow> Screen<R> {
    pub fn new(view: ViewState<R::Key>, sortable: bool) -> Self {
        Self {
            table: TableState::new(Vec::new(), view, sortable),
            status: Status::Loading,
        }
    }

    /// Rows are replaced wholesale and the view parameters kept. A failure
    /// leaves the previous rows but shows the error.
    pub fn apply(&mut self, result: Result<Vec<R>>) {
        match result {
            Ok(rows) => {
                self.table.replace_rows(rows);
                let page = self.table.view().current_page;
                self.table.goto_page(page);
                self.status = Status::Ready;
            }
            Err(e) => self.status = Status::Failed(format!("{e:#}")),
        }
    }

    pub fn panel(&self) -> Panel<&TableState<R>> {
        match &self.status {
            Status::Loading => Panel::Loading,
            Status::Failed(message) => Panel::Error(message.clone()),
            Status::Ready if self.table.is_empty() => Panel::NoData,
            Status::Ready => Panel::Table(&self.table),
        }
    }
}

pub struct WatcherService {
    client: Arc<ApiClient>,
    config: AppConfig,
    options: WatchOptions,
}

impl WatcherService {
    pub fn new(config: AppConfig, options: WatchOptions) -> Result<Self> {
        let client = Arc::new(ApiClient::new(&config.watch)?);
        Ok(Self { client, config, options })
    }

    pub async fn run(&self) -> Result<()> {
        let page_size = self.config.table.page_size;
        match self.options.view {
            WatchView::Matches => {
                let view = view_from_params(default_matches_view(page_size), &self.options.params, true);
                self.watch(MATCHES_ENDPOINT, Screen::<MatchRow>::new(view, true), matches_table)
                    .await
            }
            WatchView::Standings => {
                let sortable = self.config.table.standings_sortable;
                let view = view_from_params(default_standings_view(page_size), &self.options.params, sortable);
                self.watch(TEAMS_ENDPOINT, Screen::<StandingsRow>::new(view, sortable), standings_table)
                    .await
            }
        }
    }

    /// One fetch rendered as a panel. Failures become the error panel.
    async fn snapshot<R>(
        &self,
        path: &'static str,
        mut screen: Screen<R>,
        render: fn(Panel<&TableState<R>>) -> String,
    ) -> String
    where
        R: TableRow + DeserializeOwned,
    {
        screen.apply(self.client.get_json::<Vec<R>>(path).await);
        render(screen.panel())
    }

    async fn watch<R>(
        &self,
        path: &'static str,
        mut screen: Screen<R>,
        render: fn(Panel<&TableState<R>>) -> String,
    ) -> Result<()>
    where
        R: TableRow + DeserializeOwned + Send + 'static,
    {
        if self.options.once {
            println!("{}", self.snapshot(path, screen, render).await);
            return Ok(());
        }

        info!("Watching {} every {:?}", self.client.url(path), self.config.table.refresh_interval);

        let sequence = RefreshSequence::new();
        let (tx, mut rx) = mpsc::unbounded_channel::<(u64, Result<Vec<R>>)>();
        let mut ticker = tokio::time::interval(self.config.table.refresh_interval);

        draw(&render(screen.panel()));

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let seq = sequence.next();
                    let client = Arc::clone(&self.client);
                    let tx = tx.clone();
                    debug!("Starting refresh #{}", seq);
                    tokio::spawn(async move {
                        let result = client.get_json::<Vec<R>>(path).await;
                        let _ = tx.send((seq, result));
                    });
                }
                Some((seq, result)) = rx.recv() => {
                    if sequence.try_apply(seq) {
                        debug!("Applying refresh #{}", seq);
                        screen.apply(result);
                        draw(&render(screen.panel()));
                    } else {
                        warn!("Dropping stale refresh #{} (already showing #{})", seq, sequence.last_applied());
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Stopping watcher");
                    return Ok(());
                }
            }
        }
    }
}

fn draw(output: &str) {
    let updated = chrono::Local::now().format("%H:%M:%S");
    println!("{CLEAR_SCREEN}{output}\n\nUpdated {updated}");
}
