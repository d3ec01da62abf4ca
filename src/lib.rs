pub mod api;
pub mod cli;
pub mod collation;
pub mod config;
pub mod database;
pub mod domain;
pub mod http;
pub mod render;
pub mod services;
pub mod standings;
pub mod store;
pub mod table;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::path::Path;

use crate::cli::Command;
use crate::config::{AppConfig, DataSource};
use crate::services::ingestion::IngestionService;
use crate::services::server::ServerService;
use crate::services::watcher::{WatchOptions, WatcherService};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

/// `port` overrides the `PORT` setting
pub fn handle_serve(port: Option<u16>) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env();
        let service = ServerService::new(port.unwrap_or(config.port), config);
        service.run().await
    })
}

pub fn handle_ingest(from: &Path) -> Result<()> {
    let config = AppConfig::from_env();
    let DataSource::Database { path } = &config.source else {
        anyhow::bail!("USE_MOCK is set; there is no database to load fixtures into");
    };

    let pool = database::create_pool(path)
        .with_context(|| format!("Failed to open database {}", path.display()))?;
    let summary = IngestionService::new(pool, from).run()?;
    log::info!(
        "Loaded {} teams and {} matches into {}",
        summary.teams,
        summary.matches,
        path.display()
    );
    Ok(())
}

pub fn handle_watch(url: Option<String>, options: WatchOptions) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let mut config = AppConfig::from_env();
        if let Some(url) = url {
            config.watch.base_url = url;
        }
        let service = WatcherService::new(config, options)?;
        service.run().await
    })
}
