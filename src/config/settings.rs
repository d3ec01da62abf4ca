use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::table::DEFAULT_PAGE_SIZE;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    /// Live SQLite store
    Database { path: PathBuf },
    /// Static fixture files replace the store entirely
    Mock { dir: PathBuf },
}

#[derive(Debug, Clone)]
pub struct TableSettings {
    pub page_size: usize,
    pub refresh_interval: Duration,
    /// Header-click sorting on the standings table
    pub standings_sortable: bool,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            refresh_interval: Duration::from_secs(30),
            standings_sortable: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WatchSettings {
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    pub base_url: String,
}

impl Default for WatchSettings {
    fn default() -> Self {
        Self {
            user_agent: "matchday-watch/0.1",
            timeout_secs: 10,
            base_url: format!("http://localhost:{DEFAULT_PORT}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub source: DataSource,
    pub port: u16,
    pub table: TableSettings,
    pub watch: WatchSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source: DataSource::Database {
                path: PathBuf::from("matchday.db"),
            },
            port: DEFAULT_PORT,
            table: TableSettings::default(),
            watch: WatchSettings::default(),
        }
    }
}

impl AppConfig {
    /// Read the environment, after loading `.env` if one exists
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let source = if parse_flag(lookup("USE_MOCK")) {
            DataSource::Mock {
                dir: lookup("MOCK_DATA_DIR").map_or_else(|| PathBuf::from("data"), PathBuf::from),
            }
        } else {
            match lookup("DATABASE_PATH") {
                Some(path) => DataSource::Database { path: PathBuf::from(path) },
                None => defaults.source,
            }
        };

        let port = lookup("PORT")
            .and_then(|value| value.parse().ok())
            .unwrap_or(defaults.port);

        let table = TableSettings {
            standings_sortable: parse_flag(lookup("STANDINGS_SORTABLE")),
            ..defaults.table
        };

        Self {
            source,
            port,
            table,
            watch: defaults.watch,
        }
    }
}

fn parse_flag(value: Option<String>) -> bool {
    value.is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
}
