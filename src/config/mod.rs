pub mod settings;

pub use settings::{AppConfig, DataSource, TableSettings, WatchSettings};
