pub mod ingestion;
pub mod server;
pub mod standings;
pub mod watcher;
