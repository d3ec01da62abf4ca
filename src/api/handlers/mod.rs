use std::sync::Arc;

use crate::config::AppConfig;
use crate::store::ResultsStore;

pub mod health;
pub mod matches;
pub mod pages;
pub mod teams;

pub struct AppState {
    pub store: Arc<dyn ResultsStore>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn ResultsStore>, config: AppConfig) -> Self {
        Self { store, config }
    }
}
