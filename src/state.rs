use std::sync::Arc;

use crate::config::Config;
use crate::repo::{ClimateStore, SqliteRepo};

/// Shared by every handler; holds no mutable state.
#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<Config>,
    pub store: Arc<dyn ClimateStore>,
}

impl AppState {
    pub fn new(cfg: Config, store: Arc<dyn ClimateStore>) -> Self {
        Self {
            cfg: Arc::new(cfg),
            store,
        }
    }

    /// Production wiring: a lazily connected SQLite pool at `cfg.db.path`.
    pub fn with_sqlite(cfg: Config) -> (Self, SqliteRepo) {
        let repo = SqliteRepo::connect_lazy(&cfg.db);
        let state = Self::new(cfg, Arc::new(repo.clone()));
        (state, repo)
    }
}
