use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::AppConfig;
use crate::models::LeagueSnapshot;
use crate::storage::LeagueStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<LeagueStore>>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(store: LeagueStore, config: AppConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            config: Arc::new(config),
        }
    }

    /// Owned copy of the league, taken under a short read lock.
    pub async fn snapshot(&self) -> LeagueSnapshot {
        self.store.read().await.snapshot()
    }
}
