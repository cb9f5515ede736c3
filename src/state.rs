use crate::config::settings::AppConfig;
use crate::infrastructure::db::pool::DbPool;
use crate::infrastructure::storage::local::LocalStorage;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub db: DbPool,
    pub storage: LocalStorage,
}

impl AppState {
    pub fn new(config: AppConfig, db: DbPool, storage: LocalStorage) -> Self {
        Self {
            config,
            db,
            storage,
        }
    }
}
