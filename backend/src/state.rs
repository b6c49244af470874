//! Shared application state injected into every handler as `web::Data<AppState>`.

use crate::config::Config;
use crate::services::uploads::storage::UploadSettings;
use crate::store::AdStore;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<AdStore>,
    pub uploads: Arc<UploadSettings>,
    /// Held across every read-modify-write of the store.
    pub write_gate: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(store: AdStore, uploads: UploadSettings) -> Self {
        Self {
            store: Arc::new(store),
            uploads: Arc::new(uploads),
            write_gate: Arc::new(Mutex::new(())),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            AdStore::new(config.data_file.clone()),
            UploadSettings::from_config(config),
        )
    }
}
