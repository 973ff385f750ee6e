use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use crate::auth::{AuthService, FileKv, KeyValueStore, MemoryKv};
use crate::config::AppConfig;
use crate::error::{DairyError, DairyResult};
use crate::store::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<Store>>,
    pub auth: Arc<AuthService>,
}

impl axum::extract::FromRef<AppState> for Arc<AuthService> {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}

impl AppState {
    pub fn new(storage: Arc<dyn KeyValueStore>, auth_delay: Duration) -> Self {
        Self {
            store: Arc::new(RwLock::new(Store::new())),
            auth: Arc::new(AuthService::new(storage, auth_delay)),
        }
    }

    pub fn from_config(config: &AppConfig) -> DairyResult<Self> {
        let storage = FileKv::open(&config.session_file)?;
        tracing::info!("Session storage at {}", config.session_file.display());
        Ok(Self::new(Arc::new(storage), config.auth_delay))
    }

    /// Fresh state with in-memory session storage and no login delay.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryKv::new()), Duration::ZERO)
    }

    pub fn read_store(&self) -> DairyResult<RwLockReadGuard<'_, Store>> {
        self.store
            .read()
            .map_err(|_| DairyError::Internal("store lock poisoned".to_string()))
    }

    pub fn write_store(&self) -> DairyResult<RwLockWriteGuard<'_, Store>> {
        self.store
            .write()
            .map_err(|_| DairyError::Internal("store lock poisoned".to_string()))
    }
}
