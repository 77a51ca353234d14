//! Shared application state for all routes.

use crate::service::KurbanStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Data Access Layer. PostgreSQL in production, in-memory in tests.
    pub store: Arc<dyn KurbanStore>,
}

impl AppState {
    pub fn new<S: KurbanStore + 'static>(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
