//! Shared application state for all routes.

use crate::store::SessionSource;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Opens one book session per request.
    pub sessions: Arc<dyn SessionSource>,
}

impl AppState {
    pub fn new(sessions: impl SessionSource + 'static) -> Self {
        Self {
            sessions: Arc::new(sessions),
        }
    }
}
