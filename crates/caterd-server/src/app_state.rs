// ABOUTME: Shared application state for the caterd HTTP server.
// ABOUTME: Holds the injected store handle and the token service behind an Arc.

use std::sync::Arc;

use caterd_store::ContentStore;

use crate::auth::TokenService;

/// Shared application state accessible by all Axum handlers. The store is an
/// injected trait object so tests can substitute the in-memory double.
pub struct AppState {
    pub store: Arc<dyn ContentStore>,
    pub tokens: Arc<TokenService>,
}

/// Type alias for the Arc-wrapped state used with Axum's State extractor.
pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(store: Arc<dyn ContentStore>, tokens: TokenService) -> Self {
        Self {
            store,
            tokens: Arc::new(tokens),
        }
    }
}
