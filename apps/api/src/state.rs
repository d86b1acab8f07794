use std::sync::Arc;

use crate::fortune::guard::LookupGuard;
use crate::fortune::service::FortuneService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub fortune: Arc<FortuneService>,
    /// In-flight lookups keyed by session id.
    pub lookups: LookupGuard,
}

impl AppState {
    pub fn new(fortune: FortuneService) -> Self {
        Self {
            fortune: Arc::new(fortune),
            lookups: LookupGuard::new(),
        }
    }
}
