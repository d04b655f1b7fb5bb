use std::sync::Arc;

use crate::assistant::SelectionStrategy;
use crate::config::Config;
use crate::models::CandidateProfile;
use crate::store::CollectionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Persistence backend. JSON files in production, in-memory in tests.
    pub store: Arc<dyn CollectionStore>,
    /// Pluggable assistant selection. Default: RandomSelection. Swap via
    /// SELECTION_STRATEGY env.
    pub selector: Arc<dyn SelectionStrategy>,
    /// Static candidate catalog, built once at startup so repeated filter
    /// calls see the same pool.
    pub pool: Arc<Vec<CandidateProfile>>,
    pub config: Config,
}
