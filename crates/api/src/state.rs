//! Shared application state.

use recommender_engine::RecommendationEngine;

/// State shared across workers.
///
/// The engine is read-only after startup (tables and content profiles are
/// frozen at build time), so sharing it behind `web::Data` needs no interior
/// locking.
pub struct AppState {
    pub engine: RecommendationEngine,
}

impl AppState {
    pub fn new(engine: RecommendationEngine) -> Self {
        Self { engine }
    }
}
