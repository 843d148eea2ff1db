//! Catalog Recommender scoring engine
//!
//! Ranks catalog items for a user by blending two signals: cosine similarity
//! between the user's interest terms and per-item TF-IDF text profiles, and
//! item popularity aggregated from the interaction log. Users the engine
//! cannot resolve fall back to a popularity-only ranking.

pub mod popularity;
pub mod profiles;
pub mod recommendation;
pub mod vectorizer;

// Re-export key types
pub use popularity::{aggregate, normalized_counts, PopularityStats};
pub use profiles::{ContentProfileBuilder, ContentProfiles};
pub use recommendation::{BlendWeights, RankedItem, RecommendationEngine};
pub use vectorizer::TfidfVectorizer;

/// Errors raised while building engine state.
///
/// Queries themselves never fail: every missing-data condition is normalized
/// to a zero score instead.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("duplicate item id {id} in catalog")]
    DuplicateItemId { id: u64 },
}

pub type Result<T> = std::result::Result<T, EngineError>;
