//! Hybrid scoring and the popularity fallback.

use recommender_core::math::cosine_similarity;
use recommender_core::{CatalogItem, Interaction, User};
use serde::Serialize;
use tracing::debug;

use crate::popularity::{self, PopularityStats};
use crate::profiles::{ContentProfileBuilder, ContentProfiles};
use crate::Result;

/// Blend coefficients for both ranking paths.
///
/// These are fixed configuration, not learned parameters; they are exposed as
/// a struct so the engine can be exercised under alternative weightings
/// without code change.
#[derive(Debug, Clone, Copy)]
pub struct BlendWeights {
    /// Weight of the interest-similarity term in the hybrid score.
    pub similarity: f32,
    /// Weight of the normalized interaction count in the hybrid score.
    pub popularity: f32,
    /// Weight of the mean rating in the popularity-only score.
    pub rating: f32,
    /// Weight of the raw interaction count in the popularity-only score.
    /// Counts are deliberately left unnormalized on this path, so
    /// high-volume items dominate.
    pub volume: f32,
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            similarity: 0.7,
            popularity: 0.3,
            rating: 0.6,
            volume: 0.4,
        }
    }
}

/// One row of a ranked result.
///
/// Exactly the fields the serving boundary returns, in column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedItem {
    pub item_id: u64,
    pub name: String,
    pub category: String,
    pub score: f32,
}

/// The scoring engine.
///
/// Owns the loaded tables and the frozen content profiles. Every query is a
/// pure function of that state: there are exactly two operating modes,
/// personalized and popularity-only, chosen once per query from whether the
/// user id resolves.
#[derive(Debug)]
pub struct RecommendationEngine {
    users: Vec<User>,
    items: Vec<CatalogItem>,
    interactions: Vec<Interaction>,
    profiles: ContentProfiles,
    weights: BlendWeights,
}

impl RecommendationEngine {
    /// Build the engine, fitting content profiles over the catalog once.
    ///
    /// # Errors
    ///
    /// Fails fast on a catalog with duplicate item ids; see
    /// [`ContentProfileBuilder::build`].
    pub fn new(
        users: Vec<User>,
        mut items: Vec<CatalogItem>,
        interactions: Vec<Interaction>,
    ) -> Result<Self> {
        let profiles = ContentProfileBuilder::build(&mut items)?;
        Ok(Self {
            users,
            items,
            interactions,
            profiles,
            weights: BlendWeights::default(),
        })
    }

    /// Override the blend coefficients.
    pub fn with_weights(mut self, weights: BlendWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Size of the fitted vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.profiles.vectorizer().vocabulary_size()
    }

    /// Personalized ranking for a user.
    ///
    /// Unknown users fall back to [`Self::recommend_by_popularity`]; that is
    /// the designed degraded path, not an error. A user with no interests
    /// gets a zero similarity vector and is effectively ranked by popularity
    /// alone.
    pub fn recommend_for_user(&self, user_id: u64, top_n: usize) -> Vec<RankedItem> {
        let Some(user) = self.users.iter().find(|u| u.id == user_id) else {
            debug!(user_id, "unknown user, serving popularity ranking");
            return self.recommend_by_popularity(top_n);
        };

        let query = user.interests.join(" ");
        let query_vector = self.profiles.vectorizer().project_text(&query);

        let stats = popularity::aggregate(&self.interactions);
        let norm_counts = popularity::normalized_counts(&stats);

        let scored = self.items.iter().map(|item| {
            let similarity = self
                .profiles
                .row(item.id)
                .map(|row| cosine_similarity(&query_vector, row))
                .unwrap_or(0.0);
            let norm_count = norm_counts.get(&item.id).copied().unwrap_or(0.0);
            let score =
                self.weights.similarity * similarity + self.weights.popularity * norm_count;
            (item, score)
        });

        rank(scored.collect(), top_n)
    }

    /// Popularity-only ranking over the whole catalog:
    /// `mean_rating * rating + raw_count * volume`.
    ///
    /// Serves the explicit "most popular" query and the unknown-user
    /// fallback through this single code path.
    pub fn recommend_by_popularity(&self, top_n: usize) -> Vec<RankedItem> {
        let stats = popularity::aggregate(&self.interactions);

        let scored = self.items.iter().map(|item| {
            let s = stats
                .get(&item.id)
                .copied()
                .unwrap_or(PopularityStats::ZERO);
            let score = self.weights.rating * s.mean_rating + self.weights.volume * s.count as f32;
            (item, score)
        });

        rank(scored.collect(), top_n)
    }
}

/// Sort scored items descending and keep the first `top_n`.
///
/// The sort is stable, so ties keep the original catalog order. Display
/// attributes travel with the item reference, keyed by identity rather than
/// by position in the sorted output.
fn rank(mut scored: Vec<(&CatalogItem, f32)>, top_n: usize) -> Vec<RankedItem> {
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(top_n);

    scored
        .into_iter()
        .map(|(item, score)| RankedItem {
            item_id: item.id,
            name: item.name.clone(),
            category: item.category.clone(),
            score,
        })
        .collect()
}
