//! Popularity aggregation over the interaction log.

use std::collections::HashMap;

use recommender_core::Interaction;

/// Floor for the count-normalization denominator, so a degenerate
/// distribution (every item equally popular) normalizes to 0 instead of
/// dividing by zero.
const NORM_EPSILON: f32 = 1e-9;

/// Per-item aggregate of the interaction log.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopularityStats {
    /// Arithmetic mean of the rating field, with missing ratings counted
    /// as 0. An item with interactions but no ratings scores 0, not
    /// "no data".
    pub mean_rating: f32,
    /// Number of interaction rows, with or without a rating.
    pub count: u64,
}

impl PopularityStats {
    /// Neutral stats for an item absent from the interaction log.
    pub const ZERO: PopularityStats = PopularityStats {
        mean_rating: 0.0,
        count: 0,
    };
}

/// Reduce the interaction log to one aggregate per item.
///
/// Items without interactions are absent from the result; callers merge
/// against the full catalog with [`PopularityStats::ZERO`] fill. This runs on
/// every query so rankings always reflect the current interaction table; a
/// caller serving at scale can memoize the result for a table snapshot.
pub fn aggregate(interactions: &[Interaction]) -> HashMap<u64, PopularityStats> {
    let mut sums: HashMap<u64, (f32, u64)> = HashMap::new();
    for interaction in interactions {
        let entry = sums.entry(interaction.item_id).or_insert((0.0, 0));
        entry.0 += interaction.rating.unwrap_or(0.0);
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(item_id, (rating_sum, count))| {
            (
                item_id,
                PopularityStats {
                    mean_rating: rating_sum / count as f32,
                    count,
                },
            )
        })
        .collect()
}

/// Min-max normalize interaction counts to `[0, 1]` across all aggregated
/// items.
pub fn normalized_counts(stats: &HashMap<u64, PopularityStats>) -> HashMap<u64, f32> {
    if stats.is_empty() {
        return HashMap::new();
    }

    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for s in stats.values() {
        let count = s.count as f32;
        min = min.min(count);
        max = max.max(count);
    }

    stats
        .iter()
        .map(|(&item_id, s)| {
            let count = s.count as f32;
            (item_id, (count - min) / (max - min + NORM_EPSILON))
        })
        .collect()
}
