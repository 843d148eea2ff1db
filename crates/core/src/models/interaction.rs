//! Interaction models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the interaction log.
///
/// There is no uniqueness constraint: a user may interact with the same item
/// any number of times and every row counts toward popularity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    /// The interacting user.
    pub user_id: u64,

    /// The item interacted with.
    pub item_id: u64,

    /// Interaction kind, e.g. "view", "purchase" (normalized lowercase).
    pub kind: String,

    /// When the interaction happened; `None` when the source value did not
    /// parse.
    pub timestamp: Option<DateTime<Utc>>,

    /// Rating left with the interaction; `None` when absent or unparsable.
    /// Popularity aggregation coerces missing ratings to 0.
    pub rating: Option<f32>,

    /// Payment method label (normalized lowercase; empty for non-purchase
    /// interactions).
    pub payment_method: String,
}
