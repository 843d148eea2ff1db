//! User models.

use serde::{Deserialize, Serialize};

/// A registered user as loaded from the user table.
///
/// Only `id` and `interests` drive scoring; the demographic attributes are
/// carried through from the source table for downstream consumers. The table
/// is loaded once at startup and is immutable for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: u64,

    /// Normalized interest terms (lowercase, trimmed). Order is preserved and
    /// duplicates are not removed.
    pub interests: Vec<String>,

    /// Age in years, when the source value was parseable.
    pub age: Option<u32>,

    /// Self-reported gender (normalized lowercase).
    pub gender: String,

    /// Income bracket label (normalized lowercase).
    pub income_level: String,

    /// Education bracket label (normalized lowercase).
    pub education_level: String,

    /// Subscription tier label (normalized lowercase).
    pub subscription_tier: String,

    /// Customer segment label (normalized lowercase).
    pub customer_segment: String,

    /// Location label (normalized lowercase).
    pub location: String,

    /// Primary device label (normalized lowercase).
    pub device: String,

    /// Login frequency label (normalized lowercase).
    pub login_frequency: String,
}
