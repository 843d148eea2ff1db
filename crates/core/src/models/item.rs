//! Catalog item models.

use serde::{Deserialize, Serialize};

/// A catalog item as loaded from the item table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Unique item identifier.
    pub id: u64,

    /// Display name.
    pub name: String,

    /// Normalized category label (lowercase, trimmed).
    pub category: String,

    /// Free-text description; empty when the source field was missing.
    pub description: String,

    /// Normalized keyword tags.
    pub keywords: Vec<String>,

    /// List price, when parseable (not used by scoring).
    pub price: Option<f64>,

    /// Average rating carried on the item record (not used by scoring).
    pub avg_rating: Option<f32>,

    /// Applied discount, when parseable (not used by scoring).
    pub discount: Option<f64>,

    /// Units in stock, when parseable (not used by scoring).
    pub stock: Option<i64>,

    /// Cached text profile: keyword tags joined with the description.
    /// Attached by the profile builder; recomputing yields the identical
    /// string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_features: Option<String>,
}

impl CatalogItem {
    /// Construct an item with only the scoring-relevant fields set; the
    /// numeric attributes default to missing.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        keywords: Vec<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            description: description.into(),
            keywords,
            price: None,
            avg_rating: None,
            discount: None,
            stock: None,
            text_features: None,
        }
    }
}
