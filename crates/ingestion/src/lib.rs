//! Catalog Recommender ingestion
//!
//! Loads the delimited user, item, and interaction tables into the in-memory
//! models the scoring engine consumes, applying the normalization the engine
//! expects: lowercased categorical fields, multi-valued splits, and
//! invalid-to-missing coercion of numbers and timestamps.

pub mod loader;
pub mod normalize;

// Re-export main types
pub use loader::{
    load_all, load_interactions, load_interactions_from, load_items, load_items_from, load_users,
    load_users_from, Tables,
};

/// Common error type for the ingestion layer.
#[derive(Debug, thiserror::Error)]
pub enum IngestionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{table} table is missing required column '{column}'")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, IngestionError>;
