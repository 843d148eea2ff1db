//! # Recommender Core
//!
//! Shared building blocks for the Catalog Recommender platform: the domain
//! models the tables are loaded into, configuration loading, error types, and
//! the sparse-vector math used by the scoring engine.
//!
//! ## Modules
//!
//! - `models`: domain models for users, catalog items, and interactions
//! - `config`: environment-driven configuration loading and validation
//! - `error`: shared error types
//! - `math`: sparse-vector operations (dot product, norms, cosine similarity)

pub mod config;
pub mod error;
pub mod math;
pub mod models;

// Re-export commonly used types
pub use config::{load_dotenv, ConfigLoader, DataConfig, ServiceConfig};
pub use error::RecommenderError;
pub use math::{cosine_similarity, l2_norm, sparse_dot, SparseVector};
pub use models::{CatalogItem, Interaction, User};

/// Result alias for operations returning a [`RecommenderError`].
pub type Result<T> = std::result::Result<T, RecommenderError>;
