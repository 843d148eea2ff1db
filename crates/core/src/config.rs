//! Configuration loading for the Catalog Recommender services.
//!
//! All configuration comes from environment variables with the `RECOMMENDER_`
//! prefix, with a handful of conventional bare fallbacks (`HOST`, `PORT`,
//! `RUST_LOG`). A `.env` file is supported via [`load_dotenv`]. Defaults are
//! applied for every optional value, and [`ConfigLoader::validate`] rejects
//! configurations that cannot serve requests.

use crate::error::RecommenderError;

/// Configuration loader trait.
///
/// Standardized loading and validation of configuration from environment
/// variables.
pub trait ConfigLoader: Sized {
    /// Load configuration from environment variables, applying defaults for
    /// missing optional values.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` if a set variable cannot be parsed.
    fn from_env() -> Result<Self, RecommenderError>;

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` if any validation check fails.
    fn validate(&self) -> Result<(), RecommenderError>;
}

/// HTTP service configuration.
///
/// # Environment Variables
///
/// - `RECOMMENDER_SERVICE_HOST` (optional): bind host (default: "0.0.0.0")
/// - `RECOMMENDER_SERVICE_PORT` (optional): bind port (default: 8080)
/// - `RECOMMENDER_SERVICE_WORKERS` (optional): worker threads (default: CPU count)
/// - `RECOMMENDER_SERVICE_LOG_LEVEL` (optional): log level (default: "info")
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Service bind host
    pub host: String,
    /// Service bind port
    pub port: u16,
    /// Number of worker threads
    pub workers: usize,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            workers: num_cpus::get(),
            log_level: "info".to_string(),
        }
    }
}

impl ConfigLoader for ServiceConfig {
    fn from_env() -> Result<Self, RecommenderError> {
        let host = std::env::var("RECOMMENDER_SERVICE_HOST")
            .or_else(|_| std::env::var("HOST"))
            .unwrap_or_else(|_| ServiceConfig::default().host);

        let port = parse_env_var("RECOMMENDER_SERVICE_PORT", ServiceConfig::default().port)
            .or_else(|_| parse_env_var("PORT", ServiceConfig::default().port))?;

        let workers = parse_env_var(
            "RECOMMENDER_SERVICE_WORKERS",
            ServiceConfig::default().workers,
        )?;

        let log_level = std::env::var("RECOMMENDER_SERVICE_LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| ServiceConfig::default().log_level);

        Ok(Self {
            host,
            port,
            workers,
            log_level,
        })
    }

    fn validate(&self) -> Result<(), RecommenderError> {
        if self.port == 0 {
            return Err(RecommenderError::ConfigurationError {
                message: "port must be greater than 0".to_string(),
                key: Some("RECOMMENDER_SERVICE_PORT".to_string()),
            });
        }

        if self.workers == 0 {
            return Err(RecommenderError::ConfigurationError {
                message: "workers must be greater than 0".to_string(),
                key: Some("RECOMMENDER_SERVICE_WORKERS".to_string()),
            });
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(RecommenderError::ConfigurationError {
                message: format!(
                    "Invalid log_level '{}'. Must be one of: {}",
                    self.log_level,
                    valid_log_levels.join(", ")
                ),
                key: Some("RECOMMENDER_SERVICE_LOG_LEVEL".to_string()),
            });
        }

        Ok(())
    }
}

/// Source-table configuration.
///
/// # Environment Variables
///
/// - `RECOMMENDER_USERS_PATH` (optional): user table (default: "data/users.csv")
/// - `RECOMMENDER_ITEMS_PATH` (optional): item table (default: "data/items.csv")
/// - `RECOMMENDER_INTERACTIONS_PATH` (optional): interaction table
///   (default: "data/interactions.csv")
#[derive(Debug, Clone)]
pub struct DataConfig {
    /// Path to the delimited user table
    pub users_path: String,
    /// Path to the delimited item table
    pub items_path: String,
    /// Path to the delimited interaction table
    pub interactions_path: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            users_path: "data/users.csv".to_string(),
            items_path: "data/items.csv".to_string(),
            interactions_path: "data/interactions.csv".to_string(),
        }
    }
}

impl ConfigLoader for DataConfig {
    fn from_env() -> Result<Self, RecommenderError> {
        let defaults = DataConfig::default();

        let users_path =
            std::env::var("RECOMMENDER_USERS_PATH").unwrap_or(defaults.users_path);
        let items_path =
            std::env::var("RECOMMENDER_ITEMS_PATH").unwrap_or(defaults.items_path);
        let interactions_path = std::env::var("RECOMMENDER_INTERACTIONS_PATH")
            .unwrap_or(defaults.interactions_path);

        Ok(Self {
            users_path,
            items_path,
            interactions_path,
        })
    }

    fn validate(&self) -> Result<(), RecommenderError> {
        for (key, path) in [
            ("RECOMMENDER_USERS_PATH", &self.users_path),
            ("RECOMMENDER_ITEMS_PATH", &self.items_path),
            ("RECOMMENDER_INTERACTIONS_PATH", &self.interactions_path),
        ] {
            if path.trim().is_empty() {
                return Err(RecommenderError::ConfigurationError {
                    message: format!("{} must not be empty", key),
                    key: Some(key.to_string()),
                });
            }
        }

        Ok(())
    }
}

/// Parse an environment variable with a default value.
///
/// # Errors
///
/// Returns a `ConfigurationError` if the variable is set but cannot be parsed.
fn parse_env_var<T>(key: &str, default: T) -> Result<T, RecommenderError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    std::env::var(key)
        .ok()
        .map(|v| {
            v.parse::<T>()
                .map_err(|e| RecommenderError::ConfigurationError {
                    message: format!("Failed to parse {}: {}", key, e),
                    key: Some(key.to_string()),
                })
        })
        .unwrap_or(Ok(default))
}

/// Load a `.env` file if present.
///
/// Missing files are not an error; any other failure is reported on stderr
/// because logging is not initialized yet at this point.
pub fn load_dotenv() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.to_string().contains("not found") {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }
}
