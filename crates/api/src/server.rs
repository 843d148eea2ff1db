//! HTTP server bootstrap.

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use recommender_core::{ConfigLoader, DataConfig, ServiceConfig};
use recommender_engine::RecommendationEngine;
use recommender_ingestion::load_all;
use tracing::info;

use crate::middleware::RequestIdMiddleware;
use crate::routes;
use crate::state::AppState;

pub struct Server {
    service: ServiceConfig,
    data: DataConfig,
}

impl Server {
    /// Load and validate configuration from the environment.
    pub fn from_env() -> anyhow::Result<Self> {
        let service = ServiceConfig::from_env()?;
        service.validate()?;

        let data = DataConfig::from_env()?;
        data.validate()?;

        Ok(Self { service, data })
    }

    /// Load the tables, build content profiles once, and serve until
    /// shutdown.
    pub async fn run(self) -> anyhow::Result<()> {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&self.service.log_level)),
            )
            .json()
            .init();

        info!("Starting Catalog Recommender API");
        info!("Version: {}", env!("CARGO_PKG_VERSION"));

        let tables = load_all(
            &self.data.users_path,
            &self.data.items_path,
            &self.data.interactions_path,
        )
        .context("loading catalog tables")?;

        let engine = RecommendationEngine::new(tables.users, tables.items, tables.interactions)
            .context("building content profiles")?;
        info!(
            users = engine.user_count(),
            items = engine.item_count(),
            vocabulary = engine.vocabulary_size(),
            "recommendation engine ready"
        );

        let state = web::Data::new(AppState::new(engine));

        let bind_addr = format!("{}:{}", self.service.host, self.service.port);
        info!("Binding to {}", bind_addr);

        HttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .wrap(RequestIdMiddleware)
                .configure(routes::configure)
        })
        .workers(self.service.workers)
        .bind(&bind_addr)?
        .run()
        .await?;

        Ok(())
    }
}
