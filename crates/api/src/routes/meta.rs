//! Service banner and health endpoints.

use actix_web::{web, HttpResponse};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health));
}

async fn root() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Catalog Recommender API is running"
    }))
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "recommender-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
