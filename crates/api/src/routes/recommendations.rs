//! Recommendation query routes.

use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::info;

use crate::state::AppState;

const DEFAULT_TOP_N: usize = 5;

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

#[derive(Debug, Deserialize)]
pub struct RecommendationsQuery {
    pub user_id: u64,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

#[derive(Debug, Deserialize)]
pub struct PopularQuery {
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/recommendations", web::get().to(get_recommendations))
        .route("/popular", web::get().to(get_popular));
}

/// Personalized recommendations for a user; unknown users transparently get
/// the popularity ranking.
async fn get_recommendations(
    query: web::Query<RecommendationsQuery>,
    state: web::Data<AppState>,
) -> impl Responder {
    if query.top_n == 0 {
        return bad_request("top_n must be at least 1");
    }

    let recommendations = state.engine.recommend_for_user(query.user_id, query.top_n);
    info!(
        user_id = query.user_id,
        returned = recommendations.len(),
        "served recommendations"
    );

    HttpResponse::Ok().json(serde_json::json!({
        "user_id": query.user_id,
        "recommendations": recommendations,
    }))
}

/// Most popular catalog items.
async fn get_popular(query: web::Query<PopularQuery>, state: web::Data<AppState>) -> impl Responder {
    if query.top_n == 0 {
        return bad_request("top_n must be at least 1");
    }

    let recommendations = state.engine.recommend_by_popularity(query.top_n);

    HttpResponse::Ok().json(serde_json::json!({
        "recommendations": recommendations,
    }))
}

fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": message }))
}
