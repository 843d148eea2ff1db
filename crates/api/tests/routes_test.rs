//! Integration tests for the HTTP query surface.

use actix_web::{http::StatusCode, test, web, App};
use recommender_api::{routes, AppState};
use recommender_core::{CatalogItem, Interaction, User};
use recommender_engine::RecommendationEngine;

fn sample_state() -> web::Data<AppState> {
    let users = vec![User {
        id: 1,
        interests: vec!["fitness".to_string()],
        age: Some(30),
        gender: String::new(),
        income_level: String::new(),
        education_level: String::new(),
        subscription_tier: String::new(),
        customer_segment: String::new(),
        location: String::new(),
        device: String::new(),
        login_frequency: String::new(),
    }];

    let items = vec![
        CatalogItem::new(
            1,
            "Trail Runner",
            "footwear",
            "running shoes",
            vec!["fitness".to_string()],
        ),
        CatalogItem::new(
            2,
            "Desk Chair",
            "office",
            "desk chair",
            vec!["office".to_string()],
        ),
    ];

    let interactions = vec![
        Interaction {
            user_id: 1,
            item_id: 2,
            kind: "purchase".to_string(),
            timestamp: None,
            rating: Some(5.0),
            payment_method: "card".to_string(),
        },
        Interaction {
            user_id: 1,
            item_id: 2,
            kind: "purchase".to_string(),
            timestamp: None,
            rating: Some(4.0),
            payment_method: "card".to_string(),
        },
    ];

    let engine = RecommendationEngine::new(users, items, interactions).unwrap();
    web::Data::new(AppState::new(engine))
}

#[actix_web::test]
async fn recommendations_returns_contract_shape() {
    let app = test::init_service(
        App::new()
            .app_data(sample_state())
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/recommendations?user_id=1&top_n=2")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["user_id"], 1);
    let recs = body["recommendations"].as_array().unwrap();
    assert_eq!(recs.len(), 2);
    for rec in recs {
        assert!(rec["item_id"].is_u64());
        assert!(rec["name"].is_string());
        assert!(rec["category"].is_string());
        assert!(rec["score"].is_number());
    }
}

#[actix_web::test]
async fn unknown_user_serves_the_popularity_ranking() {
    let app = test::init_service(
        App::new()
            .app_data(sample_state())
            .configure(routes::configure),
    )
    .await;

    let personalized = test::TestRequest::get()
        .uri("/recommendations?user_id=999&top_n=2")
        .to_request();
    let fallback: serde_json::Value = test::call_and_read_body_json(&app, personalized).await;

    let popular = test::TestRequest::get()
        .uri("/popular?top_n=2")
        .to_request();
    let popular: serde_json::Value = test::call_and_read_body_json(&app, popular).await;

    assert_eq!(fallback["recommendations"], popular["recommendations"]);
}

#[actix_web::test]
async fn zero_top_n_is_rejected() {
    let app = test::init_service(
        App::new()
            .app_data(sample_state())
            .configure(routes::configure),
    )
    .await;

    for uri in ["/recommendations?user_id=1&top_n=0", "/popular?top_n=0"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[actix_web::test]
async fn top_n_defaults_to_five() {
    let app = test::init_service(
        App::new()
            .app_data(sample_state())
            .configure(routes::configure),
    )
    .await;

    // Only two items exist, so the default of 5 returns the full catalog.
    let req = test::TestRequest::get().uri("/popular").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn malformed_user_id_is_a_client_error() {
    let app = test::init_service(
        App::new()
            .app_data(sample_state())
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/recommendations?user_id=abc")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn health_endpoint_reports_healthy() {
    let app = test::init_service(
        App::new()
            .app_data(sample_state())
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "recommender-api");
}
