//! Integration tests for the health endpoint

use actix_web::{test, web, App};
use repopulse::routes;
use serde_json::Value;

#[actix_web::test]
async fn test_liveness_returns_ok() {
    let app =
        test::init_service(App::new().route("/health", web::get().to(routes::health::liveness)))
            .await;

    let req = test::TestRequest::get().uri("/health").to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let content_type = resp
        .headers()
        .get("content-type")
        .expect("Content-Type header missing");
    assert!(content_type.to_str().unwrap().contains("application/json"));

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn test_health_post_returns_error() {
    let app =
        test::init_service(App::new().route("/health", web::get().to(routes::health::liveness)))
            .await;

    let req = test::TestRequest::post().uri("/health").to_request();

    let resp = test::call_service(&app, req).await;
    // Actix-web returns 404 when no route matches the method
    assert!(resp.status().is_client_error());
}
