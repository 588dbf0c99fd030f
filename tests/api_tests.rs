// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! End-to-end scenarios over the router: selector payload and the three
//! comparison outcomes the app can show.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_health_check() {
    let app = common::create_test_app(vec![], None);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_countries_listed_in_directory_order() {
    let app = common::create_test_app(common::sample_countries(), Some(7500));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/countries")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;

    assert_eq!(body["step_data_available"], true);
    let countries = body["countries"].as_array().unwrap();
    assert_eq!(countries.len(), 2);
    assert_eq!(countries[0]["name"], "Japan");
    assert_eq!(countries[0]["average_daily_steps"], 6000);
    assert_eq!(countries[1]["name"], "USA");
}

#[tokio::test]
async fn test_empty_directory_still_serves_selector() {
    let app = common::create_test_app(vec![], None);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/countries")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert!(body["countries"].as_array().unwrap().is_empty());
    assert_eq!(body["step_data_available"], false);
}

#[tokio::test]
async fn test_comparison_user_ahead() {
    // Scenario A: Japan averages 6000, device walked 7500
    let app = common::create_test_app(common::sample_countries(), Some(7500));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/comparison?country=1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;

    assert_eq!(body["country"]["name"], "Japan");
    assert_eq!(body["outcome"], "ahead");
    assert_eq!(body["device_steps"], 7500);
    assert_eq!(body["deficit"], serde_json::Value::Null);
    assert_eq!(
        body["selection_line"],
        "People in Japan walk an average of 6000 steps per day."
    );
    assert_eq!(
        body["message"],
        "You walked 7500 over the past day. That's more than the selected country's average! Good job!"
    );
}

#[tokio::test]
async fn test_comparison_user_behind() {
    // Scenario B: USA averages 5000, device walked 3000
    let app = common::create_test_app(common::sample_countries(), Some(3000));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/comparison?country=2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;

    assert_eq!(body["outcome"], "behind");
    assert_eq!(body["device_steps"], 3000);
    assert_eq!(body["deficit"], 2000);
    assert_eq!(
        body["message"],
        "You walked 3000 steps over the past day. You need to walk 2000 more steps to reach that country's average."
    );
}

#[tokio::test]
async fn test_comparison_reading_unavailable() {
    // Scenario C: no device reading (simulator), selection is irrelevant
    let app = common::create_test_app(common::sample_countries(), None);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/comparison?country=1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;

    assert_eq!(body["outcome"], "unavailable");
    assert_eq!(body["device_steps"], serde_json::Value::Null);
    assert_eq!(
        body["message"],
        "Unable to fetch step data from your device. Are you running this in a simulator?"
    );
}

#[tokio::test]
async fn test_comparison_tie_is_ahead() {
    let app = common::create_test_app(common::sample_countries(), Some(6000));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/comparison?country=1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = common::body_json(response).await;
    assert_eq!(body["outcome"], "ahead");
    assert_eq!(body["deficit"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_comparison_unknown_country_is_404() {
    let app = common::create_test_app(common::sample_countries(), Some(7500));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/comparison?country=42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_comparison_missing_country_param_is_400() {
    let app = common::create_test_app(common::sample_countries(), Some(7500));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/comparison")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_comparison_malformed_country_param_is_400() {
    let app = common::create_test_app(common::sample_countries(), Some(7500));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/comparison?country=sparta")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_cors_preflight() {
    let app = common::create_test_app(common::sample_countries(), Some(7500));

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/countries")
                .header(header::ORIGIN, "http://localhost:5173")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // OPTIONS should return 200 (CORS preflight success)
    assert_eq!(response.status(), StatusCode::OK);

    // Should have CORS headers
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
}

#[tokio::test]
async fn test_comparison_on_empty_directory_is_404() {
    let app = common::create_test_app(vec![], Some(7500));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/comparison?country=1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
