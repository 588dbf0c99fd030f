// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use std::sync::Arc;
use step_compare::models::{CountryStat, Session};
use step_compare::routes::create_router;
use step_compare::AppState;

/// Directory entries used by most scenarios.
#[allow(dead_code)]
pub fn sample_countries() -> Vec<CountryStat> {
    vec![
        CountryStat {
            id: 1,
            name: "Japan".to_string(),
            average_daily_steps: 6000,
        },
        CountryStat {
            id: 2,
            name: "USA".to_string(),
            average_daily_steps: 5000,
        },
    ]
}

/// Create a test app with a pre-built session (no network, no sensor).
#[allow(dead_code)]
pub fn create_test_app(countries: Vec<CountryStat>, reading: Option<u64>) -> axum::Router {
    let session = Session::new()
        .with_countries(countries)
        .with_reading(reading);
    create_router(Arc::new(AppState { session }))
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("body should be JSON")
}
