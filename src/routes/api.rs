// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes for the picker UI.
//!
//! Handlers only call through to the session; the comparison itself
//! lives in `models::comparison`.

use crate::error::{AppError, Result};
use crate::models::CountryStat;
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Picker API routes (public, read-only).
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/countries", get(get_countries))
        .route("/api/comparison", get(get_comparison))
}

// ─── Country Selector ────────────────────────────────────────

/// One selectable country.
#[derive(Serialize, Clone, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CountrySummary {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    pub name: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub average_daily_steps: u64,
}

impl From<&CountryStat> for CountrySummary {
    fn from(stat: &CountryStat) -> Self {
        Self {
            id: stat.id,
            name: stat.name.clone(),
            average_daily_steps: stat.average_daily_steps,
        }
    }
}

/// Selector payload.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CountriesResponse {
    /// Countries in directory order (may be empty if the fetch failed)
    pub countries: Vec<CountrySummary>,
    /// Whether a device step reading was captured this session
    pub step_data_available: bool,
}

/// List the selectable countries.
async fn get_countries(State(state): State<Arc<AppState>>) -> Json<CountriesResponse> {
    let countries = state
        .session
        .countries()
        .iter()
        .map(CountrySummary::from)
        .collect();

    Json(CountriesResponse {
        countries,
        step_data_available: state.session.reading().is_some(),
    })
}

// ─── Comparison ──────────────────────────────────────────────

#[derive(Deserialize)]
struct ComparisonQuery {
    /// Selected country ID
    country: Option<u64>,
}

/// Comparison payload for a selected country.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ComparisonResponse {
    pub country: CountrySummary,
    /// "People in {name} walk an average of {steps} steps per day."
    pub selection_line: String,
    /// "unavailable" | "ahead" | "behind"
    pub outcome: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number | null"))]
    pub device_steps: Option<u64>,
    #[cfg_attr(feature = "binding-generation", ts(type = "number | null"))]
    pub deficit: Option<u64>,
    pub message: String,
}

/// Compare the device reading against the selected country's average.
async fn get_comparison(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ComparisonQuery>,
) -> Result<Json<ComparisonResponse>> {
    let country_id = params
        .country
        .ok_or_else(|| AppError::BadRequest("Missing 'country' parameter".to_string()))?;

    let (country, comparison) = state
        .session
        .compare(country_id)
        .ok_or_else(|| AppError::NotFound(format!("Country {} not found", country_id)))?;

    tracing::debug!(
        country = %country.name,
        outcome = comparison.outcome(),
        "Comparison evaluated"
    );

    Ok(Json(ComparisonResponse {
        country: CountrySummary::from(country),
        selection_line: country.selection_line(),
        outcome: comparison.outcome().to_string(),
        device_steps: comparison.device_steps(),
        deficit: comparison.deficit(),
        message: comparison.message(),
    }))
}
