// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Country directory client.
//!
//! Fetches the remote JSON directory of countries and their average
//! daily step counts, once per session. Malformed records are skipped;
//! a failed fetch degrades to an empty directory and the picker simply
//! shows nothing.

use crate::error::AppError;
use crate::models::CountryStat;
use serde::Deserialize;

/// Top-level shape of the directory document.
///
/// The records live under `value`; each one is decoded individually so
/// a bad record cannot take down its neighbors.
#[derive(Debug, Deserialize)]
struct DirectoryDocument {
    #[serde(default)]
    value: Vec<serde_json::Value>,
}

/// Remote country directory client.
#[derive(Clone)]
pub struct DirectoryClient {
    http: reqwest::Client,
    url: String,
}

impl DirectoryClient {
    /// Create a client for the given directory document URL.
    pub fn new(url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            url,
        }
    }

    /// Fetch and parse the directory document.
    pub async fn fetch_countries(&self) -> Result<Vec<CountryStat>, AppError> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| AppError::Directory(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Directory(format!("HTTP {}: {}", status, body)));
        }

        let document: DirectoryDocument = response
            .json()
            .await
            .map_err(|e| AppError::Directory(format!("JSON parse error: {}", e)))?;

        Ok(parse_records(document))
    }

    /// Session-bootstrap fetch: failures are logged and absorbed into an
    /// empty directory. Called once at startup, never retried.
    pub async fn fetch_countries_or_empty(&self) -> Vec<CountryStat> {
        match self.fetch_countries().await {
            Ok(countries) => {
                tracing::info!(count = countries.len(), "Country directory loaded");
                countries
            }
            Err(e) => {
                tracing::error!(error = %e, url = %self.url, "Country directory fetch failed");
                Vec::new()
            }
        }
    }
}

/// Parse a raw directory document.
///
/// Exposed so tests and benches can drive the parser without a server.
pub fn parse_directory(json: &str) -> Result<Vec<CountryStat>, AppError> {
    let document: DirectoryDocument = serde_json::from_str(json)
        .map_err(|e| AppError::Directory(format!("JSON parse error: {}", e)))?;
    Ok(parse_records(document))
}

/// Decode records one by one, dropping any that don't match the schema.
fn parse_records(document: DirectoryDocument) -> Vec<CountryStat> {
    let total = document.value.len();
    let countries: Vec<CountryStat> = document
        .value
        .into_iter()
        .filter_map(|record| serde_json::from_value(record).ok())
        .collect();

    if countries.len() < total {
        tracing::warn!(
            skipped = total - countries.len(),
            parsed = countries.len(),
            "Directory contained malformed records"
        );
    }

    countries
}
