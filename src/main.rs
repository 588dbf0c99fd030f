// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Step-Compare API Server
//!
//! Backend for the Compare Your Steps app: one country directory fetch,
//! one pedometer read, both at startup, joined into the session the API
//! answers from.

use std::sync::Arc;
use step_compare::{
    config::Config,
    models::Session,
    services::{read_steps_last_day, DirectoryClient, NullPedometer, Pedometer, StepLogPedometer},
    AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(
        port = config.port,
        directory = %config.directory_url,
        "Starting Step-Compare API"
    );

    let directory = DirectoryClient::new(config.directory_url.clone());

    let pedometer: Box<dyn Pedometer> = match &config.step_log_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Using step log pedometer");
            Box::new(StepLogPedometer::open(path))
        }
        None => {
            tracing::info!("No step log configured, device reading will be unavailable");
            Box::new(NullPedometer)
        }
    };

    // The two session fetches are independent of each other; they are
    // joined only here, where the session needs both results.
    let (countries, reading) = tokio::join!(
        directory.fetch_countries_or_empty(),
        read_steps_last_day(pedometer.as_ref()),
    );

    let session = Session::new()
        .with_countries(countries)
        .with_reading(reading);
    tracing::info!(
        countries = session.countries().len(),
        step_data = session.reading().is_some(),
        "Session ready"
    );

    // Build router
    let app = step_compare::routes::create_router(Arc::new(AppState { session }));

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("step_compare=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
