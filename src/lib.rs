// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Step-Compare: see how your daily steps stack up worldwide
//!
//! This crate provides the backend API for the Compare Your Steps app:
//! it fetches the country step directory, reads the device pedometer for
//! the trailing day, and serves the comparison the picker UI displays.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use models::Session;

/// Shared application state.
pub struct AppState {
    pub session: Session,
}
