// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod comparison;
pub mod country;
pub mod session;

pub use comparison::{evaluate, Comparison};
pub use country::CountryStat;
pub use session::Session;
