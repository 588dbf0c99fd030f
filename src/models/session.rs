// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-session state: the two collaborator results, joined for the picker.
//!
//! A `Session` is a plain value built by two pure updates, one per
//! completed fetch. Nothing mutates it afterwards; the presentation
//! layer only reads it.

use crate::models::comparison::{evaluate, Comparison};
use crate::models::CountryStat;

/// Session state captured at startup.
#[derive(Debug, Clone, Default)]
pub struct Session {
    countries: Vec<CountryStat>,
    reading: Option<u64>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pure update applied when the directory fetch completes.
    pub fn with_countries(mut self, countries: Vec<CountryStat>) -> Self {
        self.countries = countries;
        self
    }

    /// Pure update applied when the pedometer read completes.
    pub fn with_reading(mut self, reading: Option<u64>) -> Self {
        self.reading = reading;
        self
    }

    /// Directory entries in document order, for the selector.
    pub fn countries(&self) -> &[CountryStat] {
        &self.countries
    }

    /// The device step reading captured at session start.
    pub fn reading(&self) -> Option<u64> {
        self.reading
    }

    /// Look up a directory entry by ID.
    pub fn country(&self, id: u64) -> Option<&CountryStat> {
        self.countries.iter().find(|c| c.id == id)
    }

    /// Evaluate a selection against the stored reading.
    ///
    /// Returns `None` when the ID matches no directory entry, which
    /// covers the empty-directory case as well.
    pub fn compare(&self, country_id: u64) -> Option<(&CountryStat, Comparison)> {
        self.country(country_id)
            .map(|c| (c, evaluate(self.reading, c.average_daily_steps)))
    }
}
