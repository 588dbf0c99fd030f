// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Country step directory model.

use serde::Deserialize;

/// One country's average daily step count, as published in the remote
/// directory document.
///
/// Wire format per record: `{"id": 1, "location": "Japan", "steps": 6000}`.
/// A record deserializes straight into this type; anything missing or
/// wrong-typed (including negative counts) fails the record, not the
/// document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountryStat {
    /// Directory record ID (unique within the document)
    pub id: u64,
    /// Country name
    #[serde(rename = "location")]
    pub name: String,
    /// Average daily steps across the population
    #[serde(rename = "steps")]
    pub average_daily_steps: u64,
}

impl CountryStat {
    /// The line shown when this country is picked in the selector.
    pub fn selection_line(&self) -> String {
        format!(
            "People in {} walk an average of {} steps per day.",
            self.name, self.average_daily_steps
        )
    }
}
