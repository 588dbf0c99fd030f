// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Step comparison evaluator.
//!
//! The one piece of decision logic in the app: turn (device reading,
//! country average) into an outcome and the one-line message shown to
//! the user.

/// Outcome of comparing the device's trailing-day step count against a
/// country's average.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// No device reading was obtainable (simulator, denied permission).
    Unavailable,
    /// The user matched or beat the country average.
    UserAhead {
        device_steps: u64,
        country_steps: u64,
    },
    /// The user is short of the country average by `deficit` steps.
    UserBehind {
        device_steps: u64,
        country_steps: u64,
        deficit: u64,
    },
}

/// Compare a device step reading against a country's average daily steps.
///
/// Pure and total: an absent reading is a normal outcome, not an error,
/// and an exact tie counts as ahead. `UserBehind.deficit` is therefore
/// always strictly positive.
pub fn evaluate(device_steps: Option<u64>, country_average: u64) -> Comparison {
    let Some(steps) = device_steps else {
        return Comparison::Unavailable;
    };

    if steps >= country_average {
        Comparison::UserAhead {
            device_steps: steps,
            country_steps: country_average,
        }
    } else {
        Comparison::UserBehind {
            device_steps: steps,
            country_steps: country_average,
            deficit: country_average - steps,
        }
    }
}

impl Comparison {
    /// Stable outcome tag for API payloads.
    pub fn outcome(&self) -> &'static str {
        match self {
            Comparison::Unavailable => "unavailable",
            Comparison::UserAhead { .. } => "ahead",
            Comparison::UserBehind { .. } => "behind",
        }
    }

    /// The device reading that produced this outcome, if there was one.
    pub fn device_steps(&self) -> Option<u64> {
        match self {
            Comparison::Unavailable => None,
            Comparison::UserAhead { device_steps, .. }
            | Comparison::UserBehind { device_steps, .. } => Some(*device_steps),
        }
    }

    /// Steps still needed to reach the average (behind outcome only).
    pub fn deficit(&self) -> Option<u64> {
        match self {
            Comparison::UserBehind { deficit, .. } => Some(*deficit),
            _ => None,
        }
    }

    /// Render the one-line message shown to the user.
    ///
    /// The "ahead" wording deliberately omits the word "steps" after the
    /// count; that is how the app has always phrased it.
    pub fn message(&self) -> String {
        match self {
            Comparison::Unavailable => {
                "Unable to fetch step data from your device. Are you running this in a simulator?"
                    .to_string()
            }
            Comparison::UserAhead { device_steps, .. } => format!(
                "You walked {} over the past day. That's more than the selected country's average! Good job!",
                device_steps
            ),
            Comparison::UserBehind {
                device_steps,
                deficit,
                ..
            } => format!(
                "You walked {} steps over the past day. You need to walk {} more steps to reach that country's average.",
                device_steps, deficit
            ),
        }
    }
}
