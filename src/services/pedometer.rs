// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Device pedometer seam.
//!
//! Models the platform motion sensor: three capability flags that must
//! all be present before a query is attempted, and a single step-count
//! query over the trailing day. An absent reading (simulator, denied
//! permission) is a normal outcome, not an error, and is never retried.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Half-open query window `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl StepWindow {
    /// The trailing 24-hour window ending at `end`.
    pub fn trailing_day(end: DateTime<Utc>) -> Self {
        Self {
            start: end - Duration::days(1),
            end,
        }
    }

    /// Whether a sample timestamp falls inside the window.
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end
    }
}

/// Sensor capability flags, mirrored from the platform pedometer.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PedometerCapabilities {
    #[serde(default)]
    pub event_tracking: bool,
    #[serde(default)]
    pub distance: bool,
    #[serde(default)]
    pub step_counting: bool,
}

impl PedometerCapabilities {
    /// All three checks must pass before any query is attempted.
    pub fn is_available(&self) -> bool {
        self.event_tracking && self.distance && self.step_counting
    }

    /// A fully capable sensor.
    pub fn all() -> Self {
        Self {
            event_tracking: true,
            distance: true,
            step_counting: true,
        }
    }
}

/// Errors from pedometer queries.
#[derive(Debug, thiserror::Error)]
pub enum PedometerError {
    #[error("No step sensor present")]
    Unsupported,

    #[error("Step counting not permitted: {0}")]
    PermissionDenied(String),

    #[error("Failed to read step log: {0}")]
    Io(String),

    #[error("Failed to parse step log: {0}")]
    Parse(String),
}

/// A source of device step counts.
#[async_trait]
pub trait Pedometer: Send + Sync {
    /// Capability flags reported by the sensor.
    fn capabilities(&self) -> PedometerCapabilities;

    /// Count the steps recorded inside the window.
    async fn query_steps(&self, window: StepWindow) -> Result<u64, PedometerError>;
}

/// Read the user's step count for the past day, if the sensor allows it.
///
/// One invocation per session. Missing capabilities and query failures
/// are absorbed into `None`; the evaluator treats that as its own
/// outcome rather than an error.
pub async fn read_steps_last_day(pedometer: &dyn Pedometer) -> Option<u64> {
    if !pedometer.capabilities().is_available() {
        tracing::debug!("Pedometer not available, skipping step query");
        return None;
    }

    let window = StepWindow::trailing_day(Utc::now());
    match pedometer.query_steps(window).await {
        Ok(steps) => {
            tracing::info!(steps, "Device step reading obtained");
            Some(steps)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Device step query failed");
            None
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Implementations
// ─────────────────────────────────────────────────────────────────────────────

/// Pedometer with no sensor behind it (the simulator case).
pub struct NullPedometer;

#[async_trait]
impl Pedometer for NullPedometer {
    fn capabilities(&self) -> PedometerCapabilities {
        PedometerCapabilities::default()
    }

    async fn query_steps(&self, _window: StepWindow) -> Result<u64, PedometerError> {
        Err(PedometerError::Unsupported)
    }
}

/// Step log document: the capability flags declared by the recording
/// device plus its timestamped step samples.
#[derive(Debug, Deserialize)]
struct StepLog {
    #[serde(default)]
    capabilities: PedometerCapabilities,
    #[serde(default)]
    samples: Vec<StepSample>,
}

/// One recorded batch of steps.
#[derive(Debug, Deserialize)]
struct StepSample {
    recorded_at: DateTime<Utc>,
    steps: u64,
}

/// Pedometer backed by a local step log file.
pub struct StepLogPedometer {
    path: PathBuf,
    capabilities: PedometerCapabilities,
}

impl StepLogPedometer {
    /// Open a step log, caching its declared capabilities.
    ///
    /// A missing or unreadable log yields a pedometer with no
    /// capabilities, indistinguishable from having no sensor at all.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let capabilities = match read_log(&path) {
            Ok(log) => log.capabilities,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    path = %path.display(),
                    "Step log unreadable, pedometer disabled"
                );
                PedometerCapabilities::default()
            }
        };
        Self { path, capabilities }
    }
}

#[async_trait]
impl Pedometer for StepLogPedometer {
    fn capabilities(&self) -> PedometerCapabilities {
        self.capabilities
    }

    async fn query_steps(&self, window: StepWindow) -> Result<u64, PedometerError> {
        let log = read_log(&self.path)?;
        // A total past u64::MAX saturates instead of wrapping
        let steps = log
            .samples
            .iter()
            .filter(|s| window.contains(s.recorded_at))
            .fold(0u64, |total, s| total.saturating_add(s.steps));
        Ok(steps)
    }
}

fn read_log(path: &Path) -> Result<StepLog, PedometerError> {
    let data = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::PermissionDenied => PedometerError::PermissionDenied(e.to_string()),
        _ => PedometerError::Io(e.to_string()),
    })?;
    serde_json::from_str(&data).map_err(|e| PedometerError::Parse(e.to_string()))
}
