// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - the two session collaborators.

pub mod directory;
pub mod pedometer;

pub use directory::DirectoryClient;
pub use pedometer::{
    read_steps_last_day, NullPedometer, Pedometer, PedometerCapabilities, PedometerError,
    StepLogPedometer, StepWindow,
};
