// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod battery;
mod command;
mod error;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::{CommandOutcome, apply, apply_all};
pub use battery::{Battery, BatterySnapshot};
pub use command::Command;
pub use error::TransitionError;

pub use battery_domain::{Amount, Capacity, DomainError};
pub use battery_monitor::{ChargeMonitor, Notification, RecordingMonitor, TracingMonitor};
