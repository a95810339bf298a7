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
    clippy::unwrap_used,
    clippy::expect_used
)]

mod recording;
mod tracing_monitor;

use serde::{Deserialize, Serialize};

pub use recording::RecordingMonitor;
pub use tracing_monitor::TracingMonitor;

/// An external collaborator that is told about successful charge transitions.
///
/// A battery calls exactly one of these methods once per successful
/// transition, passing the charge after the transition. Failed transitions
/// are never reported.
pub trait ChargeMonitor {
    /// Called after a successful recharge with the new charge.
    fn notify_recharge(&mut self, charge: u32);

    /// Called after a successful drain with the new charge.
    fn notify_drain(&mut self, charge: u32);
}

impl<M: ChargeMonitor + ?Sized> ChargeMonitor for Box<M> {
    fn notify_recharge(&mut self, charge: u32) {
        (**self).notify_recharge(charge);
    }

    fn notify_drain(&mut self, charge: u32) {
        (**self).notify_drain(charge);
    }
}

/// A single report of a successful transition.
///
/// Every successful transition produces exactly one notification, carrying
/// the charge observed immediately after the transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notification {
    /// The battery was recharged.
    Recharge {
        /// The charge after the recharge.
        charge: u32,
    },
    /// The battery was drained.
    Drain {
        /// The charge after the drain.
        charge: u32,
    },
}

impl Notification {
    /// Returns the post-transition charge.
    #[must_use]
    pub const fn charge(self) -> u32 {
        match self {
            Self::Recharge { charge } | Self::Drain { charge } => charge,
        }
    }

    /// Returns the name of the transition (`"recharge"` or `"drain"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Recharge { .. } => "recharge",
            Self::Drain { .. } => "drain",
        }
    }

    /// Delivers this notification to the matching monitor method.
    pub fn deliver(self, monitor: &mut dyn ChargeMonitor) {
        match self {
            Self::Recharge { charge } => monitor.notify_recharge(charge),
            Self::Drain { charge } => monitor.notify_drain(charge),
        }
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name(), self.charge())
    }
}
