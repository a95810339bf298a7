// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ChargeMonitor;
use tracing::info;

/// A monitor that reports every notification as a `tracing` event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingMonitor {
    /// Name attached to every event, used to tell batteries apart in logs.
    label: String,
}

impl TracingMonitor {
    /// Creates a new `TracingMonitor`.
    ///
    /// # Arguments
    ///
    /// * `label` - The name to attach to every emitted event
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Returns the label attached to emitted events.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Default for TracingMonitor {
    fn default() -> Self {
        Self::new("battery")
    }
}

impl ChargeMonitor for TracingMonitor {
    fn notify_recharge(&mut self, charge: u32) {
        info!(target: "battery::monitor", battery = %self.label, charge, "Battery recharged");
    }

    fn notify_drain(&mut self, charge: u32) {
        info!(target: "battery::monitor", battery = %self.label, charge, "Battery drained");
    }
}
