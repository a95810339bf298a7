// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::TransitionError;
use battery_domain::{Amount, Capacity, DomainError, validate_charge};
use battery_monitor::{ChargeMonitor, Notification};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A bounded charge counter.
///
/// The charge always lies in `0..=capacity`. It changes only through
/// [`Battery::recharge`] and [`Battery::drain`] (or their `try_` forms), and
/// every successful change is reported to the attached monitor, if any.
pub struct Battery {
    /// The fixed upper bound of the charge.
    capacity: Capacity,
    /// The current charge.
    charge: u32,
    /// Optional collaborator told about successful transitions.
    monitor: Option<Box<dyn ChargeMonitor>>,
}

impl Battery {
    /// Creates a fully charged battery.
    ///
    /// # Arguments
    ///
    /// * `capacity` - The fixed capacity of the battery
    #[must_use]
    pub const fn new(capacity: Capacity) -> Self {
        Self {
            capacity,
            charge: capacity.value(),
            monitor: None,
        }
    }

    /// Creates a battery holding `charge`.
    ///
    /// # Arguments
    ///
    /// * `capacity` - The fixed capacity of the battery
    /// * `charge` - The starting charge
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ChargeExceedsCapacity` if `charge > capacity`.
    pub fn with_charge(capacity: Capacity, charge: u32) -> Result<Self, DomainError> {
        validate_charge(capacity, charge)?;
        Ok(Self {
            capacity,
            charge,
            monitor: None,
        })
    }

    /// Returns the capacity.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity.value()
    }

    /// Returns the current charge.
    #[must_use]
    pub const fn charge(&self) -> u32 {
        self.charge
    }

    /// Returns `true` if the charge equals the capacity.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.charge == self.capacity.value()
    }

    /// Returns `true` if the charge is zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.charge == 0
    }

    /// Attaches a monitor, returning the one it replaces.
    pub fn attach_monitor(
        &mut self,
        monitor: Box<dyn ChargeMonitor>,
    ) -> Option<Box<dyn ChargeMonitor>> {
        self.monitor.replace(monitor)
    }

    /// Detaches and returns the current monitor.
    pub fn detach_monitor(&mut self) -> Option<Box<dyn ChargeMonitor>> {
        self.monitor.take()
    }

    /// Returns `true` if a monitor is attached.
    #[must_use]
    pub const fn has_monitor(&self) -> bool {
        self.monitor.is_some()
    }

    /// Recharges the battery by `amount`, clamped at capacity.
    ///
    /// Returns `false` without touching the charge or the monitor if
    /// `amount <= 0` or the battery is already full.
    pub fn recharge(&mut self, amount: i64) -> bool {
        self.try_recharge(amount).is_ok()
    }

    /// Drains the battery by `amount`, clamped at zero.
    ///
    /// Returns `false` without touching the charge or the monitor if
    /// `amount <= 0`. Draining an empty battery succeeds.
    pub fn drain(&mut self, amount: i64) -> bool {
        self.try_drain(amount).is_ok()
    }

    /// Recharges the battery, reporting why a refused recharge was refused.
    ///
    /// # Returns
    ///
    /// The new charge on success.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `amount` is zero or negative
    /// - The battery is already full
    pub fn try_recharge(&mut self, amount: i64) -> Result<u32, TransitionError> {
        let amount: Amount = Amount::new(amount);
        let Some(magnitude) = amount.positive() else {
            debug!(amount = amount.value(), "Rejected recharge: non-positive amount");
            return Err(TransitionError::NonPositiveAmount {
                amount: amount.value(),
            });
        };

        // Saturation guard, checked before clamping
        if self.is_full() {
            debug!(
                capacity = self.capacity(),
                "Rejected recharge: battery already full"
            );
            return Err(TransitionError::AlreadyFull {
                capacity: self.capacity(),
            });
        }

        let new_charge: u32 = self.charge.saturating_add(magnitude).min(self.capacity());
        self.commit(Notification::Recharge { charge: new_charge });
        Ok(new_charge)
    }

    /// Drains the battery, reporting why a refused drain was refused.
    ///
    /// # Returns
    ///
    /// The new charge on success.
    ///
    /// # Errors
    ///
    /// Returns an error if `amount` is zero or negative.
    pub fn try_drain(&mut self, amount: i64) -> Result<u32, TransitionError> {
        let amount: Amount = Amount::new(amount);
        let Some(magnitude) = amount.positive() else {
            debug!(amount = amount.value(), "Rejected drain: non-positive amount");
            return Err(TransitionError::NonPositiveAmount {
                amount: amount.value(),
            });
        };

        // No empty guard: draining an empty battery is a successful no-op
        let new_charge: u32 = self.charge.saturating_sub(magnitude);
        self.commit(Notification::Drain { charge: new_charge });
        Ok(new_charge)
    }

    /// Converts the battery to a snapshot for reporting.
    #[must_use]
    pub const fn snapshot(&self) -> BatterySnapshot {
        BatterySnapshot {
            capacity: self.capacity(),
            charge: self.charge,
        }
    }

    fn commit(&mut self, notification: Notification) {
        let before: u32 = self.charge;
        self.charge = notification.charge();
        debug!(
            transition = notification.name(),
            before,
            after = self.charge,
            "Applied battery transition"
        );

        if let Some(monitor) = self.monitor.as_deref_mut() {
            notification.deliver(monitor);
        }
    }
}

impl std::fmt::Debug for Battery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Battery")
            .field("capacity", &self.capacity)
            .field("charge", &self.charge)
            .field("has_monitor", &self.monitor.is_some())
            .finish()
    }
}

/// A point-in-time view of a battery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatterySnapshot {
    /// The capacity of the battery.
    pub capacity: u32,
    /// The charge at the time of the snapshot.
    pub charge: u32,
}

impl std::fmt::Display for BatterySnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.charge, self.capacity)
    }
}
