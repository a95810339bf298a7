// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ChargeMonitor, Notification};
use std::cell::RefCell;
use std::rc::Rc;

/// A monitor that records every notification it receives.
///
/// Clones share the same log, so a caller can hand one clone to a battery
/// and keep another to inspect what was reported. The log is not
/// thread-safe; batteries are driven from a single thread.
#[derive(Debug, Clone, Default)]
pub struct RecordingMonitor {
    log: Rc<RefCell<Vec<Notification>>>,
}

impl RecordingMonitor {
    /// Creates a new monitor with an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every notification received, in order.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.log.borrow().clone()
    }

    /// Returns the charges passed to `notify_recharge`, in order.
    #[must_use]
    pub fn recharge_calls(&self) -> Vec<u32> {
        self.log
            .borrow()
            .iter()
            .filter_map(|n| match n {
                Notification::Recharge { charge } => Some(*charge),
                Notification::Drain { .. } => None,
            })
            .collect()
    }

    /// Returns the charges passed to `notify_drain`, in order.
    #[must_use]
    pub fn drain_calls(&self) -> Vec<u32> {
        self.log
            .borrow()
            .iter()
            .filter_map(|n| match n {
                Notification::Drain { charge } => Some(*charge),
                Notification::Recharge { .. } => None,
            })
            .collect()
    }

    /// Returns the total number of notifications received.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.log.borrow().len()
    }

    /// Returns the most recent notification, if any.
    #[must_use]
    pub fn last(&self) -> Option<Notification> {
        self.log.borrow().last().copied()
    }

    /// Forgets every recorded notification.
    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }
}

impl ChargeMonitor for RecordingMonitor {
    fn notify_recharge(&mut self, charge: u32) {
        self.log
            .borrow_mut()
            .push(Notification::Recharge { charge });
    }

    fn notify_drain(&mut self, charge: u32) {
        self.log.borrow_mut().push(Notification::Drain { charge });
    }
}
