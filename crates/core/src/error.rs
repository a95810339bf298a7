// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Reasons a recharge or drain can be refused.
///
/// A refused transition never changes the charge and never notifies the
/// monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// The requested amount was zero or negative.
    #[error("Transition amount must be positive, got {amount}")]
    NonPositiveAmount {
        /// The rejected amount.
        amount: i64,
    },
    /// A recharge was requested while the battery was already full.
    #[error("Battery is already full at capacity {capacity}")]
    AlreadyFull {
        /// The capacity the battery is sitting at.
        capacity: u32,
    },
}
