// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A battery must be able to hold at least one unit of charge.
    #[error("Battery capacity must be greater than 0")]
    ZeroCapacity,
    /// The requested starting charge does not fit in the battery.
    #[error("Charge {charge} exceeds battery capacity {capacity}")]
    ChargeExceedsCapacity {
        /// The requested charge.
        charge: u32,
        /// The capacity of the battery.
        capacity: u32,
    },
    /// A transition amount could not be parsed.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    /// A command string could not be parsed.
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}
