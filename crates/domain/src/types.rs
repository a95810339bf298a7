// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::str::FromStr;

/// The fixed upper bound of a battery's charge.
///
/// A capacity is always positive. It is chosen once at construction and
/// never changes for the lifetime of the battery that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Capacity(NonZeroU32);

impl Capacity {
    /// Creates a new `Capacity`.
    ///
    /// # Arguments
    ///
    /// * `value` - The maximum charge, must be greater than zero
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ZeroCapacity` if `value` is zero.
    pub const fn new(value: u32) -> Result<Self, DomainError> {
        match NonZeroU32::new(value) {
            Some(value) => Ok(Self(value)),
            None => Err(DomainError::ZeroCapacity),
        }
    }

    /// Returns the capacity as a plain integer.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<u32> for Capacity {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Capacity> for u32 {
    fn from(capacity: Capacity) -> Self {
        capacity.value()
    }
}

impl std::fmt::Display for Capacity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// The amount requested for a single recharge or drain.
///
/// Amounts are signed so that callers can ask for zero or negative
/// transitions; those requests are rejected by the battery rather than
/// being unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    /// Creates a new `Amount`.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw signed amount.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Returns the magnitude of a strictly positive amount.
    ///
    /// Amounts larger than `u32::MAX` saturate, which is harmless because
    /// every transition clamps against a `u32` capacity anyway.
    #[must_use]
    pub fn positive(self) -> Option<u32> {
        if self.0 <= 0 {
            return None;
        }
        Some(u32::try_from(self.0).unwrap_or(u32::MAX))
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl FromStr for Amount {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|e| DomainError::InvalidAmount(format!("'{s}': {e}")))
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
