// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::Capacity;

/// Validates that a charge fits inside a battery of the given capacity.
///
/// This function is pure, deterministic, and has no side effects.
///
/// # Arguments
///
/// * `capacity` - The capacity of the battery
/// * `charge` - The charge to validate
///
/// # Returns
///
/// * `Ok(())` if `charge <= capacity`
/// * `Err(DomainError::ChargeExceedsCapacity)` otherwise
///
/// # Errors
///
/// Returns an error if the charge is greater than the capacity.
pub const fn validate_charge(capacity: Capacity, charge: u32) -> Result<(), DomainError> {
    // Rule: 0 <= charge <= capacity (the lower bound is the type)
    if charge > capacity.value() {
        return Err(DomainError::ChargeExceedsCapacity {
            charge,
            capacity: capacity.value(),
        });
    }
    Ok(())
}
