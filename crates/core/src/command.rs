// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use battery_domain::{Amount, DomainError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A command represents a requested transition as data only.
///
/// Commands parse from and print as `recharge:<amount>` / `drain:<amount>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    /// Recharge the battery.
    Recharge {
        /// The requested amount.
        amount: Amount,
    },
    /// Drain the battery.
    Drain {
        /// The requested amount.
        amount: Amount,
    },
}

impl Command {
    /// Returns the requested amount.
    #[must_use]
    pub const fn amount(self) -> Amount {
        match self {
            Self::Recharge { amount } | Self::Drain { amount } => amount,
        }
    }

    /// Returns the operation name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Recharge { .. } => "recharge",
            Self::Drain { .. } => "drain",
        }
    }
}

impl FromStr for Command {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((op, amount)) = s.split_once(':') else {
            return Err(DomainError::InvalidCommand(format!(
                "'{s}' is not of the form <op>:<amount>"
            )));
        };

        let amount: Amount = amount.parse()?;
        match op.trim().to_ascii_lowercase().as_str() {
            "recharge" => Ok(Self::Recharge { amount }),
            "drain" => Ok(Self::Drain { amount }),
            other => Err(DomainError::InvalidCommand(format!(
                "unknown operation '{other}'"
            ))),
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.name(), self.amount())
    }
}
