// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::battery::Battery;
use crate::command::Command;
use crate::error::TransitionError;
use serde::{Deserialize, Serialize};

/// Applies a command to a battery.
///
/// # Arguments
///
/// * `battery` - The battery to transition
/// * `command` - The transition to request
///
/// # Returns
///
/// * `Ok(charge)` with the charge after a successful transition
/// * `Err(TransitionError)` if the battery refused the transition
///
/// # Errors
///
/// Returns an error if the amount is not positive, or if a recharge is
/// requested on a full battery. The battery is unchanged in both cases.
pub fn apply(battery: &mut Battery, command: Command) -> Result<u32, TransitionError> {
    match command {
        Command::Recharge { amount } => battery.try_recharge(amount.value()),
        Command::Drain { amount } => battery.try_drain(amount.value()),
    }
}

/// The result of applying one command in a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOutcome {
    /// The command, in `op:amount` form.
    pub command: String,
    /// Whether the battery accepted the transition.
    pub accepted: bool,
    /// The charge after the command, whether or not it was accepted.
    pub charge: u32,
    /// Why the command was refused, if it was.
    pub error: Option<String>,
}

/// Applies commands in order, recording the outcome of each.
///
/// A refused command does not stop the sequence.
pub fn apply_all<I>(battery: &mut Battery, commands: I) -> Vec<CommandOutcome>
where
    I: IntoIterator<Item = Command>,
{
    commands
        .into_iter()
        .map(|command| {
            let result: Result<u32, TransitionError> = apply(battery, command);
            CommandOutcome {
                command: command.to_string(),
                accepted: result.is_ok(),
                charge: battery.charge(),
                error: result.err().map(|e| e.to_string()),
            }
        })
        .collect()
}
