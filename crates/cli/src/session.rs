// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Args;
use battery::{Battery, BatterySnapshot, Capacity, CommandOutcome, TracingMonitor, apply_all};
use serde::Serialize;
use tracing::{info, warn};

/// The result of one CLI session, printed as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionReport {
    /// The battery label.
    pub label: String,
    /// The battery after every operation was applied.
    pub final_state: BatterySnapshot,
    /// Number of operations the battery accepted.
    pub accepted: usize,
    /// Number of operations the battery refused.
    pub rejected: usize,
    /// One entry per operation, in order.
    pub outcomes: Vec<CommandOutcome>,
}

/// Builds the battery described by `args` and applies its operations.
///
/// # Errors
///
/// Returns an error if the capacity is zero or the starting charge exceeds it.
pub fn run(args: &Args) -> color_eyre::Result<SessionReport> {
    let capacity: Capacity = Capacity::new(args.capacity)?;
    let mut battery: Battery = match args.charge {
        Some(charge) => Battery::with_charge(capacity, charge)?,
        None => Battery::new(capacity),
    };
    battery.attach_monitor(Box::new(TracingMonitor::new(args.label.clone())));

    let outcomes: Vec<CommandOutcome> = apply_all(&mut battery, args.ops.iter().copied());
    for outcome in &outcomes {
        if outcome.accepted {
            info!(command = %outcome.command, charge = outcome.charge, "Operation accepted");
        } else {
            warn!(
                command = %outcome.command,
                error = outcome.error.as_deref().unwrap_or_default(),
                "Operation rejected"
            );
        }
    }

    let accepted: usize = outcomes.iter().filter(|o| o.accepted).count();
    Ok(SessionReport {
        label: args.label.clone(),
        final_state: battery.snapshot(),
        accepted,
        rejected: outcomes.len() - accepted,
        outcomes,
    })
}
