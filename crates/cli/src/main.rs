// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod session;

#[cfg(test)]
mod tests;

use battery::Command;
use clap::Parser;
use session::{SessionReport, run};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Battery CLI - drive a bounded charge counter from the command line
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Capacity of the battery. Must be greater than 0.
    #[arg(short, long)]
    capacity: u32,

    /// Starting charge. Defaults to a full battery.
    #[arg(long)]
    charge: Option<u32>,

    /// Name attached to monitor log events
    #[arg(short, long, default_value = "battery")]
    label: String,

    /// Log filter (e.g. `debug`). Overrides `RUST_LOG` when given.
    #[arg(long)]
    log_level: Option<String>,

    /// Operations to apply in order, each `recharge:<amount>` or `drain:<amount>`
    #[arg(value_name = "OP")]
    ops: Vec<Command>,
}

impl Args {
    /// Builds the log filter from `--log-level`, then `RUST_LOG`, then `info`.
    fn env_filter(&self) -> EnvFilter {
        self.log_level.as_ref().map_or_else(
            || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            EnvFilter::new,
        )
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing; stdout is reserved for the report
    tracing_subscriber::fmt()
        .with_env_filter(args.env_filter())
        .with_writer(std::io::stderr)
        .init();

    info!(
        capacity = args.capacity,
        charge = ?args.charge,
        ops = args.ops.len(),
        "Starting battery session"
    );

    let report: SessionReport = run(&args)?;

    info!(
        accepted = report.accepted,
        rejected = report.rejected,
        final_charge = report.final_state.charge,
        "Battery session complete"
    );

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
