// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! A mock key-value "database".
//!
//! Data lives in an in-memory map. The backing file is only a stub: it is
//! created with a header line on initialization and never read back. This
//! crate is an independent collaborator and shares nothing with the battery
//! crates.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod store;

#[cfg(test)]
mod tests;

pub use error::StoreError;
pub use store::{STUB_HEADER, SimpleStore};
