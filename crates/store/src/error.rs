// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while managing the store's stub file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The stub file could not be written.
    #[error("Failed to write store file '{}': {source}", .path.display())]
    Io {
        /// The path of the stub file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
