// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::StoreError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The content written to a freshly initialized stub file.
pub const STUB_HEADER: &str = "# Database\n";

/// An in-memory key-value store with a stub backing file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleStore {
    /// Where the stub file lives.
    path: PathBuf,
    /// The stored entries.
    data: HashMap<String, String>,
}

impl SimpleStore {
    /// Creates a new, empty store.
    ///
    /// Nothing is written until [`SimpleStore::initialize`] is called.
    ///
    /// # Arguments
    ///
    /// * `path` - The path of the stub file
    #[must_use]
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            data: HashMap::new(),
        }
    }

    /// Creates (or truncates) the stub file and writes its header.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn initialize(&self) -> Result<(), StoreError> {
        std::fs::write(&self.path, STUB_HEADER).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), "Initialized store file");
        Ok(())
    }

    /// Returns the path of the stub file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Inserts a value, overwriting any existing value for the key.
    ///
    /// Always returns `true`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        self.data.insert(key.into(), value.into());
        true
    }

    /// Returns the value stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// Removes `key`.
    ///
    /// Returns `true` if the key was present, `false` otherwise.
    pub fn delete(&mut self, key: &str) -> bool {
        self.data.remove(key).is_some()
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Closes the store. Closing never fails and does not touch the file.
    pub fn close(&self) {
        debug!(path = %self.path.display(), entries = self.data.len(), "Closed store");
    }
}
