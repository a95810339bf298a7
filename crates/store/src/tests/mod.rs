// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use crate::SimpleStore;
use std::ops::{Deref, DerefMut};
use tempfile::TempDir;

/// A freshly initialized store whose stub file is removed on drop.
///
/// Cleanup runs even when the owning test panics.
pub struct CleanStore {
    store: SimpleStore,
    // Dropped after `store`; removes the directory and the stub file.
    _dir: TempDir,
}

impl CleanStore {
    pub fn new() -> Self {
        let dir: TempDir = TempDir::new().unwrap();
        let store: SimpleStore = SimpleStore::new(dir.path().join("test_system_db.db"));
        store.initialize().unwrap();
        Self { store, _dir: dir }
    }
}

impl Deref for CleanStore {
    type Target = SimpleStore;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}

impl DerefMut for CleanStore {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.store
    }
}

impl Drop for CleanStore {
    fn drop(&mut self) {
        self.store.close();
        if self.store.path().exists() {
            let _ = std::fs::remove_file(self.store.path());
        }
    }
}
