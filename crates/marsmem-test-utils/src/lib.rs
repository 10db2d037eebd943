//! Test utilities and mock types for marsmem development.
//!
//! Provides a recording [`MemoryBus`] mock, small memory-map fixtures
//! (see [`fixtures`]) and an opt-in tracing subscriber for tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::HashMap;

use marsmem_core::{Address, MemoryBus, MemoryError};

/// Mock implementation of [`MemoryBus`].
///
/// Accepts every address, answers loads from the last store (zero if never
/// written) and keeps the full store log so tests can assert on the exact
/// sequence of writes an operation performed.
pub struct RecordingBus {
    cells: HashMap<Address, u32>,
    stores: Vec<(Address, u32)>,
}

impl RecordingBus {
    pub fn new() -> Self {
        Self {
            cells: HashMap::new(),
            stores: Vec::new(),
        }
    }

    /// Every store in the order it happened.
    pub fn stores(&self) -> &[(Address, u32)] {
        &self.stores
    }

    /// The most recent store, if any.
    pub fn last_store(&self) -> Option<(Address, u32)> {
        self.stores.last().copied()
    }

    /// Forget the store log but keep memory contents.
    pub fn clear_log(&mut self) {
        self.stores.clear();
    }
}

impl Default for RecordingBus {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for RecordingBus {
    fn load_word(&self, address: Address) -> Result<u32, MemoryError> {
        Ok(self.cells.get(&address).copied().unwrap_or(0))
    }

    fn store_word(&mut self, address: Address, value: u32) -> Result<(), MemoryError> {
        self.cells.insert(address, value);
        self.stores.push((address, value));
        Ok(())
    }
}

/// Install a test-writer tracing subscriber filtered by `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
