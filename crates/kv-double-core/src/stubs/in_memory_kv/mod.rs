//! In-memory implementation of `KvStore`.
//!
//! # WARNING: TEST ONLY - DO NOT USE IN PRODUCTION
//!
//! ## Limitations
//!
//! - **No persistence**: all data is lost when the store is dropped.
//! - **Snapshot lists**: `list` selects its entries when called; writes made
//!   while an iterator is being drained are not observed by it.
//! - **Immediate queue delivery**: `delay` is ignored and messages go to every
//!   registered listener at enqueue time. Messages enqueued before any listener
//!   exists are held and flushed to the first one.

mod select;
mod trait_impl;
#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::{Mutex, RwLock};
use tracing::info;

use crate::error::{KvError, KvResult};
use crate::traits::QueueHandler;
use crate::types::{Key, KvValue, Versionstamp};

#[derive(Debug, Clone)]
pub(crate) struct StoredValue {
    pub(crate) value: KvValue,
    pub(crate) versionstamp: Versionstamp,
}

/// In-memory key-value store.
#[derive(Debug)]
pub struct InMemoryKv {
    pub(crate) data: RwLock<BTreeMap<Key, StoredValue>>,
    /// Last commit sequence handed out.
    pub(crate) sequence: AtomicU64,
    pub(crate) listeners: RwLock<Vec<QueueHandler>>,
    /// Messages waiting for a first listener.
    pub(crate) backlog: Mutex<Vec<KvValue>>,
    pub(crate) closed: AtomicBool,
}

impl InMemoryKv {
    pub fn new() -> Self {
        info!("Creating new InMemoryKv (TEST ONLY)");
        Self {
            data: RwLock::new(BTreeMap::new()),
            sequence: AtomicU64::new(0),
            listeners: RwLock::new(Vec::new()),
            backlog: Mutex::new(Vec::new()),
            closed: AtomicBool::new(false),
        }
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    pub(crate) fn ensure_open(&self) -> KvResult<()> {
        if self.is_closed() {
            return Err(KvError::Closed);
        }
        Ok(())
    }

    pub(crate) fn next_versionstamp(&self) -> Versionstamp {
        let sequence = self.sequence.fetch_add(1, Ordering::AcqRel) + 1;
        Versionstamp::from_sequence(sequence)
    }
}

impl Default for InMemoryKv {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn validate_key(key: &Key) -> KvResult<()> {
    if key.is_empty() {
        return Err(KvError::InvalidKey("key must have at least one part".to_string()));
    }
    Ok(())
}
