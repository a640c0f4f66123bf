//! The `KvStore` contract.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::KvResult;
use crate::list::KvListIterator;
use crate::types::{
    CommitResult, EnqueueOptions, Entry, Key, KvValue, ListOptions, ListSelector, ReadOptions,
};

static NEXT_HANDLER_ID: AtomicU64 = AtomicU64::new(1);

/// Reference to a queue listener.
///
/// Handlers compare by identity: two clones of one handler are equal, two
/// handlers built from identical closures are not.
#[derive(Clone)]
pub struct QueueHandler {
    id: u64,
    callback: Arc<dyn Fn(KvValue) + Send + Sync>,
}

impl QueueHandler {
    pub fn new(callback: impl Fn(KvValue) + Send + Sync + 'static) -> Self {
        Self {
            id: NEXT_HANDLER_ID.fetch_add(1, Ordering::Relaxed),
            callback: Arc::new(callback),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Hand one message to the listener.
    pub fn deliver(&self, message: KvValue) {
        (self.callback)(message);
    }
}

impl PartialEq for QueueHandler {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for QueueHandler {}

impl fmt::Debug for QueueHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueueHandler").field("id", &self.id).finish()
    }
}

impl fmt::Display for QueueHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "handler#{}", self.id)
    }
}

/// Key-value store operations.
///
/// Doubles implement this trait signature-for-signature so they can replace a
/// real store behind a [`crate::KvSlot`] without callers noticing.
///
/// # Implementation Notes
///
/// - Methods are async except `list` (the iterator is the async part) and `close`
/// - Implementations should log errors via `tracing` before returning
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Read one key.
    async fn get(&self, key: &Key, options: Option<ReadOptions>) -> KvResult<Entry>;

    /// Read several keys; the result has one entry per key, in order.
    async fn get_many(&self, keys: &[Key], options: Option<ReadOptions>) -> KvResult<Vec<Entry>>;

    /// Write one key.
    async fn set(&self, key: &Key, value: KvValue) -> KvResult<CommitResult>;

    /// Remove one key. Removing a missing key succeeds.
    async fn delete(&self, key: &Key) -> KvResult<()>;

    /// Walk the keys chosen by `selector`. Each call returns a fresh iterator.
    fn list(&self, selector: ListSelector, options: Option<ListOptions>) -> KvListIterator;

    /// Put a message on the store's queue.
    async fn enqueue(&self, value: KvValue, options: Option<EnqueueOptions>)
        -> KvResult<CommitResult>;

    /// Register a queue listener.
    async fn listen_queue(&self, handler: QueueHandler) -> KvResult<()>;

    /// Release the store.
    fn close(&self);
}
