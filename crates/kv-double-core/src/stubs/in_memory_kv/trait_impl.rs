//! `KvStore` implementation for `InMemoryKv`.

use std::sync::atomic::Ordering;

use async_trait::async_trait;
use tracing::{debug, error, info};

use super::select::select_entries;
use super::{validate_key, InMemoryKv, StoredValue};
use crate::error::KvResult;
use crate::list::KvListIterator;
use crate::traits::{KvStore, QueueHandler};
use crate::types::{
    CommitResult, EnqueueOptions, Entry, Key, KvValue, ListOptions, ListSelector, ReadOptions,
};

#[async_trait]
impl KvStore for InMemoryKv {
    async fn get(&self, key: &Key, _options: Option<ReadOptions>) -> KvResult<Entry> {
        self.ensure_open()?;
        validate_key(key)?;
        let entry = match self.data.read().get(key) {
            Some(stored) => Entry::new(key.clone(), stored.value.clone(), stored.versionstamp.clone()),
            None => Entry::missing(key.clone()),
        };
        Ok(entry)
    }

    async fn get_many(&self, keys: &[Key], _options: Option<ReadOptions>) -> KvResult<Vec<Entry>> {
        self.ensure_open()?;
        keys.iter().try_for_each(validate_key)?;
        let data = self.data.read();
        Ok(keys
            .iter()
            .map(|key| match data.get(key) {
                Some(stored) => {
                    Entry::new(key.clone(), stored.value.clone(), stored.versionstamp.clone())
                }
                None => Entry::missing(key.clone()),
            })
            .collect())
    }

    async fn set(&self, key: &Key, value: KvValue) -> KvResult<CommitResult> {
        self.ensure_open()?;
        validate_key(key)?;
        let versionstamp = self.next_versionstamp();
        self.data.write().insert(
            key.clone(),
            StoredValue {
                value,
                versionstamp: versionstamp.clone(),
            },
        );
        debug!(key = %key, versionstamp = %versionstamp, "Value stored");
        Ok(CommitResult::committed(versionstamp))
    }

    async fn delete(&self, key: &Key) -> KvResult<()> {
        self.ensure_open()?;
        validate_key(key)?;
        if self.data.write().remove(key).is_some() {
            debug!(key = %key, "Value deleted");
        }
        Ok(())
    }

    fn list(&self, selector: ListSelector, options: Option<ListOptions>) -> KvListIterator {
        if let Err(e) = self.ensure_open() {
            return KvListIterator::failed(e);
        }
        let options = options.unwrap_or_default();
        match select_entries(&self.data.read(), &selector, &options) {
            Ok(entries) => KvListIterator::from_entries(entries),
            Err(e) => {
                error!(error = %e, "List selection failed");
                KvListIterator::failed(e)
            }
        }
    }

    async fn enqueue(
        &self,
        value: KvValue,
        _options: Option<EnqueueOptions>,
    ) -> KvResult<CommitResult> {
        self.ensure_open()?;
        let versionstamp = self.next_versionstamp();
        // Backlog lock first, then listeners; listen_queue takes them in the same order.
        let listeners = {
            let mut backlog = self.backlog.lock();
            let listeners = self.listeners.read().clone();
            if listeners.is_empty() {
                debug!(versionstamp = %versionstamp, "No listener; message held in backlog");
                backlog.push(value);
                return Ok(CommitResult::committed(versionstamp));
            }
            listeners
        };
        for listener in &listeners {
            listener.deliver(value.clone());
        }
        Ok(CommitResult::committed(versionstamp))
    }

    async fn listen_queue(&self, handler: QueueHandler) -> KvResult<()> {
        self.ensure_open()?;
        let pending = {
            let mut backlog = self.backlog.lock();
            self.listeners.write().push(handler.clone());
            std::mem::take(&mut *backlog)
        };
        info!(handler = %handler, flushed = pending.len(), "Queue listener registered");
        for message in pending {
            handler.deliver(message);
        }
        Ok(())
    }

    fn close(&self) {
        if !self.closed.swap(true, Ordering::AcqRel) {
            info!("InMemoryKv closed");
        }
    }
}
