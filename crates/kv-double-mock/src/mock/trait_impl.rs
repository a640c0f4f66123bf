//! `KvStore` implementation for `MockKv`.
//!
//! Every method records its call, then answers with the first matching stub.
//! Without a match the mock answers with the neutral result for the
//! operation: missing entries, a committed write stamped with the configured
//! versionstamp, an empty list.

use async_trait::async_trait;
use kv_double_core::{
    CommitResult, EnqueueOptions, Entry, Key, KvListIterator, KvResult, KvStore, KvValue,
    ListOptions, ListSelector, QueueHandler, ReadOptions,
};

use super::MockKv;
use crate::call::Call;
use crate::sequencer::Outcome;

impl MockKv {
    fn committed(&self) -> CommitResult {
        CommitResult::committed(self.default_versionstamp().clone())
    }
}

#[async_trait]
impl KvStore for MockKv {
    async fn get(&self, key: &Key, options: Option<ReadOptions>) -> KvResult<Entry> {
        let call = Call::Get {
            key: key.clone(),
            options,
        };
        match self.dispatch(call, |r| &r.get) {
            Some(outcome) => outcome.into_result(),
            None => Ok(Entry::missing(key.clone())),
        }
    }

    async fn get_many(&self, keys: &[Key], options: Option<ReadOptions>) -> KvResult<Vec<Entry>> {
        let call = Call::GetMany {
            keys: keys.to_vec(),
            options,
        };
        match self.dispatch(call, |r| &r.get_many) {
            Some(outcome) => outcome.into_result(),
            None => Ok(keys.iter().cloned().map(Entry::missing).collect()),
        }
    }

    async fn set(&self, key: &Key, value: KvValue) -> KvResult<CommitResult> {
        let call = Call::Set {
            key: key.clone(),
            value,
        };
        match self.dispatch(call, |r| &r.set) {
            Some(outcome) => outcome.into_result(),
            None => Ok(self.committed()),
        }
    }

    async fn delete(&self, key: &Key) -> KvResult<()> {
        let call = Call::Delete { key: key.clone() };
        match self.dispatch(call, |r| &r.delete) {
            Some(outcome) => outcome.into_result(),
            None => Ok(()),
        }
    }

    fn list(&self, selector: ListSelector, options: Option<ListOptions>) -> KvListIterator {
        let call = Call::List { selector, options };
        match self.dispatch(call, |r| &r.list) {
            Some(Outcome::Value(entries)) => KvListIterator::from_entries(entries),
            Some(Outcome::Failure(error)) => KvListIterator::failed(error),
            None => KvListIterator::empty(),
        }
    }

    async fn enqueue(
        &self,
        value: KvValue,
        options: Option<EnqueueOptions>,
    ) -> KvResult<CommitResult> {
        let call = Call::Enqueue { value, options };
        match self.dispatch(call, |r| &r.enqueue) {
            Some(outcome) => outcome.into_result(),
            None => Ok(self.committed()),
        }
    }

    async fn listen_queue(&self, handler: QueueHandler) -> KvResult<()> {
        let call = Call::ListenQueue { handler };
        match self.dispatch(call, |r| &r.listen_queue) {
            Some(outcome) => outcome.into_result(),
            None => Ok(()),
        }
    }

    fn close(&self) {
        self.record(Call::Close);
    }
}
