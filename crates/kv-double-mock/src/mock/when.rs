//! Stubbing facade.

use kv_double_core::{
    CommitResult, EnqueueOptions, Entry, Key, KvValue, ListOptions, ListSelector, QueueHandler,
    ReadOptions,
};

use super::MockKv;
use crate::call::CallMatcher;
use crate::matchers::{absent, Arg};
use crate::registry::Stubbing;

/// Entry point for defining stubs: `mock.when().get(key).then_return(entry)`.
///
/// Each method registers a new expectation immediately, after any registered
/// before it. Methods without a `_with` suffix match calls that left the
/// options argument out.
pub struct When<'a> {
    mock: &'a MockKv,
}

impl<'a> When<'a> {
    pub(super) fn new(mock: &'a MockKv) -> Self {
        Self { mock }
    }

    pub fn get(self, key: impl Into<Arg<Key>>) -> Stubbing<Entry> {
        self.get_with(key, absent::<ReadOptions>())
    }

    pub fn get_with(
        self,
        key: impl Into<Arg<Key>>,
        options: impl Into<Arg<ReadOptions>>,
    ) -> Stubbing<Entry> {
        self.mock
            .register(CallMatcher::get(key, options), |r| &mut r.get)
    }

    pub fn get_many(self, keys: impl Into<Arg<Vec<Key>>>) -> Stubbing<Vec<Entry>> {
        self.get_many_with(keys, absent::<ReadOptions>())
    }

    pub fn get_many_with(
        self,
        keys: impl Into<Arg<Vec<Key>>>,
        options: impl Into<Arg<ReadOptions>>,
    ) -> Stubbing<Vec<Entry>> {
        self.mock
            .register(CallMatcher::get_many(keys, options), |r| &mut r.get_many)
    }

    pub fn set(self, key: impl Into<Arg<Key>>, value: impl Into<Arg<KvValue>>) -> Stubbing<CommitResult> {
        self.mock.register(CallMatcher::set(key, value), |r| &mut r.set)
    }

    pub fn delete(self, key: impl Into<Arg<Key>>) -> Stubbing<()> {
        self.mock.register(CallMatcher::delete(key), |r| &mut r.delete)
    }

    /// Stub `list`; the programmed entries are what the returned iterator yields.
    pub fn list(self, selector: impl Into<Arg<ListSelector>>) -> Stubbing<Vec<Entry>> {
        self.list_with(selector, absent::<ListOptions>())
    }

    pub fn list_with(
        self,
        selector: impl Into<Arg<ListSelector>>,
        options: impl Into<Arg<ListOptions>>,
    ) -> Stubbing<Vec<Entry>> {
        self.mock
            .register(CallMatcher::list(selector, options), |r| &mut r.list)
    }

    pub fn enqueue(self, value: impl Into<Arg<KvValue>>) -> Stubbing<CommitResult> {
        self.enqueue_with(value, absent::<EnqueueOptions>())
    }

    pub fn enqueue_with(
        self,
        value: impl Into<Arg<KvValue>>,
        options: impl Into<Arg<EnqueueOptions>>,
    ) -> Stubbing<CommitResult> {
        self.mock
            .register(CallMatcher::enqueue(value, options), |r| &mut r.enqueue)
    }

    pub fn listen_queue(self, handler: impl Into<Arg<QueueHandler>>) -> Stubbing<()> {
        self.mock
            .register(CallMatcher::listen_queue(handler), |r| &mut r.listen_queue)
    }
}
