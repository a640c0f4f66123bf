//! Verification facade.
//!
//! A [`Verifier`] is an owned, single-use chain: quantifier methods return a
//! new verifier, and naming an operation consumes it. The quantifier therefore
//! cannot outlive its assertion; the next `mock.verify()` starts again from
//! "at least once".

use kv_double_core::{EnqueueOptions, Key, KvValue, ListOptions, ListSelector, QueueHandler, ReadOptions};

use super::MockKv;
use crate::call::CallMatcher;
use crate::error::VerifyResult;
use crate::matchers::{absent, Arg};
use crate::verification::Quantifier;

#[must_use = "a verification chain checks nothing until an operation method is called"]
pub struct Verifier<'a> {
    mock: &'a MockKv,
    quantifier: Quantifier,
}

impl<'a> Verifier<'a> {
    pub(super) fn new(mock: &'a MockKv) -> Self {
        Self {
            mock,
            quantifier: Quantifier::default(),
        }
    }

    fn with(self, quantifier: Quantifier) -> Self {
        Self { quantifier, ..self }
    }

    pub fn once(self) -> Self {
        self.with(Quantifier::Once)
    }

    pub fn times(self, n: usize) -> Self {
        self.with(Quantifier::Times(n))
    }

    pub fn never(self) -> Self {
        self.with(Quantifier::Never)
    }

    pub fn at_least(self, n: usize) -> Self {
        self.with(Quantifier::AtLeast(n))
    }

    pub fn at_most(self, n: usize) -> Self {
        self.with(Quantifier::AtMost(n))
    }

    pub fn quantifier(&self) -> Quantifier {
        self.quantifier
    }

    /// Verify against an explicit call matcher.
    pub fn call(self, matcher: CallMatcher) -> VerifyResult {
        self.mock.verify_call(self.quantifier, matcher)
    }

    pub fn get(self, key: impl Into<Arg<Key>>) -> VerifyResult {
        self.get_with(key, absent::<ReadOptions>())
    }

    pub fn get_with(self, key: impl Into<Arg<Key>>, options: impl Into<Arg<ReadOptions>>) -> VerifyResult {
        self.call(CallMatcher::get(key, options))
    }

    pub fn get_many(self, keys: impl Into<Arg<Vec<Key>>>) -> VerifyResult {
        self.get_many_with(keys, absent::<ReadOptions>())
    }

    pub fn get_many_with(
        self,
        keys: impl Into<Arg<Vec<Key>>>,
        options: impl Into<Arg<ReadOptions>>,
    ) -> VerifyResult {
        self.call(CallMatcher::get_many(keys, options))
    }

    pub fn set(self, key: impl Into<Arg<Key>>, value: impl Into<Arg<KvValue>>) -> VerifyResult {
        self.call(CallMatcher::set(key, value))
    }

    pub fn delete(self, key: impl Into<Arg<Key>>) -> VerifyResult {
        self.call(CallMatcher::delete(key))
    }

    pub fn list(self, selector: impl Into<Arg<ListSelector>>) -> VerifyResult {
        self.list_with(selector, absent::<ListOptions>())
    }

    pub fn list_with(
        self,
        selector: impl Into<Arg<ListSelector>>,
        options: impl Into<Arg<ListOptions>>,
    ) -> VerifyResult {
        self.call(CallMatcher::list(selector, options))
    }

    pub fn enqueue(self, value: impl Into<Arg<KvValue>>) -> VerifyResult {
        self.enqueue_with(value, absent::<EnqueueOptions>())
    }

    pub fn enqueue_with(
        self,
        value: impl Into<Arg<KvValue>>,
        options: impl Into<Arg<EnqueueOptions>>,
    ) -> VerifyResult {
        self.call(CallMatcher::enqueue(value, options))
    }

    pub fn listen_queue(self, handler: impl Into<Arg<QueueHandler>>) -> VerifyResult {
        self.call(CallMatcher::listen_queue(handler))
    }

    pub fn close(self) -> VerifyResult {
        self.call(CallMatcher::Close)
    }
}
