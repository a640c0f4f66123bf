//! Expectation registry.
//!
//! Each operation keeps its expectations in registration order. Resolution
//! takes the first expectation whose matchers accept the call, so narrow stubs
//! must be registered before broad ones that overlap them.

use std::sync::Arc;

use kv_double_core::{AbsentOptionsPolicy, CommitResult, Entry, KvError};
use parking_lot::Mutex;

use crate::call::{Call, CallMatcher, Operation};
use crate::sequencer::{Outcome, ResultSequencer};

/// Sequencer shared between the registry and the stubbing handle.
pub type SharedSequencer<T> = Arc<Mutex<ResultSequencer<T>>>;

/// One stub: matchers plus the outcomes they program.
pub struct Expectation<T> {
    matcher: CallMatcher,
    sequencer: SharedSequencer<T>,
}

impl<T> Expectation<T> {
    pub fn matcher(&self) -> &CallMatcher {
        &self.matcher
    }
}

/// Registration-ordered expectations for one operation.
pub struct ExpectationList<T> {
    operation: Operation,
    entries: Vec<Expectation<T>>,
}

impl<T: Clone> ExpectationList<T> {
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            entries: Vec::new(),
        }
    }

    /// Register an expectation at the end of the list.
    pub fn stub(&mut self, matcher: CallMatcher) -> Stubbing<T> {
        debug_assert_eq!(matcher.operation(), self.operation);
        let sequencer = SharedSequencer::default();
        self.entries.push(Expectation {
            matcher,
            sequencer: Arc::clone(&sequencer),
        });
        Stubbing {
            operation: self.operation,
            sequencer,
        }
    }

    /// Outcome of the first matching expectation.
    ///
    /// `None` when nothing matches, or when the first match has no outcome
    /// programmed; later expectations are not consulted either way.
    pub fn resolve(&self, call: &Call, policy: AbsentOptionsPolicy) -> Option<Outcome<T>> {
        let expectation = self
            .entries
            .iter()
            .find(|e| e.matcher.matches(call, policy))?;
        expectation.sequencer.lock().next_outcome()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Expectation<T>> {
        self.entries.iter()
    }
}

/// All expectations of one mock, one list per stubbable operation.
pub struct ExpectationRegistry {
    pub(crate) get: ExpectationList<Entry>,
    pub(crate) get_many: ExpectationList<Vec<Entry>>,
    pub(crate) set: ExpectationList<CommitResult>,
    pub(crate) delete: ExpectationList<()>,
    pub(crate) list: ExpectationList<Vec<Entry>>,
    pub(crate) enqueue: ExpectationList<CommitResult>,
    pub(crate) listen_queue: ExpectationList<()>,
}

impl ExpectationRegistry {
    pub fn new() -> Self {
        Self {
            get: ExpectationList::new(Operation::Get),
            get_many: ExpectationList::new(Operation::GetMany),
            set: ExpectationList::new(Operation::Set),
            delete: ExpectationList::new(Operation::Delete),
            list: ExpectationList::new(Operation::List),
            enqueue: ExpectationList::new(Operation::Enqueue),
            listen_queue: ExpectationList::new(Operation::ListenQueue),
        }
    }

    /// Expectations registered for `operation`.
    pub fn count(&self, operation: Operation) -> usize {
        match operation {
            Operation::Get => self.get.len(),
            Operation::GetMany => self.get_many.len(),
            Operation::Set => self.set.len(),
            Operation::Delete => self.delete.len(),
            Operation::List => self.list.len(),
            Operation::Enqueue => self.enqueue.len(),
            Operation::ListenQueue => self.listen_queue.len(),
            Operation::Close => 0,
        }
    }
}

impl Default for ExpectationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle for programming the outcomes of one stub.
///
/// Outcomes append in call order; `then_return` and `then_throw` interleave
/// into a single chain.
pub struct Stubbing<T> {
    operation: Operation,
    sequencer: SharedSequencer<T>,
}

impl<T: Clone> Stubbing<T> {
    pub fn then_return(self, value: T) -> Self {
        self.sequencer.lock().push(Outcome::Value(value));
        self
    }

    /// Queue each value in order. An empty list still queues one empty
    /// success.
    pub fn then_return_all(self, values: impl IntoIterator<Item = T>) -> Self
    where
        T: Default,
    {
        {
            let mut sequencer = self.sequencer.lock();
            let mut queued = 0usize;
            for value in values {
                sequencer.push(Outcome::Value(value));
                queued += 1;
            }
            if queued == 0 {
                sequencer.push(Outcome::Value(T::default()));
            }
        }
        self
    }

    pub fn then_throw(self, error: KvError) -> Self {
        self.sequencer.lock().push(Outcome::Failure(error));
        self
    }

    pub fn then_throw_all(self, errors: impl IntoIterator<Item = KvError>) -> Self {
        {
            let mut sequencer = self.sequencer.lock();
            for error in errors {
                sequencer.push(Outcome::Failure(error));
            }
        }
        self
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Outcomes currently queued on this stub.
    pub fn queued(&self) -> usize {
        self.sequencer.lock().len()
    }
}
