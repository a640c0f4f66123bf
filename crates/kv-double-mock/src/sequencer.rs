//! Programmed outcome queues.
//!
//! A [`ResultSequencer`] hands out its outcomes first-in-first-out until one
//! remains; that last outcome is then replayed on every later call (the
//! sticky tail). The rule is encoded directly in [`SequencerState`].

use std::collections::VecDeque;

use kv_double_core::{KvError, KvResult};

/// One programmed response.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Value(T),
    Failure(KvError),
}

impl<T> Outcome<T> {
    pub fn into_result(self) -> KvResult<T> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}

/// Queue state. `Pending` always holds at least two outcomes.
#[derive(Debug, Clone, PartialEq)]
pub enum SequencerState<T> {
    Empty,
    Pending(VecDeque<Outcome<T>>),
    Exhausted(Outcome<T>),
}

/// Ordered outcomes for one stub.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSequencer<T> {
    state: SequencerState<T>,
}

impl<T> Default for ResultSequencer<T> {
    fn default() -> Self {
        Self {
            state: SequencerState::Empty,
        }
    }
}

impl<T: Clone> ResultSequencer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SequencerState<T> {
        &self.state
    }

    /// Append an outcome to the end of the chain.
    pub fn push(&mut self, outcome: Outcome<T>) {
        self.state = match std::mem::replace(&mut self.state, SequencerState::Empty) {
            SequencerState::Empty => SequencerState::Exhausted(outcome),
            SequencerState::Exhausted(last) => SequencerState::Pending(VecDeque::from([last, outcome])),
            SequencerState::Pending(mut queue) => {
                queue.push_back(outcome);
                SequencerState::Pending(queue)
            }
        };
    }

    /// Consume the next outcome; `None` when nothing was programmed.
    pub fn next_outcome(&mut self) -> Option<Outcome<T>> {
        match std::mem::replace(&mut self.state, SequencerState::Empty) {
            SequencerState::Empty => None,
            SequencerState::Exhausted(last) => {
                let replay = last.clone();
                self.state = SequencerState::Exhausted(last);
                Some(replay)
            }
            SequencerState::Pending(mut queue) => {
                let head = queue.pop_front();
                self.state = if queue.len() == 1 {
                    match queue.pop_front() {
                        Some(last) => SequencerState::Exhausted(last),
                        None => SequencerState::Empty,
                    }
                } else {
                    SequencerState::Pending(queue)
                };
                head
            }
        }
    }

    /// Outcomes still queued, counting the sticky tail once.
    pub fn len(&self) -> usize {
        match &self.state {
            SequencerState::Empty => 0,
            SequencerState::Pending(queue) => queue.len(),
            SequencerState::Exhausted(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.state, SequencerState::Empty)
    }

    /// True once only the sticky tail remains.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.state, SequencerState::Exhausted(_))
    }
}
