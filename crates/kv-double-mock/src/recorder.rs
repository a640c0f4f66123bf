//! Interaction log.
//!
//! Append-only record of every call made against a double, grouped by
//! operation in call order. The only mutation after append is setting the
//! `verified` flag.

use std::collections::BTreeMap;

use kv_double_core::AbsentOptionsPolicy;

use crate::call::{Call, CallMatcher, Operation};

/// One call made against the double.
#[derive(Debug, Clone, PartialEq)]
pub struct Interaction {
    /// Position of the call among all calls to the mock, from 0.
    pub seq: u64,
    pub call: Call,
    pub verified: bool,
}

impl Interaction {
    pub fn operation(&self) -> Operation {
        self.call.operation()
    }
}

#[derive(Debug, Default)]
pub struct InteractionLog {
    by_operation: BTreeMap<Operation, Vec<Interaction>>,
    next_seq: u64,
}

impl InteractionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a call; returns its sequence number.
    pub fn record(&mut self, call: Call) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.by_operation
            .entry(call.operation())
            .or_default()
            .push(Interaction {
                seq,
                call,
                verified: false,
            });
        seq
    }

    pub fn for_operation(&self, operation: Operation) -> &[Interaction] {
        self.by_operation
            .get(&operation)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Mark every interaction accepted by `matcher` as verified and return
    /// how many there were. Already verified interactions still count.
    pub fn mark_matching(&mut self, matcher: &CallMatcher, policy: AbsentOptionsPolicy) -> usize {
        let Some(interactions) = self.by_operation.get_mut(&matcher.operation()) else {
            return 0;
        };
        let mut count = 0;
        for interaction in interactions
            .iter_mut()
            .filter(|i| matcher.matches(&i.call, policy))
        {
            interaction.verified = true;
            count += 1;
        }
        count
    }

    /// Unverified interactions across all operations, in call order.
    pub fn unverified(&self) -> Vec<&Interaction> {
        let mut pending: Vec<&Interaction> = self
            .by_operation
            .values()
            .flatten()
            .filter(|i| !i.verified)
            .collect();
        pending.sort_by_key(|i| i.seq);
        pending
    }

    /// Copy of every interaction, in call order.
    pub fn snapshot(&self) -> Vec<Interaction> {
        let mut all: Vec<Interaction> = self.by_operation.values().flatten().cloned().collect();
        all.sort_by_key(|i| i.seq);
        all
    }

    pub fn len(&self) -> usize {
        self.by_operation.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
