//! `MockKv`: the store double.
//!
//! One `MockKv` owns one expectation registry and one interaction log behind a
//! single mutex. Each call into the double records the interaction and
//! resolves its stub under that lock, so queued outcomes are consumed in call
//! order even when the double is shared across threads.
//!
//! ```ignore
//! let mock = MockKv::new();
//! mock.when().get(Key::from(["user"])).then_return(entry);
//!
//! run_code_under_test(&mock).await;
//!
//! mock.verify().once().get(Key::from(["user"]))?;
//! mock.verify_no_more_interactions()?;
//! ```
//!
//! Instances are meant to live for exactly one test; there is no reset.

mod install;
mod trait_impl;
mod verify;
mod when;

use kv_double_core::{ConfigError, MockConfig, Versionstamp};
use parking_lot::Mutex;
use tracing::{debug, error, info};

use crate::call::{Call, CallMatcher};
use crate::error::VerifyResult;
use crate::recorder::{Interaction, InteractionLog};
use crate::registry::{ExpectationList, ExpectationRegistry};
use crate::sequencer::Outcome;
use crate::verification::{check_exhaustive, Quantifier};

pub use install::{MockInstallation, UninstallError};
pub use verify::Verifier;
pub use when::When;

struct MockState {
    registry: ExpectationRegistry,
    log: InteractionLog,
}

/// Stub/record/verify double for `KvStore`.
pub struct MockKv {
    config: MockConfig,
    default_versionstamp: Versionstamp,
    state: Mutex<MockState>,
}

impl MockKv {
    /// Mock with the default configuration.
    pub fn new() -> Self {
        info!("Creating new MockKv");
        Self::build(MockConfig::default(), Versionstamp::default())
    }

    /// Mock with a validated configuration.
    pub fn with_config(config: MockConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let versionstamp = config.versionstamp()?;
        info!(
            absent_options = ?config.absent_options,
            max_reported = config.max_reported_interactions,
            "Creating configured MockKv"
        );
        Ok(Self::build(config, versionstamp))
    }

    fn build(config: MockConfig, default_versionstamp: Versionstamp) -> Self {
        Self {
            config,
            default_versionstamp,
            state: Mutex::new(MockState {
                registry: ExpectationRegistry::new(),
                log: InteractionLog::new(),
            }),
        }
    }

    pub fn config(&self) -> &MockConfig {
        &self.config
    }

    /// Start a stub definition.
    pub fn when(&self) -> When<'_> {
        When::new(self)
    }

    /// Start a verification chain with the default quantifier (at least once).
    pub fn verify(&self) -> Verifier<'_> {
        Verifier::new(self)
    }

    /// Fail unless every recorded interaction has been verified.
    pub fn verify_no_more_interactions(&self) -> VerifyResult {
        let state = self.state.lock();
        let unverified = state.log.unverified();
        let result = check_exhaustive(&unverified, self.config.max_reported_interactions);
        if let Err(e) = &result {
            error!(unverified = unverified.len(), "{e}");
        }
        result
    }

    /// Every interaction so far, in call order.
    pub fn interactions(&self) -> Vec<Interaction> {
        self.state.lock().log.snapshot()
    }

    pub fn interaction_count(&self) -> usize {
        self.state.lock().log.len()
    }

    pub(crate) fn register<T, F>(&self, matcher: CallMatcher, select: F) -> crate::registry::Stubbing<T>
    where
        T: Clone,
        F: FnOnce(&mut ExpectationRegistry) -> &mut ExpectationList<T>,
    {
        let mut state = self.state.lock();
        debug!(stub = %matcher, "Stub registered");
        select(&mut state.registry).stub(matcher)
    }

    /// Record `call` and resolve it against the stubs in one locked step.
    pub(crate) fn dispatch<T, F>(&self, call: Call, select: F) -> Option<Outcome<T>>
    where
        T: Clone,
        F: FnOnce(&ExpectationRegistry) -> &ExpectationList<T>,
    {
        let mut guard = self.state.lock();
        let state = &mut *guard;
        let operation = call.operation();
        let seq = state.log.record(call.clone());
        let outcome = select(&state.registry).resolve(&call, self.config.absent_options);
        debug!(
            operation = %operation,
            seq,
            stubbed = outcome.is_some(),
            failure = outcome.as_ref().is_some_and(Outcome::is_failure),
            "Mock call recorded"
        );
        outcome
    }

    /// Record a call that has no stubs.
    pub(crate) fn record(&self, call: Call) {
        let operation = call.operation();
        let seq = self.state.lock().log.record(call);
        debug!(operation = %operation, seq, "Mock call recorded");
    }

    /// Mark and count the interactions `matcher` selects, then apply `quantifier`.
    pub(crate) fn verify_call(&self, quantifier: Quantifier, matcher: CallMatcher) -> VerifyResult {
        let count = self
            .state
            .lock()
            .log
            .mark_matching(&matcher, self.config.absent_options);
        let result = quantifier.check(&matcher, count);
        match &result {
            Ok(()) => debug!(call = %matcher, %quantifier, count, "Verification passed"),
            Err(e) => error!(call = %matcher, %quantifier, count, "{e}"),
        }
        result
    }

    pub(crate) fn default_versionstamp(&self) -> &Versionstamp {
        &self.default_versionstamp
    }
}

impl Default for MockKv {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MockKv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockKv")
            .field("config", &self.config)
            .field("interactions", &self.interaction_count())
            .finish_non_exhaustive()
    }
}
