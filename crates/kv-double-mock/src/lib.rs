//! kv-double Mock Engine
//!
//! Stub, record and verify engine for `KvStore` test doubles.
//!
//! # Architecture
//!
//! - Argument matchers (`matchers`) and per-operation call matchers (`call`)
//! - Result sequencer with a sticky last outcome (`sequencer`)
//! - Expectation registry, first registered match wins (`registry`)
//! - Interaction recorder with verified flags (`recorder`)
//! - Quantifiers and the exhaustiveness check (`verification`)
//! - The `MockKv` double tying these together (`mock`)
//!
//! # Example
//!
//! ```
//! use kv_double_core::{Entry, Key, KvStore, Versionstamp};
//! use kv_double_mock::MockKv;
//! use serde_json::json;
//!
//! # tokio_test_block(async {
//! let mock = MockKv::new();
//! let key = Key::from(["user", "ada"]);
//! mock.when()
//!     .get(key.clone())
//!     .then_return(Entry::new(key.clone(), json!({"name": "Ada"}), Versionstamp::default()));
//!
//! let entry = mock.get(&key, None).await.unwrap();
//! assert_eq!(entry.value, Some(json!({"name": "Ada"})));
//!
//! mock.verify().once().get(key).unwrap();
//! mock.verify_no_more_interactions().unwrap();
//! # });
//! # fn tokio_test_block(f: impl std::future::Future<Output = ()>) {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

pub mod call;
pub mod error;
pub mod matchers;
pub mod mock;
pub mod recorder;
pub mod registry;
pub mod render;
pub mod sequencer;
pub mod verification;

// Re-exports for convenience
pub use call::{Call, CallMatcher, Operation};
pub use error::{VerificationError, VerifyResult};
pub use matchers::{Arg, ArgMatcher, Matcher};
pub use mock::{MockInstallation, MockKv, UninstallError, Verifier, When};
pub use recorder::Interaction;
pub use registry::Stubbing;
pub use sequencer::Outcome;
pub use verification::Quantifier;
