//! Value model shared by stores and doubles.
//!
//! - [`key`]: keys and key parts with store ordering
//! - [`value`]: stored values and versionstamps
//! - [`entry`]: read results and commit results
//! - [`options`]: read, list and enqueue options plus list selectors

mod entry;
mod key;
mod options;
mod value;

pub use entry::{CommitResult, Entry};
pub use key::{Key, KeyPart};
pub use options::{Consistency, EnqueueOptions, ListOptions, ListSelector, ReadOptions};
pub use value::{KvValue, Versionstamp, DEFAULT_VERSIONSTAMP};
