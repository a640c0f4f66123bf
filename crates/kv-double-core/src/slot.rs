//! Swappable store slot.
//!
//! Code under test reaches its store through a [`KvSlot`]. Tests swap a double
//! in with [`KvSlot::install`] and get back an [`InstallToken`] that owns the
//! store it displaced; handing the token to [`KvSlot::restore`] puts that store
//! back. Nested installs restore innermost first. A rejected restore hands the
//! token back inside [`RestoreError`], so the displaced store is never lost.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;
use tracing::{error, info};

use crate::error::SlotError;
use crate::traits::KvStore;

static NEXT_SLOT_ID: AtomicU64 = AtomicU64::new(1);

struct SlotState {
    active: Arc<dyn KvStore>,
    generation: u64,
}

/// Holder of the store currently in use.
pub struct KvSlot {
    id: u64,
    state: RwLock<SlotState>,
}

/// Proof of an install; carries the displaced store.
#[must_use = "dropping an install token makes the original store unrecoverable"]
pub struct InstallToken {
    slot_id: u64,
    generation: u64,
    original: Arc<dyn KvStore>,
}

impl InstallToken {
    /// The store that was active before the install.
    pub fn original(&self) -> &Arc<dyn KvStore> {
        &self.original
    }
}

impl fmt::Debug for InstallToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstallToken")
            .field("slot_id", &self.slot_id)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

/// A rejected restore, carrying the token back to the caller.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct RestoreError {
    error: SlotError,
    token: InstallToken,
}

impl RestoreError {
    pub fn error(&self) -> &SlotError {
        &self.error
    }

    /// Recover the token to retry the restore on the right slot or in order.
    pub fn into_token(self) -> InstallToken {
        self.token
    }
}

impl KvSlot {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            id: NEXT_SLOT_ID.fetch_add(1, Ordering::Relaxed),
            state: RwLock::new(SlotState {
                active: store,
                generation: 0,
            }),
        }
    }

    /// The store calls should go to right now.
    pub fn active(&self) -> Arc<dyn KvStore> {
        Arc::clone(&self.state.read().active)
    }

    /// Number of installs not yet restored.
    pub fn depth(&self) -> u64 {
        self.state.read().generation
    }

    /// Make `replacement` the active store.
    pub fn install(&self, replacement: Arc<dyn KvStore>) -> InstallToken {
        let mut state = self.state.write();
        let original = std::mem::replace(&mut state.active, replacement);
        state.generation += 1;
        info!(slot = self.id, generation = state.generation, "Store replacement installed");
        InstallToken {
            slot_id: self.id,
            generation: state.generation,
            original,
        }
    }

    /// Put back the store displaced by the install that issued `token`.
    pub fn restore(&self, token: InstallToken) -> Result<(), RestoreError> {
        if token.slot_id != self.id {
            error!(slot = self.id, token_slot = token.slot_id, "Restore with foreign token");
            return Err(RestoreError {
                error: SlotError::ForeignToken {
                    token_slot: token.slot_id,
                    slot: self.id,
                },
                token,
            });
        }
        let mut state = self.state.write();
        if token.generation != state.generation {
            error!(
                slot = self.id,
                token_generation = token.generation,
                current = state.generation,
                "Out-of-order restore"
            );
            let error = SlotError::OutOfOrder {
                token: token.generation,
                current: state.generation,
            };
            return Err(RestoreError { error, token });
        }
        state.active = token.original;
        state.generation -= 1;
        info!(slot = self.id, generation = state.generation, "Original store restored");
        Ok(())
    }
}

impl fmt::Debug for KvSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KvSlot")
            .field("id", &self.id)
            .field("depth", &self.depth())
            .finish_non_exhaustive()
    }
}
