//! Installing a mock into a [`KvSlot`].

use std::sync::Arc;

use kv_double_core::{InstallToken, KvSlot, SlotError};
use thiserror::Error;
use tracing::info;

use super::MockKv;

/// A mock currently installed in a slot.
///
/// Holds the token for the displaced store; [`MockInstallation::restore`]
/// puts that store back and hands the mock over for verification.
#[must_use = "restore the installation to put the original store back"]
#[derive(Debug)]
pub struct MockInstallation {
    mock: Arc<MockKv>,
    token: InstallToken,
}

/// A rejected uninstall. The installation is handed back intact.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct UninstallError {
    error: SlotError,
    installation: MockInstallation,
}

impl UninstallError {
    pub fn error(&self) -> &SlotError {
        &self.error
    }

    pub fn into_installation(self) -> MockInstallation {
        self.installation
    }
}

impl MockInstallation {
    pub fn mock(&self) -> &Arc<MockKv> {
        &self.mock
    }

    pub fn restore(self, slot: &KvSlot) -> Result<Arc<MockKv>, UninstallError> {
        let Self { mock, token } = self;
        if let Err(e) = slot.restore(token) {
            let error = e.error().clone();
            let installation = Self {
                mock,
                token: e.into_token(),
            };
            return Err(UninstallError {
                error,
                installation,
            });
        }
        info!(interactions = mock.interaction_count(), "MockKv uninstalled");
        Ok(mock)
    }
}

impl MockKv {
    /// Install a fresh default mock into `slot`.
    pub fn install(slot: &KvSlot) -> MockInstallation {
        Self::install_with(slot, Arc::new(Self::new()))
    }

    /// Install an already configured mock into `slot`.
    pub fn install_with(slot: &KvSlot, mock: Arc<MockKv>) -> MockInstallation {
        let token = slot.install(mock.clone());
        MockInstallation { mock, token }
    }
}
