//! Compensating avatar deletion.

use std::sync::Arc;

use tracing::{error, info};

use crate::domain::errors::AvatarError;
use crate::domain::ports::HostSessionPort;

/// Clears the client's avatar attribute on the host.
///
/// Bound to its own menu action, and reused as the compensating
/// transaction when the set-avatar pipeline fails after host or disk state
/// may have been touched. Best-effort: two independent host calls, never
/// retried, failures logged and surfaced.
pub struct ClearAvatarUseCase {
    session: Arc<dyn HostSessionPort>,
}

impl ClearAvatarUseCase {
    /// Creates the use case over a host session.
    #[must_use]
    pub fn new(session: Arc<dyn HostSessionPort>) -> Self {
        Self { session }
    }

    /// Sets the avatar attribute to empty, then commits.
    ///
    /// # Errors
    /// `RegistrationFailed` when the attribute cannot be cleared;
    /// `CommitFailed` when the flush is rejected.
    pub fn execute(&self) -> Result<(), AvatarError> {
        info!("Clearing avatar");

        self.session.set_avatar_digest(None).map_err(|e| {
            error!(error = %e, "Failed to clear avatar attribute");
            AvatarError::registration(e.to_string())
        })?;

        self.session.commit_self_updates().map_err(|e| {
            error!(error = %e, "Failed to flush avatar deletion");
            AvatarError::commit(e.to_string())
        })?;

        Ok(())
    }
}
