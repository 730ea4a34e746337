//! Persisted session snapshot: the auth slice that survives restarts.
//!
//! DESIGN
//! ======
//! The snapshot is a strict subset of `AuthState`. Loading state and the
//! last error are transient and never stored; the provider's raw session
//! token is the gateway's own concern and never appears here. Restoring
//! always yields a loading state so the reconciler re-verifies the
//! cached flags against the provider before the guard acts on them.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::state::{AuthState, User};

/// localStorage key for the auth slice.
pub const STORAGE_KEY: &str = "learndeck_auth_v1";

/// Serialized form of the durable auth fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub is_authenticated: bool,
    pub user: Option<User>,
    pub has_launched: bool,
}

impl SessionSnapshot {
    /// Capture the durable subset of the current state.
    #[must_use]
    pub fn capture(state: &AuthState) -> Self {
        Self {
            is_authenticated: state.is_authenticated(),
            user: state.user().cloned(),
            has_launched: state.has_launched(),
        }
    }

    /// Rebuild auth state from this snapshot, pending verification.
    #[must_use]
    pub fn restore(self) -> AuthState {
        AuthState::restored(self.user, self.is_authenticated, self.has_launched)
    }
}
