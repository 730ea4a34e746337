//! Async transition orchestration over the shared auth signal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages invoke these functions; each one brackets a gateway call with a
//! `begin`/`complete` pair on the state machine and persists the durable
//! snapshot after every commit. Gateway failures are converted into the
//! state's `error` field here and never propagate further up.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use authflow::session::SessionSnapshot;
use authflow::state::{AuthState, ProviderSession, User};
use leptos::prelude::*;

use crate::net::api::{self, ApiError};
use crate::util::session_store;

fn persist(auth: RwSignal<AuthState>) {
    let snapshot = auth.with_untracked(SessionSnapshot::capture);
    session_store::persist(&snapshot);
}

fn session_outcome(result: Result<Option<User>, ApiError>) -> ProviderSession {
    match result {
        Ok(Some(user)) => ProviderSession::Valid(user),
        Ok(None) => ProviderSession::Absent,
        Err(_) => ProviderSession::Unreachable,
    }
}

/// Sign in against the provider. Returns true when this attempt committed
/// an authenticated state; a rejected or superseded attempt returns false.
pub async fn login(auth: RwSignal<AuthState>, email: &str, password: &str) -> bool {
    let Some(token) = auth.try_update(AuthState::try_begin).flatten() else {
        // Another operation is in flight; drop this attempt.
        return false;
    };
    match api::sign_in(email, password).await {
        Ok(user) => {
            let applied = auth
                .try_update(|state| state.complete_signed_in(token, user))
                .unwrap_or(false);
            persist(auth);
            applied
        }
        Err(e) => {
            auth.update(|state| {
                state.complete_failed(token, e.to_string());
            });
            persist(auth);
            false
        }
    }
}

/// Register a new account; on success the user is signed in directly.
pub async fn register(auth: RwSignal<AuthState>, email: &str, password: &str, name: &str) -> bool {
    let Some(token) = auth.try_update(AuthState::try_begin).flatten() else {
        return false;
    };
    match api::sign_up(email, password, name).await {
        Ok(user) => {
            let applied = auth
                .try_update(|state| state.complete_signed_in(token, user))
                .unwrap_or(false);
            persist(auth);
            applied
        }
        Err(e) => {
            auth.update(|state| {
                state.complete_failed(token, e.to_string());
            });
            persist(auth);
            false
        }
    }
}

/// Sign out. Local state always clears, whatever the provider says.
pub async fn logout(auth: RwSignal<AuthState>) {
    // Supersedes any in-flight operation and raises the loading flag for
    // the duration of the revocation call.
    auth.update(|state| {
        state.begin();
    });
    if let Err(_e) = api::sign_out().await {
        #[cfg(feature = "hydrate")]
        log::warn!("provider sign-out failed, clearing local session anyway: {_e}");
    }
    auth.update(AuthState::force_logout);
    persist(auth);
}

/// Startup reconciler: resolve the cached auth state against the
/// provider's answer. Runs once per process lifetime, from app boot.
pub async fn check_auth_status(auth: RwSignal<AuthState>) {
    let Some(token) = auth.try_update(AuthState::begin) else {
        return;
    };
    let outcome = session_outcome(api::current_session().await);
    auth.update(|state| {
        state.reconcile(token, outcome);
    });
    persist(auth);
}

/// Record that the user advanced past the landing screen. Pure local
/// flag flip, persisted immediately.
pub fn mark_launched(auth: RwSignal<AuthState>) {
    auth.update(AuthState::set_has_launched);
    persist(auth);
}
