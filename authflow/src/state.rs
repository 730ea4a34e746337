//! Auth state container and its named transitions.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `AuthState` exists per running client. Screens and the route guard
//! read it; the transition orchestrator in the `client` crate is its only
//! writer. Every transition commits as one atomic field replacement so
//! readers never observe a half-applied login or logout.
//!
//! CONCURRENCY
//! ===========
//! Gateway calls suspend between `begin` and `complete_*`. An `OpToken`
//! pins each in-flight operation: completions carrying a stale token are
//! discarded, so whichever operation committed last wins and two
//! operations never merge field-by-field.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use serde::{Deserialize, Serialize};

/// Role attached to an account. Accounts created from this client are
/// always students; other roles only ever arrive from the provider.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Instructor,
    Admin,
}

/// The authenticated identity, normalized from the provider's user record.
///
/// The container holds a copy and never mutates it in place; updates
/// replace the whole record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub created_at: String,
    pub updated_at: String,
}

/// Handle for one in-flight operation. Completions are applied only while
/// their token is still the container's current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpToken(u64);

/// What the provider reported when the startup reconciler asked for the
/// current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProviderSession {
    /// A valid session with a resolvable user.
    Valid(User),
    /// The provider answered and reported no session.
    Absent,
    /// The provider could not be reached (network or transient failure).
    Unreachable,
}

/// Client-side authentication state.
///
/// Fields are private so the named transitions below are the only
/// mutation path; `is_authenticated() == true` implies a user is present
/// by construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    user: Option<User>,
    is_authenticated: bool,
    is_loading: bool,
    has_launched: bool,
    error: Option<String>,
    op_seq: u64,
    in_flight: bool,
}

impl AuthState {
    /// Cold-boot state: nothing known yet, loading until the startup
    /// reconciler settles. The route guard never redirects while loading.
    #[must_use]
    pub fn new() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            is_loading: true,
            has_launched: false,
            error: None,
            op_seq: 0,
            in_flight: false,
        }
    }

    /// State rehydrated from a persisted snapshot. `is_loading` is always
    /// true here: a stored session may have expired externally, so the
    /// cached flags are not trusted until the reconciler has run.
    ///
    /// A snapshot claiming authentication without a user record is
    /// treated as anonymous.
    #[must_use]
    pub(crate) fn restored(user: Option<User>, is_authenticated: bool, has_launched: bool) -> Self {
        let is_authenticated = is_authenticated && user.is_some();
        Self {
            user: if is_authenticated { user } else { None },
            is_authenticated,
            is_loading: true,
            has_launched,
            error: None,
            op_seq: 0,
            in_flight: false,
        }
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub fn has_launched(&self) -> bool {
        self.has_launched
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start a login/register operation. Refuses to start while another
    /// operation is in flight; the caller should drop the attempt.
    pub fn try_begin(&mut self) -> Option<OpToken> {
        if self.in_flight {
            return None;
        }
        Some(self.begin())
    }

    /// Start an operation unconditionally, superseding any in-flight one.
    /// The superseded operation's eventual completion is discarded. Used
    /// by the startup reconciler and anywhere last-writer-wins is wanted.
    pub fn begin(&mut self) -> OpToken {
        self.op_seq += 1;
        self.in_flight = true;
        self.is_loading = true;
        self.error = None;
        OpToken(self.op_seq)
    }

    fn settle(&mut self, token: OpToken) -> bool {
        if token.0 != self.op_seq {
            return false;
        }
        self.in_flight = false;
        self.is_loading = false;
        true
    }

    /// Commit a successful sign-in/sign-up. Returns false (and changes
    /// nothing) when the operation has been superseded.
    pub fn complete_signed_in(&mut self, token: OpToken, user: User) -> bool {
        if !self.settle(token) {
            return false;
        }
        self.user = Some(user);
        self.is_authenticated = true;
        self.error = None;
        true
    }

    /// Commit a settled anonymous outcome (no session at the provider).
    pub fn complete_anonymous(&mut self, token: OpToken) -> bool {
        if !self.settle(token) {
            return false;
        }
        self.user = None;
        self.is_authenticated = false;
        self.error = None;
        true
    }

    /// Commit a failed operation. State returns to anonymous with the
    /// failure message surfaced for the action the user just took.
    pub fn complete_failed(&mut self, token: OpToken, message: String) -> bool {
        if !self.settle(token) {
            return false;
        }
        self.user = None;
        self.is_authenticated = false;
        self.error = Some(message);
        true
    }

    /// Commit the startup reconciler's outcome.
    ///
    /// The provider is the source of truth when it answers; the cached
    /// flags survive only when the provider is unreachable. That
    /// asymmetry keeps a transient network failure from logging the user
    /// out while never authenticating anyone on the strength of a
    /// network error alone.
    pub fn reconcile(&mut self, token: OpToken, outcome: ProviderSession) -> bool {
        match outcome {
            ProviderSession::Valid(user) => self.complete_signed_in(token, user),
            ProviderSession::Absent => self.complete_anonymous(token),
            ProviderSession::Unreachable => self.settle(token),
        }
    }

    /// Unconditional local logout. Supersedes any in-flight operation and
    /// always reaches the anonymous state, whatever the provider said.
    /// `has_launched` survives; it is sticky for the install's lifetime.
    pub fn force_logout(&mut self) {
        self.op_seq += 1;
        self.in_flight = false;
        self.user = None;
        self.is_authenticated = false;
        self.is_loading = false;
        self.error = None;
    }

    /// Record that the user has advanced past the landing screen.
    /// Monotonic: nothing ever resets it within an install.
    pub fn set_has_launched(&mut self) {
        self.has_launched = true;
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}
