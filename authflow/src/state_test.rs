use super::*;

fn sample_user() -> User {
    User {
        id: "u1".to_owned(),
        email: "alice@example.com".to_owned(),
        name: "Alice".to_owned(),
        role: Role::Student,
        created_at: "2026-01-01T00:00:00Z".to_owned(),
        updated_at: "2026-01-01T00:00:00Z".to_owned(),
    }
}

fn assert_consistent(state: &AuthState) {
    if state.is_authenticated() {
        assert!(state.user().is_some(), "authenticated without a user");
    }
}

// =============================================================
// Boot and rehydration
// =============================================================

#[test]
fn new_state_is_loading_and_anonymous() {
    let state = AuthState::new();
    assert!(state.is_loading());
    assert!(!state.is_authenticated());
    assert!(!state.has_launched());
    assert!(state.user().is_none());
    assert!(state.error().is_none());
}

#[test]
fn default_matches_new() {
    assert_eq!(AuthState::default(), AuthState::new());
}

#[test]
fn restored_state_is_loading_until_verified() {
    let state = AuthState::restored(Some(sample_user()), true, true);
    assert!(state.is_loading());
    assert!(state.is_authenticated());
    assert!(state.has_launched());
}

#[test]
fn restored_without_user_falls_back_to_anonymous() {
    let state = AuthState::restored(None, true, false);
    assert!(!state.is_authenticated());
    assert!(state.user().is_none());
    assert_consistent(&state);
}

// =============================================================
// Login / register transitions
// =============================================================

#[test]
fn login_success_commits_atomically() {
    let mut state = AuthState::new();
    let token = state.begin();
    assert!(state.complete_signed_in(token, sample_user()));
    assert!(state.is_authenticated());
    assert!(!state.is_loading());
    assert!(state.error().is_none());
    assert_eq!(state.user().map(|u| u.name.as_str()), Some("Alice"));
    assert_consistent(&state);
}

#[test]
fn login_failure_returns_to_anonymous_with_message() {
    let mut state = AuthState::new();
    let token = state.begin();
    assert!(state.complete_failed(token, "Invalid login credentials".to_owned()));
    assert!(!state.is_authenticated());
    assert!(!state.is_loading());
    assert!(state.user().is_none());
    assert_eq!(state.error(), Some("Invalid login credentials"));
    assert_consistent(&state);
}

#[test]
fn next_attempt_clears_previous_error() {
    let mut state = AuthState::new();
    let token = state.begin();
    state.complete_failed(token, "bad password".to_owned());
    let retry = state.try_begin();
    assert!(retry.is_some());
    assert!(state.error().is_none());
    assert!(state.is_loading());
}

#[test]
fn try_begin_rejects_while_in_flight() {
    let mut state = AuthState::new();
    let first = state.try_begin();
    assert!(first.is_some());
    assert!(state.try_begin().is_none());
}

#[test]
fn try_begin_available_again_after_completion() {
    let mut state = AuthState::new();
    let token = state.try_begin().unwrap();
    state.complete_anonymous(token);
    assert!(state.try_begin().is_some());
}

// =============================================================
// Supersession (last-writer-wins)
// =============================================================

#[test]
fn stale_completion_is_discarded_after_logout() {
    let mut state = AuthState::new();
    let token = state.begin();
    state.force_logout();
    assert!(!state.complete_signed_in(token, sample_user()));
    assert!(!state.is_authenticated());
    assert!(state.user().is_none());
    assert!(!state.is_loading());
}

#[test]
fn newer_begin_supersedes_older_operation() {
    let mut state = AuthState::new();
    let first = state.begin();
    let second = state.begin();
    assert!(!state.complete_signed_in(first, sample_user()));
    assert!(!state.is_authenticated());
    assert!(state.complete_anonymous(second));
    assert!(!state.is_loading());
}

#[test]
fn stale_failure_does_not_clobber_newer_success() {
    let mut state = AuthState::new();
    let first = state.begin();
    let second = state.begin();
    assert!(state.complete_signed_in(second, sample_user()));
    assert!(!state.complete_failed(first, "late network error".to_owned()));
    assert!(state.is_authenticated());
    assert!(state.error().is_none());
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_reports_loading_while_revocation_is_in_flight() {
    let mut state = AuthState::new();
    let token = state.begin();
    state.complete_signed_in(token, sample_user());

    // Sign-out brackets the provider call with begin/force_logout.
    state.begin();
    assert!(state.is_loading(), "loading must cover the sign-out round trip");
    assert!(state.is_authenticated(), "still signed in until the local clear");

    state.force_logout();
    assert!(!state.is_loading());
    assert!(!state.is_authenticated());
}

#[test]
fn logout_is_unconditional_and_local() {
    let mut state = AuthState::new();
    let token = state.begin();
    state.complete_signed_in(token, sample_user());
    state.set_has_launched();
    state.force_logout();
    assert!(!state.is_authenticated());
    assert!(state.user().is_none());
    assert!(!state.is_loading());
    assert!(state.error().is_none());
    assert!(state.has_launched(), "launch flag survives logout");
}

// =============================================================
// Startup reconciliation
// =============================================================

#[test]
fn reconcile_valid_session_overwrites_cached_anonymous() {
    let mut state = AuthState::restored(None, false, true);
    let token = state.begin();
    assert!(state.reconcile(token, ProviderSession::Valid(sample_user())));
    assert!(state.is_authenticated());
    assert!(!state.is_loading());
}

#[test]
fn reconcile_absent_session_overwrites_cached_authenticated() {
    let mut state = AuthState::restored(Some(sample_user()), true, true);
    let token = state.begin();
    assert!(state.reconcile(token, ProviderSession::Absent));
    assert!(!state.is_authenticated());
    assert!(state.user().is_none());
    assert!(!state.is_loading());
}

#[test]
fn reconcile_unreachable_trusts_cached_authentication() {
    let mut state = AuthState::restored(Some(sample_user()), true, true);
    let token = state.begin();
    assert!(state.reconcile(token, ProviderSession::Unreachable));
    assert!(state.is_authenticated());
    assert!(state.user().is_some());
    assert!(!state.is_loading());
    assert_consistent(&state);
}

#[test]
fn reconcile_unreachable_never_authenticates_anonymous_cache() {
    let mut state = AuthState::restored(None, false, false);
    let token = state.begin();
    assert!(state.reconcile(token, ProviderSession::Unreachable));
    assert!(!state.is_authenticated());
    assert!(!state.is_loading());
}

// =============================================================
// Invariants across sequences
// =============================================================

#[test]
fn has_launched_is_monotonic() {
    let mut state = AuthState::new();
    state.set_has_launched();
    let token = state.begin();
    state.complete_failed(token, "oops".to_owned());
    assert!(state.has_launched());
    let token = state.begin();
    state.complete_signed_in(token, sample_user());
    assert!(state.has_launched());
    state.force_logout();
    assert!(state.has_launched());
    let token = state.begin();
    state.reconcile(token, ProviderSession::Absent);
    assert!(state.has_launched());
}

#[test]
fn authenticated_implies_user_across_transition_sequence() {
    let mut state = AuthState::new();
    assert_consistent(&state);

    let token = state.begin();
    state.complete_signed_in(token, sample_user());
    assert_consistent(&state);

    let token = state.begin();
    state.complete_failed(token, "expired".to_owned());
    assert_consistent(&state);

    let token = state.begin();
    state.reconcile(token, ProviderSession::Valid(sample_user()));
    assert_consistent(&state);

    state.force_logout();
    assert_consistent(&state);

    let token = state.begin();
    state.reconcile(token, ProviderSession::Unreachable);
    assert_consistent(&state);
}
