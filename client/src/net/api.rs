//! Auth gateway to the Supabase REST auth surface.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `Ok(None)`/error since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `ApiError::Credentials` (the provider rejected
//! the request; surfaced verbatim to the user) or `ApiError::Network`
//! (the provider was unreachable or answered abnormally; the startup
//! reconciler treats this as "trust the cache"). Nothing here panics.
//!
//! The provider access token is this module's own storage slice. It never
//! appears in the session snapshot and is cleared on every local logout,
//! whatever the provider said.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use authflow::state::User;
use thiserror::Error;

#[cfg(any(test, feature = "hydrate"))]
use super::types::provider_error_message;
#[cfg(feature = "hydrate")]
use super::types::{ProviderUser, TokenGrant, normalize_user};

/// Gateway failure, split by who was at fault.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The provider rejected the request (bad credentials, duplicate
    /// registration). Human-readable, shown to the user as-is.
    #[error("{0}")]
    Credentials(String),
    /// The provider could not be reached or answered abnormally.
    #[error("network error: {0}")]
    Network(String),
}

#[cfg(any(test, feature = "hydrate"))]
const DEFAULT_SUPABASE_URL: &str = "https://learndeck.supabase.co";
#[cfg(feature = "hydrate")]
const DEFAULT_ANON_KEY: &str = "public-anon-key";

#[cfg(any(test, feature = "hydrate"))]
fn supabase_url() -> &'static str {
    option_env!("LEARNDECK_SUPABASE_URL").unwrap_or(DEFAULT_SUPABASE_URL)
}

#[cfg(feature = "hydrate")]
fn anon_key() -> &'static str {
    option_env!("LEARNDECK_SUPABASE_ANON_KEY").unwrap_or(DEFAULT_ANON_KEY)
}

#[cfg(any(test, feature = "hydrate"))]
fn token_endpoint() -> String {
    format!("{}/auth/v1/token?grant_type=password", supabase_url())
}

#[cfg(any(test, feature = "hydrate"))]
fn signup_endpoint() -> String {
    format!("{}/auth/v1/signup", supabase_url())
}

#[cfg(any(test, feature = "hydrate"))]
fn logout_endpoint() -> String {
    format!("{}/auth/v1/logout", supabase_url())
}

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint() -> String {
    format!("{}/auth/v1/user", supabase_url())
}

#[cfg(any(test, feature = "hydrate"))]
fn recover_endpoint() -> String {
    format!("{}/auth/v1/recover", supabase_url())
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Classify a non-OK provider response. 4xx means the provider understood
/// and rejected the request; everything else is a transport-level fault.
#[cfg(any(test, feature = "hydrate"))]
fn error_for_status(status: u16, body: &str) -> ApiError {
    if (400..500).contains(&status) {
        ApiError::Credentials(provider_error_message(status, body))
    } else {
        ApiError::Network(format!("request failed with status {status}"))
    }
}

// ---------------------------------------------------------------
// Provider token slice (hydrate only)
// ---------------------------------------------------------------

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "learndeck_provider_token_v1";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "hydrate")]
fn store_token(token: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(TOKEN_KEY, token).is_err() {
            log::warn!("failed to persist provider token; session will not survive restart");
        }
    }
}

#[cfg(feature = "hydrate")]
fn load_token() -> Option<String> {
    local_storage()?.get_item(TOKEN_KEY).ok().flatten()
}

#[cfg(feature = "hydrate")]
fn clear_token() {
    if let Some(storage) = local_storage() {
        if storage.remove_item(TOKEN_KEY).is_err() {
            log::warn!("failed to clear provider token");
        }
    }
}

// ---------------------------------------------------------------
// Gateway calls
// ---------------------------------------------------------------

/// Sign in with email and password.
///
/// # Errors
///
/// `Credentials` when the provider rejects the pair, `Network` when it
/// cannot be reached.
pub async fn sign_in(email: &str, password: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(&token_endpoint())
            .header("apikey", anon_key())
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(error_for_status(resp.status(), &body));
        }
        let grant: TokenGrant = resp.json().await.map_err(|e| ApiError::Network(e.to_string()))?;
        store_token(&grant.access_token);
        Ok(normalize_user(&grant.user))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Register a new account. The display name travels in the provider's
/// metadata bag and is used directly for the returned user.
///
/// # Errors
///
/// `Credentials` for rejected registrations (duplicate email, weak
/// password), `Network` when the provider cannot be reached.
pub async fn sign_up(email: &str, password: &str, name: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "email": email,
            "password": password,
            "data": { "name": name },
        });
        let resp = gloo_net::http::Request::post(&signup_endpoint())
            .header("apikey", anon_key())
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(error_for_status(resp.status(), &body));
        }
        // No session in the response means the project requires email
        // confirmation before sign-in.
        let grant: TokenGrant = resp
            .json()
            .await
            .map_err(|_| ApiError::Credentials("Registration failed".to_owned()))?;
        store_token(&grant.access_token);
        let mut user = normalize_user(&grant.user);
        if !name.trim().is_empty() {
            user.name = name.trim().to_owned();
        }
        Ok(user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password, name);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Revoke the provider session. The local token is cleared before the
/// call goes out, so a failed revocation never leaves the client holding
/// a token it believes is gone.
///
/// # Errors
///
/// `Network` when the revocation request cannot be delivered.
pub async fn sign_out() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let Some(token) = load_token() else {
            return Ok(());
        };
        clear_token();
        let resp = gloo_net::http::Request::post(&logout_endpoint())
            .header("apikey", anon_key())
            .header("Authorization", &bearer(&token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        // An already-expired token is as good as a revoked one.
        if resp.ok() || resp.status() == 401 {
            Ok(())
        } else {
            Err(ApiError::Network(format!(
                "sign-out failed with status {}",
                resp.status()
            )))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(())
    }
}

/// Resolve the provider's current session, if any.
///
/// `Ok(Some)` — valid session with a resolvable user. `Ok(None)` — the
/// provider answered and there is no session (including a stored token it
/// no longer accepts). `Err(Network)` — the provider was unreachable; the
/// caller decides what to trust.
///
/// # Errors
///
/// `Network` only; an invalid token is a settled `Ok(None)`, not an error.
pub async fn current_session() -> Result<Option<User>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let Some(token) = load_token() else {
            return Ok(None);
        };
        let resp = gloo_net::http::Request::get(&user_endpoint())
            .header("apikey", anon_key())
            .header("Authorization", &bearer(&token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if resp.status() == 401 || resp.status() == 403 {
            clear_token();
            return Ok(None);
        }
        if !resp.ok() {
            return Err(ApiError::Network(session_check_failed_message(resp.status())));
        }
        let raw: ProviderUser = resp.json().await.map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(Some(normalize_user(&raw)))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(None)
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn session_check_failed_message(status: u16) -> String {
    format!("session check failed with status {status}")
}

/// Request a password-reset email.
///
/// # Errors
///
/// `Credentials` when the provider rejects the address, `Network` when it
/// cannot be reached.
pub async fn reset_password_for_email(email: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email });
        let resp = gloo_net::http::Request::post(&recover_endpoint())
            .header("apikey", anon_key())
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(error_for_status(resp.status(), &body));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Change the signed-in user's password.
///
/// # Errors
///
/// `Credentials` when no session is held or the provider rejects the new
/// password, `Network` when it cannot be reached.
pub async fn update_password(new_password: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let Some(token) = load_token() else {
            return Err(ApiError::Credentials("Not signed in".to_owned()));
        };
        let payload = serde_json::json!({ "password": new_password });
        let resp = gloo_net::http::Request::put(&user_endpoint())
            .header("apikey", anon_key())
            .header("Authorization", &bearer(&token))
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(error_for_status(resp.status(), &body));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = new_password;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}
