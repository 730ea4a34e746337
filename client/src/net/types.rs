//! Provider wire records and normalization into domain entities.
//!
//! DESIGN
//! ======
//! The provider nests profile fields in a generic metadata bag and leaves
//! several fields optional. Normalization flattens that into the domain
//! `User` with explicit fallback rules rather than scattering optional
//! chaining through the UI: display name falls back to the email
//! local-part, `updated_at` falls back to `created_at`, and every account
//! is a student until the provider says otherwise.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use authflow::state::{Role, User};
use serde::Deserialize;

/// User record as the provider returns it.
#[derive(Clone, Debug, Deserialize)]
pub struct ProviderUser {
    pub id: String,
    pub email: Option<String>,
    /// Free-form metadata bag; `name` is the only key this client reads.
    #[serde(default)]
    pub user_metadata: serde_json::Value,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Successful password-grant or sign-up response.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenGrant {
    pub access_token: String,
    pub user: ProviderUser,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
}

/// Flatten a provider user record into the domain entity.
#[must_use]
pub fn normalize_user(raw: &ProviderUser) -> User {
    let email = raw.email.clone().unwrap_or_default();
    let name = raw
        .user_metadata
        .get("name")
        .and_then(serde_json::Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map_or_else(
            || email.split('@').next().unwrap_or_default().to_owned(),
            ToOwned::to_owned,
        );
    let created_at = raw.created_at.clone().unwrap_or_default();
    let updated_at = raw.updated_at.clone().unwrap_or_else(|| created_at.clone());
    User {
        id: raw.id.clone(),
        email,
        name,
        role: Role::Student,
        created_at,
        updated_at,
    }
}

/// Extract a human-readable message from a provider error body, falling
/// back to the HTTP status when the body is empty or unrecognized.
#[must_use]
pub fn provider_error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|parsed| {
            parsed
                .error_description
                .or(parsed.msg)
                .or(parsed.message)
                .filter(|message| !message.is_empty())
        })
        .unwrap_or_default()
        .unwrap_or_else(|| format!("request failed with status {status}"))
}
