use super::*;

fn raw_user(email: Option<&str>, metadata: serde_json::Value) -> ProviderUser {
    ProviderUser {
        id: "u1".to_owned(),
        email: email.map(ToOwned::to_owned),
        user_metadata: metadata,
        created_at: Some("2026-01-01T00:00:00Z".to_owned()),
        updated_at: None,
    }
}

// =============================================================
// User normalization
// =============================================================

#[test]
fn name_comes_from_metadata_when_present() {
    let raw = raw_user(Some("alice@example.com"), serde_json::json!({ "name": "Alice" }));
    let user = normalize_user(&raw);
    assert_eq!(user.name, "Alice");
    assert_eq!(user.email, "alice@example.com");
}

#[test]
fn name_falls_back_to_email_local_part() {
    let raw = raw_user(Some("alice@example.com"), serde_json::json!({}));
    assert_eq!(normalize_user(&raw).name, "alice");
}

#[test]
fn blank_metadata_name_is_treated_as_absent() {
    let raw = raw_user(Some("bob@example.com"), serde_json::json!({ "name": "   " }));
    assert_eq!(normalize_user(&raw).name, "bob");
}

#[test]
fn missing_email_yields_empty_strings_not_panics() {
    let raw = raw_user(None, serde_json::Value::Null);
    let user = normalize_user(&raw);
    assert_eq!(user.email, "");
    assert_eq!(user.name, "");
}

#[test]
fn every_normalized_account_is_a_student() {
    let raw = raw_user(Some("alice@example.com"), serde_json::json!({ "role": "admin" }));
    assert_eq!(normalize_user(&raw).role, authflow::state::Role::Student);
}

#[test]
fn updated_at_defaults_to_created_at() {
    let raw = raw_user(Some("alice@example.com"), serde_json::json!({}));
    let user = normalize_user(&raw);
    assert_eq!(user.updated_at, user.created_at);
}

#[test]
fn token_grant_parses_provider_payload() {
    let body = r#"{
        "access_token": "tok",
        "token_type": "bearer",
        "user": {
            "id": "u1",
            "email": "alice@example.com",
            "user_metadata": { "name": "Alice" },
            "created_at": "2026-01-01T00:00:00Z"
        }
    }"#;
    let grant: TokenGrant = serde_json::from_str(body).unwrap();
    assert_eq!(grant.access_token, "tok");
    assert_eq!(normalize_user(&grant.user).name, "Alice");
}

// =============================================================
// Error message extraction
// =============================================================

#[test]
fn error_message_prefers_error_description() {
    let body = r#"{ "error_description": "Invalid login credentials" }"#;
    assert_eq!(provider_error_message(400, body), "Invalid login credentials");
}

#[test]
fn error_message_accepts_msg_field() {
    let body = r#"{ "msg": "User already registered" }"#;
    assert_eq!(provider_error_message(422, body), "User already registered");
}

#[test]
fn error_message_falls_back_to_status() {
    assert_eq!(provider_error_message(500, ""), "request failed with status 500");
    assert_eq!(provider_error_message(502, "<html>"), "request failed with status 502");
    assert_eq!(provider_error_message(400, "{}"), "request failed with status 400");
}
