use super::*;

#[test]
fn token_endpoint_uses_password_grant() {
    assert!(token_endpoint().ends_with("/auth/v1/token?grant_type=password"));
}

#[test]
fn auth_endpoints_share_the_project_base() {
    let base = supabase_url();
    assert!(signup_endpoint().starts_with(base));
    assert!(logout_endpoint().starts_with(base));
    assert!(user_endpoint().starts_with(base));
    assert!(recover_endpoint().starts_with(base));
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("tok"), "Bearer tok");
}

#[test]
fn provider_rejections_are_credential_errors() {
    let err = error_for_status(400, r#"{ "error_description": "Invalid login credentials" }"#);
    assert_eq!(err, ApiError::Credentials("Invalid login credentials".to_owned()));
}

#[test]
fn provider_rejections_fall_back_to_status_message() {
    let err = error_for_status(422, "");
    assert_eq!(err, ApiError::Credentials("request failed with status 422".to_owned()));
}

#[test]
fn server_faults_are_network_errors() {
    let err = error_for_status(503, "");
    assert_eq!(err, ApiError::Network("request failed with status 503".to_owned()));
}

#[test]
fn credential_errors_display_the_message_verbatim() {
    let err = ApiError::Credentials("User already registered".to_owned());
    assert_eq!(err.to_string(), "User already registered");
}

#[test]
fn network_errors_display_with_prefix() {
    let err = ApiError::Network("timeout".to_owned());
    assert_eq!(err.to_string(), "network error: timeout");
}

#[test]
fn session_check_failure_message_formats_status() {
    assert_eq!(session_check_failed_message(500), "session check failed with status 500");
}
