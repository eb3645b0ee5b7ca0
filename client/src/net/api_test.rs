use super::*;

// =============================================================
// Endpoint paths
// =============================================================

#[test]
fn session_endpoint_appends_auth_session() {
    assert_eq!(
        session_endpoint("http://localhost:8000/api/v1"),
        "http://localhost:8000/api/v1/auth/session"
    );
}

#[test]
fn identity_endpoints_share_the_auth_prefix() {
    assert_eq!(login_endpoint("/api/v1"), "/api/v1/auth/login");
    assert_eq!(register_endpoint("/api/v1"), "/api/v1/auth/register");
    assert_eq!(logout_endpoint("/api/v1"), "/api/v1/auth/logout");
    assert_eq!(me_endpoint("/api/v1"), "/api/v1/auth/me");
}

// =============================================================
// ApiError display
// =============================================================

#[test]
fn api_error_messages_are_human_readable() {
    assert_eq!(
        ApiError::Transport("connection refused".to_owned()).to_string(),
        "request failed: connection refused"
    );
    assert_eq!(
        ApiError::Status(503).to_string(),
        "server responded with status 503"
    );
    assert_eq!(
        ApiError::Unavailable.to_string(),
        "not available outside the browser"
    );
}

// =============================================================
// Construction
// =============================================================

#[test]
fn http_services_default_to_the_reference_base_url() {
    assert_eq!(HttpSessionApi::default().base_url, DEFAULT_API_BASE);
    assert_eq!(HttpIdentityApi::default().base_url, DEFAULT_API_BASE);
}
