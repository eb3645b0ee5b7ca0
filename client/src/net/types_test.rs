use super::*;

#[test]
fn session_request_serializes_backend_field_names() {
    let req = SessionRequest {
        language_preference: "fr".to_owned(),
        user_agent: "test-agent".to_owned(),
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["language_preference"], "fr");
    assert_eq!(json["user_agent"], "test-agent");
}

#[test]
fn session_response_deserializes_backend_payload() {
    let raw = r#"{
        "session_id": "0e3c9f2a-9a0f-4f3b-8f63-2f6f9a1b6c5d",
        "message": "Session created successfully",
        "language_preference": "en"
    }"#;
    let resp: SessionResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.session_id, "0e3c9f2a-9a0f-4f3b-8f63-2f6f9a1b6c5d");
    assert_eq!(resp.language_preference, "en");
}

#[test]
fn register_request_carries_split_name_fields() {
    let req = RegisterRequest {
        email: "ada@example.com".to_owned(),
        password: "pw".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["first_name"], "Ada");
    assert_eq!(json["last_name"], "Lovelace");
}
