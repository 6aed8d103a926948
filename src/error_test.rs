use super::*;

fn status(status: u16, body: &str) -> ApiError {
    ApiError::Status { status, body: body.to_owned() }
}

// =============================================================
// Classification
// =============================================================

#[test]
fn auth_failure_covers_401_and_403_only() {
    assert!(status(401, "").is_auth_failure());
    assert!(status(403, "").is_auth_failure());
    assert!(!status(400, "").is_auth_failure());
    assert!(!status(500, "").is_auth_failure());
    assert!(!ApiError::Transport("offline".into()).is_auth_failure());
}

#[test]
fn normalized_auth_failure_keeps_status() {
    let err = status(401, r#"{"message":"jwt expired"}"#).normalize("Profile fetch failed");
    assert!(err.is_auth_failure());
    assert_eq!(err.status(), Some(401));
}

// =============================================================
// Message normalization
// =============================================================

#[test]
fn normalize_prefers_server_message() {
    let err = status(400, r#"{"status":400,"message":"Error: User not found!"}"#).normalize("Login failed");
    assert_eq!(
        err,
        ApiError::Server { status: 400, message: "Error: User not found!".into() }
    );
    assert_eq!(err.to_string(), "Error: User not found!");
}

#[test]
fn normalize_falls_back_on_missing_or_blank_message() {
    assert_eq!(status(500, "{}").normalize("Login failed").to_string(), "Login failed");
    assert_eq!(
        status(500, r#"{"message":"  "}"#).normalize("Login failed").to_string(),
        "Login failed"
    );
}

#[test]
fn normalize_falls_back_on_non_json_body() {
    let err = status(502, "<html>Bad Gateway</html>").normalize("Profile update failed");
    assert_eq!(err.to_string(), "Profile update failed");
}

#[test]
fn normalize_passes_other_variants_through() {
    let err = ApiError::Transport("connection refused".into()).normalize("Login failed");
    assert_eq!(err, ApiError::Transport("connection refused".into()));
    assert_eq!(ApiError::MissingToken.normalize("x"), ApiError::MissingToken);
}

#[test]
fn display_messages_are_human_readable() {
    assert_eq!(ApiError::MissingToken.to_string(), "missing token in login response");
    assert_eq!(ApiError::Transport("offline".into()).to_string(), "network error: offline");
    assert_eq!(ApiError::Validation("First name is required.".into()).to_string(), "First name is required.");
}
