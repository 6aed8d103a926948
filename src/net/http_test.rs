use super::*;
use crate::test_helpers::{Harness, MockTransport, test_config};
use crate::util::token_storage::MemoryStorage;

#[derive(Debug, serde::Deserialize, PartialEq)]
struct Pong {
    ok: bool,
}

// =============================================================
// Request building
// =============================================================

#[test]
fn build_request_joins_base_url_and_sets_json_header() {
    let h = Harness::new();
    let req = h.client.build_request(Method::Post, "/user/login", Some("{}".into()));
    assert_eq!(req.url, "http://api.test/api/v1/user/login");
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.header("content-type"), Some("application/json"));
    assert_eq!(req.body.as_deref(), Some("{}"));
}

#[test]
fn build_request_without_token_has_no_authorization() {
    let h = Harness::new();
    let req = h.client.build_request(Method::Get, "/user/profile", None);
    assert!(req.header("Authorization").is_none());
}

#[test]
fn build_request_reads_token_from_storage_each_time() {
    let h = Harness::new();
    assert!(h.client.build_request(Method::Get, "/x", None).header("Authorization").is_none());

    h.storage.save("fresh", crate::util::token_storage::Persistence::Session);
    let req = h.client.build_request(Method::Get, "/x", None);
    assert_eq!(req.header("Authorization"), Some("Bearer fresh"));
}

#[tokio::test]
async fn every_request_carries_stored_token_as_bearer() {
    let h = Harness::with_token("jwt-abc");
    h.transport
        .reply(200, serde_json::json!({ "ok": true }))
        .reply(200, serde_json::json!({ "ok": true }))
        .reply(500, serde_json::json!({}));

    let _: Pong = h.client.send(Method::Post, "/user/profile", None).await.unwrap();
    let _: Pong = h.client.send(Method::Put, "/user/profile", Some("{}".into())).await.unwrap();
    let _ = h.client.send::<Pong>(Method::Post, "/user/login", None).await;

    let requests = h.transport.requests();
    assert_eq!(requests.len(), 3);
    for req in requests {
        assert_eq!(req.header("Authorization"), Some("Bearer jwt-abc"));
    }
}

// =============================================================
// Response handling
// =============================================================

#[tokio::test]
async fn send_decodes_success_body() {
    let h = Harness::new();
    h.transport.reply(200, serde_json::json!({ "ok": true }));
    let pong: Pong = h.client.send(Method::Get, "/ping", None).await.unwrap();
    assert_eq!(pong, Pong { ok: true });
}

#[tokio::test]
async fn send_reports_decode_error_for_bad_body() {
    let h = Harness::new();
    h.transport.reply_raw(200, "not json");
    let err = h.client.send::<Pong>(Method::Get, "/ping", None).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn non_auth_error_status_passes_through_without_logout() {
    let h = Harness::with_token("jwt");
    h.store.dispatch(crate::state::Action::login("jwt"));
    h.transport.reply_raw(500, r#"{"message":"boom"}"#);

    let err = h.client.send::<Pong>(Method::Get, "/ping", None).await.unwrap_err();
    assert_eq!(err, ApiError::Status { status: 500, body: r#"{"message":"boom"}"#.into() });
    assert!(h.store.snapshot().auth.is_authenticated());
    assert_eq!(h.storage.token().as_deref(), Some("jwt"));
}

#[tokio::test]
async fn transport_error_passes_through_without_logout() {
    let h = Harness::with_token("jwt");
    h.store.dispatch(crate::state::Action::login("jwt"));
    h.transport.fail("connection refused");

    let err = h.client.send::<Pong>(Method::Get, "/ping", None).await.unwrap_err();
    assert_eq!(err, ApiError::Transport("connection refused".into()));
    assert!(h.store.snapshot().auth.is_authenticated());
}

#[tokio::test]
async fn status_401_and_403_clear_auth_on_any_endpoint() {
    for (status, path) in [(401, "/user/profile"), (403, "/user/login"), (401, "/anything/else")] {
        let h = Harness::with_token("jwt");
        h.store.dispatch(crate::state::Action::login("jwt"));
        h.transport.reply(status, serde_json::json!({ "message": "Unauthorized" }));

        let err = h.client.send::<Pong>(Method::Post, path, None).await.unwrap_err();
        assert!(err.is_auth_failure(), "{status} on {path}");
        assert!(!h.store.snapshot().auth.is_authenticated(), "{status} on {path}");
        assert!(h.storage.token().is_none(), "{status} on {path}");
    }
}

#[tokio::test]
async fn auth_failure_handler_receives_status() {
    let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
    let transport = MockTransport::new();
    transport.reply(403, serde_json::json!({}));
    let sink = seen.clone();
    let client = ApiClient::new(test_config(), transport, Arc::new(MemoryStorage::default()))
        .on_auth_failure(move |status| sink.lock().unwrap().push(status));

    let _ = client.send::<Pong>(Method::Get, "/x", None).await;
    assert_eq!(*seen.lock().unwrap(), vec![403]);
}

#[tokio::test]
async fn client_makes_a_single_attempt() {
    let h = Harness::new();
    h.transport.fail("timeout").reply(200, serde_json::json!({ "ok": true }));
    assert!(h.client.send::<Pong>(Method::Get, "/x", None).await.is_err());
    assert_eq!(h.transport.requests().len(), 1);
}

#[tokio::test]
async fn offline_transport_always_fails() {
    let req = HttpRequest { method: Method::Get, url: "/".into(), headers: vec![], body: None };
    let err = OfflineTransport.send(req).await.unwrap_err();
    assert_eq!(err, ApiError::Transport("not available on server".into()));
}

#[test]
fn json_body_serializes_value() {
    assert_eq!(json_body(&serde_json::json!({ "a": 1 })).unwrap(), r#"{"a":1}"#);
}
