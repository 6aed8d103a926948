//! Shared fixtures for unit tests: a scripted transport and wired-up
//! client/store pairs.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::net::http::{ApiClient, HttpRequest, HttpResponse, HttpTransport};
use crate::net::types::UserProfile;
use crate::state::Store;
use crate::util::token_storage::{MemoryStorage, Persistence, TokenStorage};

pub const BASE_URL: &str = "http://api.test/api/v1";

// =========================================================================
// MockTransport
// =========================================================================

/// Replays queued results in order and records every request it receives.
/// Once the queue is drained every call fails with a transport error.
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<Result<HttpResponse, ApiError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(&self, status: u16, body: serde_json::Value) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse { status, body: body.to_string() }));
        self
    }

    pub fn reply_raw(&self, status: u16, body: &str) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse { status, body: body.to_owned() }));
        self
    }

    pub fn fail(&self, message: &str) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(ApiError::Transport(message.to_owned())));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted reply".to_owned())))
    }
}

// =========================================================================
// Fixtures
// =========================================================================

pub fn test_config() -> ApiConfig {
    ApiConfig::resolve(Some(BASE_URL), None)
}

pub fn tony() -> UserProfile {
    UserProfile {
        id: Some("u-1".to_owned()),
        email: "tony@stark.com".to_owned(),
        first_name: "Tony".to_owned(),
        last_name: "Stark".to_owned(),
        created_at: None,
        updated_at: None,
    }
}

pub fn profile_json(user: &UserProfile) -> serde_json::Value {
    serde_json::json!({
        "status": 200,
        "message": "Successfully got user profile data",
        "body": user,
    })
}

pub fn login_json(token: &str) -> serde_json::Value {
    serde_json::json!({
        "status": 200,
        "message": "User successfully logged in",
        "body": { "token": token },
    })
}

/// Everything a flow test needs, wired the way `App` wires it.
pub struct Harness {
    pub transport: Arc<MockTransport>,
    pub storage: Arc<MemoryStorage>,
    pub store: Store,
    pub client: ApiClient,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_storage(MemoryStorage::default())
    }

    pub fn with_token(token: &str) -> Self {
        Self::with_storage(MemoryStorage::with_token(token, Persistence::Local))
    }

    fn with_storage(storage: MemoryStorage) -> Self {
        let transport = MockTransport::new();
        let storage = Arc::new(storage);
        let shared: Arc<dyn TokenStorage> = storage.clone();
        let store = Store::new(shared.clone());
        let client = crate::app::build_client(test_config(), transport.clone(), shared, &store);
        Self { transport, storage, store, client }
    }
}
