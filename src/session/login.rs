//! Sign-in flow.
//!
//! `idle -> submitting -> succeeded | idle (with error)`. [`LoginForm`] holds
//! the per-form state the view renders; [`submit`] does the network work and
//! the store dispatches.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::error::ApiError;
use crate::net::api;
use crate::net::http::ApiClient;
use crate::net::types::{Credentials, UserProfile};
use crate::state::profile::ProfileAction;
use crate::state::{Action, Store};
use crate::util::token_storage::Persistence;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}

/// State of the sign-in form between keystrokes and responses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub phase: LoginPhase,
    pub error: Option<String>,
}

impl LoginForm {
    pub fn is_submitting(&self) -> bool {
        self.phase == LoginPhase::Submitting
    }

    /// Enter `Submitting` and clear the previous error. Returns `false` (and
    /// changes nothing) if a submission is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.phase = LoginPhase::Submitting;
        self.error = None;
        true
    }

    /// Leave `Submitting` with the flow's result.
    pub fn finish(&mut self, result: &Result<UserProfile, ApiError>) {
        match result {
            Ok(_) => {
                self.phase = LoginPhase::Succeeded;
                self.error = None;
            }
            Err(e) => {
                self.phase = LoginPhase::Idle;
                self.error = Some(e.to_string());
            }
        }
    }
}

/// Run one sign-in attempt.
///
/// On success the store is authenticated and holds the fetched profile. A
/// response without a token fails with [`ApiError::MissingToken`] before any
/// auth dispatch. Every failure is also recorded as a profile fetch failure.
///
/// # Errors
///
/// Returns the first [`ApiError`] raised by the login or profile call.
pub async fn submit(
    client: &ApiClient,
    store: &Store,
    credentials: &Credentials,
    persistence: Persistence,
) -> Result<UserProfile, ApiError> {
    let result = sign_in(client, store, credentials, persistence).await;
    if let Err(e) = &result {
        leptos::logging::warn!("login failed: {e}");
        store.dispatch(ProfileAction::FetchFailure(e.to_string()).into());
    }
    result
}

async fn sign_in(
    client: &ApiClient,
    store: &Store,
    credentials: &Credentials,
    persistence: Persistence,
) -> Result<UserProfile, ApiError> {
    let resp = api::login(client, &credentials.email, &credentials.password).await?;
    let token = resp.token().ok_or(ApiError::MissingToken)?.to_owned();

    store.dispatch(Action::login_with(token, persistence));
    store.dispatch(ProfileAction::FetchStart.into());

    let profile = api::get_profile(client).await?;
    store.dispatch(ProfileAction::FetchSuccess(profile.body.clone()).into());
    Ok(profile.body)
}
