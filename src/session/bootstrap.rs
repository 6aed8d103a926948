//! Session restore on page load.
//!
//! Called once by the application entry point. A persisted token is checked
//! with a single profile fetch: success signs the user back in, any failure
//! signs them out and clears storage.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use crate::net::api;
use crate::net::http::ApiClient;
use crate::state::profile::ProfileAction;
use crate::state::{Action, Store};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// No token in storage; nothing to do.
    NoSession,
    /// The store already holds this session's user.
    AlreadyLoaded,
    /// Token accepted; auth and profile restored.
    Restored,
    /// Token rejected or unreachable server; session cleared.
    Cleared,
}

/// Restore the persisted session into `store`.
///
/// The auth slice is marked restoring while the token is checked, and the
/// mark is cleared on every outcome.
pub async fn bootstrap(client: &ApiClient, store: &Store) -> BootstrapOutcome {
    let outcome = restore(client, store).await;
    store.dispatch(Action::restore_end());
    outcome
}

async fn restore(client: &ApiClient, store: &Store) -> BootstrapOutcome {
    let Some(stored) = store.persisted() else {
        return BootstrapOutcome::NoSession;
    };

    let current = store.snapshot();
    if current.auth.token() == Some(stored.token.as_str()) && current.profile.user.is_some() {
        return BootstrapOutcome::AlreadyLoaded;
    }

    store.dispatch(Action::restore_start());
    match api::get_profile(client).await {
        Ok(resp) => {
            store.dispatch(Action::login_with(stored.token, stored.persistence));
            store.dispatch(ProfileAction::FetchSuccess(resp.body).into());
            leptos::logging::log!("session restored");
            BootstrapOutcome::Restored
        }
        Err(e) => {
            leptos::logging::warn!("session restore failed: {e}");
            store.dispatch(Action::logout());
            BootstrapOutcome::Cleared
        }
    }
}
