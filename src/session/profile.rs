//! Profile edits and sign-out.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::error::ApiError;
use crate::net::api;
use crate::net::http::ApiClient;
use crate::net::types::{ProfileUpdate, UserProfile};
use crate::state::profile::ProfileAction;
use crate::state::{Action, Store};

/// Trim and require both name fields.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] naming the first empty field.
pub fn validate_update(first_name: &str, last_name: &str) -> Result<ProfileUpdate, ApiError> {
    let first_name = first_name.trim();
    let last_name = last_name.trim();
    if first_name.is_empty() {
        return Err(ApiError::Validation("First name is required.".to_owned()));
    }
    if last_name.is_empty() {
        return Err(ApiError::Validation("Last name is required.".to_owned()));
    }
    Ok(ProfileUpdate { first_name: first_name.to_owned(), last_name: last_name.to_owned() })
}

/// Send a profile update and record the outcome in the store.
///
/// # Errors
///
/// Returns the [`ApiError`] from the update call.
pub async fn save_profile(client: &ApiClient, store: &Store, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
    store.dispatch(ProfileAction::UpdateStart.into());
    match api::update_profile(client, update).await {
        Ok(resp) => {
            store.dispatch(ProfileAction::UpdateSuccess(resp.body.clone()).into());
            Ok(resp.body)
        }
        Err(e) => {
            leptos::logging::warn!("profile update failed: {e}");
            store.dispatch(ProfileAction::UpdateFailure(e.to_string()).into());
            Err(e)
        }
    }
}

/// Drop the session locally.
pub fn sign_out(store: &Store) {
    store.dispatch(Action::logout());
}
