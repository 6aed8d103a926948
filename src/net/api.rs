//! Typed calls to the user REST API.
//!
//! ERROR HANDLING
//! ==============
//! Each call turns non-2xx responses into [`ApiError::Server`] carrying the
//! server's `message`, or a per-call default when the body has none.
//! Transport failures pass through untouched.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::http::{ApiClient, Method, json_body};
use super::types::{Credentials, LoginResponse, ProfileResponse, ProfileUpdate};
use crate::error::ApiError;

pub const LOGIN_PATH: &str = "/user/login";
pub const PROFILE_PATH: &str = "/user/profile";

pub const LOGIN_FAILED: &str = "Login failed, check your credentials.";
pub const PROFILE_FETCH_FAILED: &str = "Profile fetch failed";
pub const PROFILE_UPDATE_FAILED: &str = "Profile update failed";

/// Exchange credentials for a session token via `POST /user/login`.
///
/// The returned body may lack a token; callers check [`LoginResponse::token`].
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the server rejects it.
pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let credentials = Credentials { email: email.to_owned(), password: password.to_owned() };
    let body = json_body(&credentials)?;
    client
        .send(Method::Post, LOGIN_PATH, Some(body))
        .await
        .map_err(|e| e.normalize(LOGIN_FAILED))
}

/// Fetch the signed-in user's profile via `POST /user/profile`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the token is rejected.
pub async fn get_profile(client: &ApiClient) -> Result<ProfileResponse, ApiError> {
    client
        .send(Method::Post, PROFILE_PATH, None)
        .await
        .map_err(|e| e.normalize(PROFILE_FETCH_FAILED))
}

/// Update first/last name via `PUT /user/profile`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the server rejects it.
pub async fn update_profile(client: &ApiClient, update: &ProfileUpdate) -> Result<ProfileResponse, ApiError> {
    let body = json_body(update)?;
    client
        .send(Method::Put, PROFILE_PATH, Some(body))
        .await
        .map_err(|e| e.normalize(PROFILE_UPDATE_FAILED))
}
