//! The application store: state container, actions, and the root reducer.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::Arc;

use leptos::prelude::*;

use super::auth::{AuthAction, AuthState};
use super::profile::{ProfileAction, ProfileState};
use crate::net::types::UserProfile;
use crate::util::token_storage::{Persistence, StoredToken, TokenStorage};

/// Snapshot of every slice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    pub auth: AuthState,
    pub profile: ProfileState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Auth(AuthAction),
    Profile(ProfileAction),
}

impl Action {
    /// Sign in with a token persisted in `localStorage`.
    pub fn login(token: impl Into<String>) -> Self {
        Self::login_with(token, Persistence::Local)
    }

    pub fn login_with(token: impl Into<String>, persistence: Persistence) -> Self {
        Self::Auth(AuthAction::Login { token: token.into(), persistence })
    }

    pub fn logout() -> Self {
        Self::Auth(AuthAction::Logout)
    }

    /// Mark a saved session as being checked.
    pub fn restore_start() -> Self {
        Self::Auth(AuthAction::RestoreStart)
    }

    pub fn restore_end() -> Self {
        Self::Auth(AuthAction::RestoreEnd)
    }
}

impl From<ProfileAction> for Action {
    fn from(action: ProfileAction) -> Self {
        Self::Profile(action)
    }
}

impl AppState {
    /// Root reducer. Logout also resets the profile slice so no user data
    /// outlives the session.
    pub fn reduce(&mut self, action: &Action) {
        match action {
            Action::Auth(auth) => {
                self.auth.reduce(auth);
                if matches!(auth, AuthAction::Logout) {
                    self.profile.reduce(&ProfileAction::Reset);
                }
            }
            Action::Profile(profile) => self.profile.reduce(profile),
        }
    }
}

/// Reactive store provided through Leptos context.
///
/// Owns the session token: every login/logout dispatch is mirrored into the
/// [`TokenStorage`] before the state changes.
#[derive(Clone)]
pub struct Store {
    state: RwSignal<AppState>,
    storage: Arc<dyn TokenStorage>,
}

impl Store {
    pub fn new(storage: Arc<dyn TokenStorage>) -> Self {
        Self { state: RwSignal::new(AppState::default()), storage }
    }

    pub fn dispatch(&self, action: Action) {
        if let Action::Auth(auth) = &action {
            match auth {
                AuthAction::Login { token, persistence } => self.storage.save(token, *persistence),
                AuthAction::Logout => self.storage.clear(),
                AuthAction::RestoreStart | AuthAction::RestoreEnd => {}
            }
        }
        self.state.update(|state| state.reduce(&action));
    }

    /// Token left in browser storage by a previous page load.
    pub fn persisted(&self) -> Option<StoredToken> {
        self.storage.load()
    }

    /// Read-only handle for views that need fine-grained tracking.
    pub fn state(&self) -> ReadSignal<AppState> {
        self.state.read_only()
    }

    /// Current state without subscribing the caller.
    pub fn snapshot(&self) -> AppState {
        self.state.get_untracked()
    }

    /// Tracked read of the auth flag.
    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.auth.is_authenticated())
    }

    /// Tracked read of the current user.
    pub fn user(&self) -> Option<UserProfile> {
        self.state.with(|s| s.profile.user.clone())
    }
}
