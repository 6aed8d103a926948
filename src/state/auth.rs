//! Auth slice: the session token and whether the user is signed in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route guard and the header; written only through
//! [`AuthAction`] dispatches on the store.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::fmt;

use crate::util::token_storage::Persistence;

/// Authentication state. `is_authenticated()` is derived from the token, so
/// the two can never disagree.
///
/// `restoring` is set from page load until the session bootstrap settles,
/// so guards can hold off instead of redirecting a user whose saved session
/// is still being checked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    token: Option<String>,
    restoring: bool,
}

impl AuthState {
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_restoring(&self) -> bool {
        self.restoring
    }

    pub fn reduce(&mut self, action: &AuthAction) {
        match action {
            AuthAction::Login { token, .. } => self.token = Some(token.clone()),
            AuthAction::Logout => self.token = None,
            AuthAction::RestoreStart => self.restoring = true,
            AuthAction::RestoreEnd => self.restoring = false,
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum AuthAction {
    Login { token: String, persistence: Persistence },
    Logout,
    RestoreStart,
    RestoreEnd,
}

impl fmt::Debug for AuthAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login { persistence, .. } => f
                .debug_struct("Login")
                .field("token", &"<redacted>")
                .field("persistence", persistence)
                .finish(),
            Self::Logout => f.write_str("Logout"),
            Self::RestoreStart => f.write_str("RestoreStart"),
            Self::RestoreEnd => f.write_str("RestoreEnd"),
        }
    }
}
