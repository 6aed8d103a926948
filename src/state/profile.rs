//! Profile slice: the signed-in user's data plus request status.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::types::UserProfile;

/// Profile data and the status of the last fetch/update.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileState {
    pub user: Option<UserProfile>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileAction {
    FetchStart,
    FetchSuccess(UserProfile),
    FetchFailure(String),
    UpdateStart,
    UpdateSuccess(UserProfile),
    UpdateFailure(String),
    /// Back to idle with no user; sent on logout.
    Reset,
}

impl ProfileState {
    pub fn reduce(&mut self, action: &ProfileAction) {
        match action {
            ProfileAction::FetchStart | ProfileAction::UpdateStart => {
                self.loading = true;
                self.error = None;
            }
            ProfileAction::FetchSuccess(user) | ProfileAction::UpdateSuccess(user) => {
                self.user = Some(user.clone());
                self.loading = false;
                self.error = None;
            }
            ProfileAction::FetchFailure(message) | ProfileAction::UpdateFailure(message) => {
                self.loading = false;
                self.error = Some(message.clone());
            }
            ProfileAction::Reset => *self = Self::default(),
        }
    }
}
