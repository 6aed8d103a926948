//! Route guard for views that need a signed-in user.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::Store;
use crate::state::auth::AuthState;

pub const LOGIN_ROUTE: &str = "/login";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    /// A saved session is still being checked; decide once it settles.
    Pending,
    Redirect(&'static str),
}

/// Pure access check: render when authenticated, wait while a session
/// restore is in flight, otherwise send to login.
pub fn guard(auth: &AuthState) -> GuardDecision {
    if auth.is_authenticated() {
        GuardDecision::Render
    } else if auth.is_restoring() {
        GuardDecision::Pending
    } else {
        GuardDecision::Redirect(LOGIN_ROUTE)
    }
}

/// Renders `children` only while the store is authenticated. Re-evaluates on
/// every auth change, so a logout elsewhere redirects immediately.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let state = expect_context::<Store>().state();

    move || match state.with(|s| guard(&s.auth)) {
        GuardDecision::Render => children().into_any(),
        GuardDecision::Pending => view! { <p class="loading">"Loading..."</p> }.into_any(),
        GuardDecision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
    }
}
