//! Sign-in page.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::http::ApiClient;
use crate::net::types::Credentials;
use crate::session::login::LoginForm;
use crate::state::Store;
use crate::util::token_storage::Persistence;

pub const PROFILE_ROUTE: &str = "/profile";

/// Email/password form. Navigates to the profile on success; otherwise shows
/// the server's message under the form.
#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<Store>();
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(false);
    let form = RwSignal::new(LoginForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !form.try_update(LoginForm::begin).unwrap_or(false) {
            return;
        }
        let credentials = Credentials { email: email.get_untracked(), password: password.get_untracked() };
        let persistence = if remember.get_untracked() { Persistence::Local } else { Persistence::Session };

        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            let store = store.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::session::login::submit(&client, &store, &credentials, persistence).await;
                form.update(|f| f.finish(&result));
                if result.is_ok() {
                    navigate(PROFILE_ROUTE, NavigateOptions::default());
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&client, &store, &navigate, credentials, persistence);
        }
    };

    view! {
        <section class="sign-in-content">
            <h1>"Sign In"</h1>
            <form on:submit=on_submit>
                <div class="input-wrapper">
                    <label for="username">"Username"</label>
                    <input
                        id="username"
                        type="text"
                        autocomplete="username"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>
                <div class="input-wrapper">
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </div>
                <div class="input-remember">
                    <input
                        id="remember-me"
                        type="checkbox"
                        prop:checked=move || remember.get()
                        on:change=move |ev| remember.set(event_target_checked(&ev))
                    />
                    <label for="remember-me">"Remember me"</label>
                </div>
                <Show when=move || form.with(|f| f.error.is_some())>
                    <p class="error-message">{move || form.with(|f| f.error.clone().unwrap_or_default())}</p>
                </Show>
                <button class="sign-in-button" type="submit" disabled=move || form.with(LoginForm::is_submitting)>
                    {move || if form.with(LoginForm::is_submitting) { "Signing in..." } else { "Sign In" }}
                </button>
            </form>
        </section>
    }
}
