//! Profile page: greeting plus the name editor. Mounted behind `RequireAuth`.

use leptos::prelude::*;

use crate::net::http::ApiClient;
use crate::session::profile::validate_update;
use crate::state::Store;
use crate::state::profile::ProfileAction;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let store = expect_context::<Store>();
    let client = expect_context::<ApiClient>();
    let state = store.state();

    let editing = RwSignal::new(false);
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());

    let on_edit = move |_| {
        if let Some(user) = state.with_untracked(|s| s.profile.user.clone()) {
            first_name.set(user.first_name);
            last_name.set(user.last_name);
        }
        editing.set(true);
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let update = match validate_update(&first_name.get_untracked(), &last_name.get_untracked()) {
            Ok(update) => update,
            Err(e) => {
                store.dispatch(ProfileAction::UpdateFailure(e.to_string()).into());
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            let store = store.clone();
            leptos::task::spawn_local(async move {
                if crate::session::profile::save_profile(&client, &store, &update).await.is_ok() {
                    editing.set(false);
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&client, update);
        }
    };

    let greeting = move || state.with(|s| s.profile.user.as_ref().map(|u| u.full_name()).unwrap_or_default());
    let loading = move || state.with(|s| s.profile.loading);
    let error = move || state.with(|s| s.profile.error.clone());

    view! {
        <section class="profile-page">
            <div class="header">
                <h1>"Welcome back"<br/>{greeting}"!"</h1>
                <Show
                    when=move || editing.get()
                    fallback=move || view! { <button class="edit-button" on:click=on_edit>"Edit Name"</button> }
                >
                    <form class="edit-name" on:submit=on_save.clone()>
                        <input
                            type="text"
                            aria-label="First name"
                            prop:value=move || first_name.get()
                            on:input=move |ev| first_name.set(event_target_value(&ev))
                        />
                        <input
                            type="text"
                            aria-label="Last name"
                            prop:value=move || last_name.get()
                            on:input=move |ev| last_name.set(event_target_value(&ev))
                        />
                        <button type="submit" disabled=loading>"Save"</button>
                        <button type="button" on:click=move |_| editing.set(false)>"Cancel"</button>
                    </form>
                </Show>
                <Show when=move || error().is_some()>
                    <p class="error-message">{move || error().unwrap_or_default()}</p>
                </Show>
            </div>
        </section>
    }
}
