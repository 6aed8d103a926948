//! Top navigation: sign-in link, or the user's name and a sign-out button.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::session::profile::sign_out;
use crate::state::Store;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let store = expect_context::<Store>();
    let state = store.state();

    view! {
        <nav class="main-nav">
            <A href="/" attr:class="main-nav-logo">
                <h1 class="main-nav-title">"Bank Portal"</h1>
            </A>
            <div class="main-nav-items">
                <Show
                    when=move || state.with(|s| s.auth.is_authenticated())
                    fallback=|| view! { <A href="/login" attr:class="main-nav-item">"Sign In"</A> }
                >
                    <A href="/profile" attr:class="main-nav-item">
                        {move || {
                            state.with(|s| s.profile.user.as_ref().map(|u| u.first_name.clone()).unwrap_or_default())
                        }}
                    </A>
                    <button
                        class="main-nav-item"
                        on:click={
                            let store = store.clone();
                            move |_| sign_out(&store)
                        }
                    >
                        "Sign Out"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
