//! Landing page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <h2 class="sr-only">"Promoted Content"</h2>
            <p class="subtitle">"No fees."</p>
            <p class="subtitle">"No minimum deposit."</p>
            <p class="subtitle">"High interest rates."</p>
            <p class="text">"Open a savings account with us today!"</p>
            <A href="/login" attr:class="sign-in-button">"Sign In"</A>
        </section>
    }
}
