//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{header::SiteHeader, route_guard::RequireAuth};
use crate::config::ApiConfig;
use crate::net::http::{ApiClient, HttpTransport, default_transport};
use crate::pages::{home::HomePage, login::LoginPage, not_found::NotFoundPage, profile::ProfilePage};
use crate::state::{Action, Store};
use crate::util::token_storage::{BrowserStorage, TokenStorage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Wire the REST client to the store: any 401/403 dispatches logout.
pub fn build_client(
    config: ApiConfig,
    transport: Arc<dyn HttpTransport>,
    storage: Arc<dyn TokenStorage>,
    store: &Store,
) -> ApiClient {
    let store = store.clone();
    ApiClient::new(config, transport, storage).on_auth_failure(move |_| store.dispatch(Action::logout()))
}

/// Root application component.
///
/// Builds the store and client, provides both as context, and on the client
/// runs the session bootstrap exactly once. Guarded routes stay pending until
/// that bootstrap finishes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ApiConfig::from_build_env();
    let storage: Arc<dyn TokenStorage> = Arc::new(BrowserStorage::new(config.token_storage_key.clone()));
    let store = Store::new(storage.clone());
    // Server and first client render both hold guarded routes until the
    // browser-side bootstrap has checked the saved token.
    store.dispatch(Action::restore_start());
    let client = build_client(config, default_transport(), storage, &store);

    provide_context(store.clone());
    provide_context(client.clone());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = crate::session::bootstrap::bootstrap(&client, &store).await;
        leptos::logging::log!("session bootstrap: {outcome:?}");
    });

    #[cfg(not(feature = "hydrate"))]
    let _ = (client, store);

    view! {
        <Title text="Bank Portal"/>

        <Router>
            <SiteHeader/>
            <main class="main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <RequireAuth><ProfilePage/></RequireAuth> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
