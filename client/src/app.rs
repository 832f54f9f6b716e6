//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    admin::AdminPage, feed::FeedPage, login::LoginPage, messages::MessagesPage, profile::ProfilePage,
};
use crate::state::admin::AdminState;
use crate::state::auth::AuthState;
use crate::state::conn::ConnState;
use crate::state::feed::FeedState;
use crate::state::messages::MessagesState;
use crate::state::profile::ProfileState;

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

/// Root application component.
///
/// Provides all shared state contexts, resolves the session, starts the
/// websocket live client, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components. Each page
    // owns its list state exclusively; the live client writes into the same
    // signals from the push side.
    let auth = RwSignal::new(AuthState::default());
    let conn = RwSignal::new(ConnState::default());
    let feed = RwSignal::new(FeedState::default());
    let admin = RwSignal::new(AdminState::default());
    let profile = RwSignal::new(ProfileState::default());
    let messages = RwSignal::new(MessagesState::default());

    provide_context(auth);
    provide_context(conn);
    provide_context(feed);
    provide_context(admin);
    provide_context(profile);
    provide_context(messages);

    // Resolve the session, then keep the live channel running for the app's
    // lifetime.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            auth.update(|a| {
                a.user = user;
                a.loading = false;
            });
        });
        crate::net::live_client::spawn_live_client(conn, feed, admin, profile, messages);
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/solace.css"/>
        <Title text="Solace"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=FeedPage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
                <Route path=(StaticSegment("profile"), ParamSegment("id")) view=ProfilePage/>
                <Route path=StaticSegment("messages") view=MessagesPage/>
            </Routes>
        </Router>
    }
}
