//! Feed page — the public timeline with search, sort, compose, and
//! incremental loading.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Paginated fetches and realtime
//! post events both feed the same `LiveList`, so the page only decides when
//! to load; the merge rules live in `livelist`.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use livelist::{LoadTicket, SortOrder};

use crate::components::post_card::PostCard;
use crate::net::types::{PostQuery, StatusFilter};
use crate::state::auth::AuthState;
use crate::state::conn::{ConnState, ConnectionStatus};
use crate::state::feed::FeedState;
use crate::util::auth::install_unauth_redirect;
use crate::util::debounce::Debounce;
use crate::util::resync::install_resync_reload;
use crate::util::validation::validate_post_input;

/// Build the query for one feed fetch from current filter state. The feed
/// only ever shows approved posts.
fn feed_query(state: &FeedState, ticket: &LoadTicket) -> PostQuery {
    PostQuery {
        offset: ticket.offset,
        limit: ticket.limit,
        search: state.search.trim().to_owned(),
        status: StatusFilter::Approved,
        author_id: None,
        sort: state.sort,
    }
}

fn sort_from_value(value: &str) -> SortOrder {
    match value {
        "oldest" => SortOrder::OldestFirst,
        _ => SortOrder::NewestFirst,
    }
}

fn connection_label(status: ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Disconnected => "offline",
        ConnectionStatus::Connecting => "connecting",
        ConnectionStatus::Connected => "live",
    }
}

/// Issue one feed load. Appends are suppressed while a fetch is in flight;
/// a reset supersedes whatever is outstanding.
fn load_posts(feed: RwSignal<FeedState>, auth: RwSignal<AuthState>, reset: bool) {
    let mut ticket = None;
    feed.update(|f| ticket = f.posts.begin_load(reset));
    let Some(ticket) = ticket else {
        return;
    };
    let query = feed.with_untracked(|f| feed_query(f, &ticket));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_posts(&query).await {
            Ok(batch) => feed.update(|f| {
                f.posts.complete_load(ticket, batch);
                f.error = None;
            }),
            Err(e) => {
                if e.is_unauthorized() {
                    auth.update(|a| a.user = None);
                }
                feed.update(|f| {
                    f.posts.fail_load(ticket);
                    f.error = Some(e.to_string());
                });
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, query);
        feed.update(|f| f.posts.fail_load(ticket));
    }
}

/// Feed page — timeline, compose box, debounced search, and load-more.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn FeedPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let conn = expect_context::<RwSignal<ConnState>>();
    let feed = expect_context::<RwSignal<FeedState>>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate.clone());
    install_resync_reload(conn, move || load_posts(feed, auth, true));

    // First fetch once the session has resolved.
    let requested_initial = RwSignal::new(false);
    Effect::new(move || {
        if requested_initial.get() {
            return;
        }
        let state = auth.get();
        if state.loading || state.user.is_none() {
            return;
        }
        requested_initial.set(true);
        load_posts(feed, auth, true);
    });

    let search_debounce = RwSignal::new(Debounce::default());
    let on_search_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        feed.update(|f| f.search = value);
        #[cfg(feature = "hydrate")]
        crate::util::debounce::schedule(search_debounce, move || load_posts(feed, auth, true));
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = search_debounce;
        }
    };

    let on_sort_change = move |ev: leptos::ev::Event| {
        let next = sort_from_value(&event_target_value(&ev));
        feed.update(|f| {
            f.sort = next;
            f.posts.set_order(next);
        });
        load_posts(feed, auth, true);
    };

    let compose = RwSignal::new(String::new());
    let compose_error = RwSignal::new(None::<String>);
    let on_compose_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if feed.with_untracked(|f| f.compose_pending) {
            return;
        }
        let body = match validate_post_input(&compose.get_untracked()) {
            Ok(body) => body,
            Err(msg) => {
                compose_error.set(Some(msg.to_owned()));
                return;
            }
        };
        compose_error.set(None);
        feed.update(|f| f.compose_pending = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_post(&body).await {
                Ok(post) => {
                    compose.set(String::new());
                    feed.update(|f| {
                        f.compose_pending = false;
                        // The realtime echo may already have inserted it;
                        // upsert keeps exactly one copy. A post awaiting
                        // moderation stays out of the feed until approved.
                        if post.approved {
                            f.posts.upsert(post);
                        }
                    });
                }
                Err(e) => {
                    if e.is_unauthorized() {
                        auth.update(|a| a.user = None);
                    }
                    feed.update(|f| f.compose_pending = false);
                    compose_error.set(Some(e.to_string()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = body;
            feed.update(|f| f.compose_pending = false);
        }
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                auth.update(|a| a.user = None);
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href("/login");
                }
            });
        }
    };

    let on_retry = move |_| {
        let reset = feed.with_untracked(|f| f.posts.is_empty());
        load_posts(feed, auth, reset);
    };

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="feed-page">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="feed-page">
                <header class="feed-page__header toolbar">
                    <span class="toolbar__title">"Solace"</span>
                    <span class="toolbar__conn">
                        {move || connection_label(conn.get().status)}
                    </span>
                    <span class="toolbar__spacer"></span>
                    <a class="toolbar__link" href="/messages">"Messages"</a>
                    <Show when=move || auth.get().is_admin()>
                        <a class="toolbar__link" href="/admin">"Admin"</a>
                    </Show>
                    <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </header>

                <form class="feed-page__compose" on:submit=on_compose_submit>
                    <textarea
                        class="feed-page__compose-input"
                        placeholder="What's on your mind?"
                        prop:value=move || compose.get()
                        on:input=move |ev| compose.set(event_target_value(&ev))
                    ></textarea>
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || feed.with(|f| f.compose_pending)
                    >
                        {move || if feed.with(|f| f.compose_pending) { "Posting..." } else { "Post" }}
                    </button>
                    <Show when=move || compose_error.get().is_some()>
                        <p class="feed-page__compose-error">
                            {move || compose_error.get().unwrap_or_default()}
                        </p>
                    </Show>
                </form>

                <div class="feed-page__filters">
                    <input
                        class="feed-page__search"
                        type="search"
                        placeholder="Search posts"
                        prop:value=move || feed.with(|f| f.search.clone())
                        on:input=on_search_input
                    />
                    <select class="feed-page__sort" on:change=on_sort_change>
                        <option value="newest">"Newest first"</option>
                        <option value="oldest">"Oldest first"</option>
                    </select>
                </div>

                <Show when=move || feed.with(|f| f.error.is_some())>
                    <p class="feed-page__error">
                        {move || feed.with(|f| f.error.clone()).unwrap_or_default()}
                        <button class="btn" on:click=on_retry>"Retry"</button>
                    </p>
                </Show>

                <div class="feed-page__posts">
                    {move || {
                        let posts = feed.with(|f| f.posts.items().to_vec());
                        posts
                            .into_iter()
                            .map(|post| view! { <PostCard post=post/> })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <Show when=move || feed.with(|f| f.posts.has_more())>
                    <button
                        class="btn feed-page__more"
                        disabled=move || feed.with(|f| f.posts.is_loading())
                        on:click=move |_| load_posts(feed, auth, false)
                    >
                        {move || if feed.with(|f| f.posts.is_loading()) { "Loading..." } else { "Load more" }}
                    </button>
                </Show>
            </div>
        </Show>
    }
}
