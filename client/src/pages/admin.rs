//! Admin dashboard — moderation queue and user management.
//!
//! ARCHITECTURE
//! ============
//! Two tabs over two independent `LiveList`s. Write actions go over REST and
//! are applied locally from the response with the same scoping rules the
//! realtime dispatcher uses, so the view is correct even before the server's
//! broadcast echo arrives.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use livelist::LoadTicket;

use crate::components::post_card::PostCard;
use crate::components::user_row::UserRow;
use crate::net::types::{PostQuery, Role, RoleFilter, StatusFilter, UserQuery};
use crate::state::admin::{AdminState, AdminTab};
use crate::state::auth::AuthState;
use crate::state::conn::ConnState;
use crate::util::auth::install_admin_redirect;
use crate::util::debounce::Debounce;
use crate::util::resync::install_resync_reload;

fn admin_post_query(state: &AdminState, ticket: &LoadTicket) -> PostQuery {
    PostQuery {
        offset: ticket.offset,
        limit: ticket.limit,
        search: state.post_search.trim().to_owned(),
        status: state.post_status,
        author_id: None,
        sort: state.posts.order(),
    }
}

fn admin_user_query(state: &AdminState, ticket: &LoadTicket) -> UserQuery {
    UserQuery {
        offset: ticket.offset,
        limit: ticket.limit,
        search: state.user_search.trim().to_owned(),
        role: state.user_role,
        sort: state.users.order(),
    }
}

fn status_from_value(value: &str) -> StatusFilter {
    match value {
        "pending" => StatusFilter::Pending,
        "approved" => StatusFilter::Approved,
        _ => StatusFilter::All,
    }
}

fn role_filter_from_value(value: &str) -> RoleFilter {
    match value {
        "member" => RoleFilter::Member,
        "moderator" => RoleFilter::Moderator,
        "admin" => RoleFilter::Admin,
        _ => RoleFilter::All,
    }
}

/// Apply a moderated post back into the list under the active status filter.
#[cfg(any(test, feature = "hydrate"))]
fn absorb_moderated_post(state: &mut AdminState, post: crate::net::types::Post) {
    if state.post_status.matches(post.approved) {
        state.posts.upsert(post);
    } else {
        state.posts.remove(&post.id);
    }
}

/// Apply a role-changed account back into the list under the role filter.
#[cfg(any(test, feature = "hydrate"))]
fn absorb_changed_user(state: &mut AdminState, row: crate::net::types::AccountRow) {
    if state.user_role.matches(row.role) {
        state.users.upsert(row);
    } else {
        state.users.remove(&row.id);
    }
}

fn load_admin_posts(admin: RwSignal<AdminState>, auth: RwSignal<AuthState>, reset: bool) {
    let mut ticket = None;
    admin.update(|a| ticket = a.posts.begin_load(reset));
    let Some(ticket) = ticket else {
        return;
    };
    let query = admin.with_untracked(|a| admin_post_query(a, &ticket));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_posts(&query).await {
            Ok(batch) => admin.update(|a| {
                a.posts.complete_load(ticket, batch);
                a.error = None;
            }),
            Err(e) => {
                if e.is_unauthorized() {
                    auth.update(|s| s.user = None);
                }
                admin.update(|a| {
                    a.posts.fail_load(ticket);
                    a.error = Some(e.to_string());
                });
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, query);
        admin.update(|a| a.posts.fail_load(ticket));
    }
}

fn load_admin_users(admin: RwSignal<AdminState>, auth: RwSignal<AuthState>, reset: bool) {
    let mut ticket = None;
    admin.update(|a| ticket = a.users.begin_load(reset));
    let Some(ticket) = ticket else {
        return;
    };
    let query = admin.with_untracked(|a| admin_user_query(a, &ticket));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_users(&query).await {
            Ok(batch) => admin.update(|a| {
                a.users.complete_load(ticket, batch);
                a.error = None;
            }),
            Err(e) => {
                if e.is_unauthorized() {
                    auth.update(|s| s.user = None);
                }
                admin.update(|a| {
                    a.users.fail_load(ticket);
                    a.error = Some(e.to_string());
                });
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, query);
        admin.update(|a| a.users.fail_load(ticket));
    }
}

/// Admin dashboard page with posts and users tabs.
/// Redirects unauthenticated sessions to `/login` and non-admins to `/`.
#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let conn = expect_context::<RwSignal<ConnState>>();
    let admin = expect_context::<RwSignal<AdminState>>();
    let navigate = use_navigate();

    install_admin_redirect(auth, navigate.clone());
    install_resync_reload(conn, move || {
        load_admin_posts(admin, auth, true);
        load_admin_users(admin, auth, true);
    });

    // Each tab fetches lazily the first time it becomes visible.
    let posts_requested = RwSignal::new(false);
    let users_requested = RwSignal::new(false);
    Effect::new(move || {
        let state = auth.get();
        if state.loading || !state.is_admin() {
            return;
        }
        match admin.with(|a| a.tab) {
            AdminTab::Posts => {
                if !posts_requested.get_untracked() {
                    posts_requested.set(true);
                    load_admin_posts(admin, auth, true);
                }
            }
            AdminTab::Users => {
                if !users_requested.get_untracked() {
                    users_requested.set(true);
                    load_admin_users(admin, auth, true);
                }
            }
        }
    });

    let post_debounce = RwSignal::new(Debounce::default());
    let on_post_search = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        admin.update(|a| a.post_search = value);
        #[cfg(feature = "hydrate")]
        crate::util::debounce::schedule(post_debounce, move || load_admin_posts(admin, auth, true));
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = post_debounce;
        }
    };

    let user_debounce = RwSignal::new(Debounce::default());
    let on_user_search = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        admin.update(|a| a.user_search = value);
        #[cfg(feature = "hydrate")]
        crate::util::debounce::schedule(user_debounce, move || load_admin_users(admin, auth, true));
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user_debounce;
        }
    };

    let on_status_change = move |ev: leptos::ev::Event| {
        let next = status_from_value(&event_target_value(&ev));
        admin.update(|a| a.post_status = next);
        load_admin_posts(admin, auth, true);
    };

    let on_role_filter_change = move |ev: leptos::ev::Event| {
        let next = role_filter_from_value(&event_target_value(&ev));
        admin.update(|a| a.user_role = next);
        load_admin_users(admin, auth, true);
    };

    let on_approve = Callback::new(move |post_id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::approve_post(&post_id).await {
                Ok(post) => admin.update(|a| absorb_moderated_post(a, post)),
                Err(e) => {
                    if e.is_unauthorized() {
                        auth.update(|s| s.user = None);
                    }
                    admin.update(|a| a.error = Some(e.to_string()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = post_id;
        }
    });

    let on_post_delete = Callback::new(move |post_id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_post(&post_id).await {
                Ok(()) => admin.update(|a| a.posts.apply(events::ItemEvent::Deleted(post_id.clone()))),
                Err(e) => {
                    if e.is_unauthorized() {
                        auth.update(|s| s.user = None);
                    }
                    admin.update(|a| a.error = Some(e.to_string()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = post_id;
        }
    });

    let on_role_change = Callback::new(move |(user_id, role): (String, Role)| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::set_user_role(&user_id, role).await {
                Ok(row) => admin.update(|a| absorb_changed_user(a, row)),
                Err(e) => {
                    if e.is_unauthorized() {
                        auth.update(|s| s.user = None);
                    }
                    admin.update(|a| a.error = Some(e.to_string()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_id, role);
        }
    });

    let on_user_delete = Callback::new(move |user_id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_user(&user_id).await {
                Ok(()) => admin.update(|a| a.users.apply(events::ItemEvent::Deleted(user_id.clone()))),
                Err(e) => {
                    if e.is_unauthorized() {
                        auth.update(|s| s.user = None);
                    }
                    admin.update(|a| a.error = Some(e.to_string()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user_id;
        }
    });

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().is_admin()
            fallback=move || view! { <div class="admin-page"><p>"Loading..."</p></div> }
        >
            <div class="admin-page">
                <header class="admin-page__header toolbar">
                    <span class="toolbar__title">"Moderation"</span>
                    <span class="toolbar__spacer"></span>
                    <a class="toolbar__link" href="/">"Back to feed"</a>
                </header>

                <nav class="admin-page__tabs">
                    <button
                        class="btn admin-page__tab"
                        class=("admin-page__tab--active", move || admin.with(|a| a.tab == AdminTab::Posts))
                        on:click=move |_| admin.update(|a| a.tab = AdminTab::Posts)
                    >
                        "Posts"
                    </button>
                    <button
                        class="btn admin-page__tab"
                        class=("admin-page__tab--active", move || admin.with(|a| a.tab == AdminTab::Users))
                        on:click=move |_| admin.update(|a| a.tab = AdminTab::Users)
                    >
                        "Users"
                    </button>
                </nav>

                <Show when=move || admin.with(|a| a.error.is_some())>
                    <p class="admin-page__error">
                        {move || admin.with(|a| a.error.clone()).unwrap_or_default()}
                    </p>
                </Show>

                <Show when=move || admin.with(|a| a.tab == AdminTab::Posts)>
                    <div class="admin-page__filters">
                        <input
                            class="admin-page__search"
                            type="search"
                            placeholder="Search posts"
                            prop:value=move || admin.with(|a| a.post_search.clone())
                            on:input=on_post_search
                        />
                        <select class="admin-page__status" on:change=on_status_change>
                            <option value="all">"All"</option>
                            <option value="pending">"Pending"</option>
                            <option value="approved">"Approved"</option>
                        </select>
                    </div>
                    <div class="admin-page__posts">
                        {move || {
                            let posts = admin.with(|a| a.posts.items().to_vec());
                            posts
                                .into_iter()
                                .map(|post| {
                                    view! {
                                        <PostCard post=post on_approve=on_approve on_delete=on_post_delete/>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                    <Show when=move || admin.with(|a| a.posts.has_more())>
                        <button
                            class="btn admin-page__more"
                            disabled=move || admin.with(|a| a.posts.is_loading())
                            on:click=move |_| load_admin_posts(admin, auth, false)
                        >
                            {move || if admin.with(|a| a.posts.is_loading()) { "Loading..." } else { "Load more" }}
                        </button>
                    </Show>
                </Show>

                <Show when=move || admin.with(|a| a.tab == AdminTab::Users)>
                    <div class="admin-page__filters">
                        <input
                            class="admin-page__search"
                            type="search"
                            placeholder="Search users"
                            prop:value=move || admin.with(|a| a.user_search.clone())
                            on:input=on_user_search
                        />
                        <select class="admin-page__role" on:change=on_role_filter_change>
                            <option value="all">"All roles"</option>
                            <option value="member">"Members"</option>
                            <option value="moderator">"Moderators"</option>
                            <option value="admin">"Admins"</option>
                        </select>
                    </div>
                    <div class="admin-page__users">
                        {move || {
                            let users = admin.with(|a| a.users.items().to_vec());
                            users
                                .into_iter()
                                .map(|account| {
                                    view! {
                                        <UserRow
                                            account=account
                                            on_role_change=on_role_change
                                            on_delete=on_user_delete
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                    <Show when=move || admin.with(|a| a.users.has_more())>
                        <button
                            class="btn admin-page__more"
                            disabled=move || admin.with(|a| a.users.is_loading())
                            on:click=move |_| load_admin_users(admin, auth, false)
                        >
                            {move || if admin.with(|a| a.users.is_loading()) { "Loading..." } else { "Load more" }}
                        </button>
                    </Show>
                </Show>
            </div>
        </Show>
    }
}
