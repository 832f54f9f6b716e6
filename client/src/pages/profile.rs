//! Profile page — public header plus the author's paginated posts.
//!
//! ARCHITECTURE
//! ============
//! The route parameter is the source of truth for which profile is shown;
//! navigating between profiles swaps the whole state and starts a fresh
//! collection rather than mutating the old one.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use livelist::LoadTicket;

use crate::components::post_card::PostCard;
use crate::net::types::{PostQuery, StatusFilter};
use crate::state::auth::AuthState;
use crate::state::conn::ConnState;
use crate::state::profile::ProfileState;
use crate::util::auth::install_unauth_redirect;
use crate::util::resync::install_resync_reload;

/// Build the query for one page of the shown author's approved posts.
fn profile_posts_query(state: &ProfileState, ticket: &LoadTicket) -> PostQuery {
    PostQuery {
        offset: ticket.offset,
        limit: ticket.limit,
        search: String::new(),
        status: StatusFilter::Approved,
        author_id: state.user_id.clone(),
        sort: state.posts.order(),
    }
}

fn load_profile_posts(profile: RwSignal<ProfileState>, auth: RwSignal<AuthState>, reset: bool) {
    if profile.with_untracked(|p| p.user_id.is_none()) {
        return;
    }
    let mut ticket = None;
    profile.update(|p| ticket = p.posts.begin_load(reset));
    let Some(ticket) = ticket else {
        return;
    };
    let query = profile.with_untracked(|p| profile_posts_query(p, &ticket));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_posts(&query).await {
            Ok(batch) => profile.update(|p| {
                p.posts.complete_load(ticket, batch);
                p.error = None;
            }),
            Err(e) => {
                if e.is_unauthorized() {
                    auth.update(|a| a.user = None);
                }
                profile.update(|p| {
                    p.posts.fail_load(ticket);
                    p.error = Some(e.to_string());
                });
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, query);
        profile.update(|p| p.posts.fail_load(ticket));
    }
}

fn load_profile_header(profile: RwSignal<ProfileState>, user_id: String) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let fetched = crate::net::api::fetch_user_profile(&user_id).await;
        profile.update(|p| {
            // A fast navigation may have swapped identities underneath us.
            if p.user_id.as_deref() == Some(user_id.as_str()) {
                p.loading = false;
                match fetched {
                    Some(header) => p.profile = Some(header),
                    None => p.error = Some("Profile could not be loaded.".to_owned()),
                }
            }
        });
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (profile, user_id);
    }
}

/// Profile page for `/profile/:id`.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let conn = expect_context::<RwSignal<ConnState>>();
    let profile = expect_context::<RwSignal<ProfileState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate.clone());
    install_resync_reload(conn, move || load_profile_posts(profile, auth, true));

    // Follow the route parameter; each identity change restarts the page.
    Effect::new(move || {
        let Some(user_id) = params.read().get("id") else {
            return;
        };
        let state = auth.get();
        if state.loading || state.user.is_none() {
            return;
        }
        let switched = profile.with_untracked(|p| p.user_id.as_deref() != Some(user_id.as_str()));
        if !switched {
            return;
        }
        profile.update(|p| p.switch_to(&user_id));
        load_profile_header(profile, user_id.clone());
        load_profile_posts(profile, auth, true);
    });

    view! {
        <div class="profile-page">
            <header class="profile-page__header toolbar">
                <a class="toolbar__link" href="/">"Back to feed"</a>
            </header>

            <Show when=move || profile.with(|p| p.error.is_some())>
                <p class="profile-page__error">
                    {move || profile.with(|p| p.error.clone()).unwrap_or_default()}
                </p>
            </Show>

            <Show
                when=move || profile.with(|p| p.profile.is_some())
                fallback=move || view! { <p>"Loading profile..."</p> }
            >
                {move || {
                    profile
                        .with(|p| p.profile.clone())
                        .map(|header| {
                            view! {
                                <section class="profile-page__card">
                                    <h1 class="profile-page__name">{header.name.clone()}</h1>
                                    {header
                                        .bio
                                        .clone()
                                        .map(|bio| view! { <p class="profile-page__bio">{bio}</p> })}
                                    <dl class="profile-page__stats">
                                        <dt>"Posts"</dt>
                                        <dd>{header.stats.post_count}</dd>
                                        <dt>"Followers"</dt>
                                        <dd>{header.stats.follower_count}</dd>
                                        <dt>"Following"</dt>
                                        <dd>{header.stats.following_count}</dd>
                                    </dl>
                                    {header
                                        .member_since
                                        .clone()
                                        .map(|since| {
                                            view! {
                                                <p class="profile-page__since">"Member since " {since}</p>
                                            }
                                        })}
                                </section>
                            }
                        })
                }}
            </Show>

            <div class="profile-page__posts">
                {move || {
                    let posts = profile.with(|p| p.posts.items().to_vec());
                    posts
                        .into_iter()
                        .map(|post| view! { <PostCard post=post/> })
                        .collect::<Vec<_>>()
                }}
            </div>

            <Show when=move || profile.with(|p| p.posts.has_more())>
                <button
                    class="btn profile-page__more"
                    disabled=move || profile.with(|p| p.posts.is_loading())
                    on:click=move |_| load_profile_posts(profile, auth, false)
                >
                    {move || if profile.with(|p| p.posts.is_loading()) { "Loading..." } else { "Load more" }}
                </button>
            </Show>
        </div>
    }
}
