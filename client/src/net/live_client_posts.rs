//! Post event handlers extracted from `live_client`.
//!
//! One post event fans out to three views with different scopes: the feed
//! (approved posts only), the admin moderation list (scoped by its status
//! filter), and the profile page (scoped by author). Each apply function is
//! plain state manipulation so the scoping rules stay testable on the host.

#[cfg(test)]
#[path = "live_client_posts_test.rs"]
mod live_client_posts_test;

#[cfg(any(test, feature = "hydrate"))]
use events::ItemEvent;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::Post;
#[cfg(any(test, feature = "hydrate"))]
use crate::state::admin::AdminState;
#[cfg(any(test, feature = "hydrate"))]
use crate::state::feed::FeedState;
#[cfg(any(test, feature = "hydrate"))]
use crate::state::profile::ProfileState;

/// Reconcile a post event against the feed, which shows approved posts only.
/// Approval is the moment a post becomes visible here, so it is an upsert
/// rather than a patch-if-present.
#[cfg(any(test, feature = "hydrate"))]
pub(super) fn apply_feed_event(feed: &mut FeedState, event: &ItemEvent<Post>) {
    match event {
        ItemEvent::Created(post) => {
            if post.approved {
                feed.posts.apply(ItemEvent::Created(post.clone()));
            }
        }
        ItemEvent::Approved(post) => feed.posts.upsert(post.clone()),
        ItemEvent::Updated(post) => {
            if post.approved {
                feed.posts.apply(ItemEvent::Updated(post.clone()));
            } else {
                feed.posts.remove(&post.id);
            }
        }
        ItemEvent::Deleted(id) => feed.posts.apply(ItemEvent::Deleted(id.clone())),
    }
}

/// Reconcile a post event against the admin list under its status filter.
/// An item that stops matching the filter leaves the view without a
/// tombstone, since a filter change may legitimately bring it back.
#[cfg(any(test, feature = "hydrate"))]
pub(super) fn apply_admin_post_event(admin: &mut AdminState, event: &ItemEvent<Post>) {
    match event {
        ItemEvent::Created(post) => {
            if admin.post_status.matches(post.approved) {
                admin.posts.apply(ItemEvent::Created(post.clone()));
            }
        }
        ItemEvent::Approved(post) | ItemEvent::Updated(post) => {
            if admin.post_status.matches(post.approved) {
                admin.posts.upsert(post.clone());
            } else {
                admin.posts.remove(&post.id);
            }
        }
        ItemEvent::Deleted(id) => admin.posts.apply(ItemEvent::Deleted(id.clone())),
    }
}

/// Reconcile a post event against the profile page when the author matches
/// the identity on screen. Deletions carry only an id, so they apply
/// unconditionally; removing an id that was never shown is harmless.
#[cfg(any(test, feature = "hydrate"))]
pub(super) fn apply_profile_post_event(profile: &mut ProfileState, event: &ItemEvent<Post>) {
    match event {
        ItemEvent::Created(post) => {
            if author_on_screen(profile, post) && post.approved {
                profile.posts.apply(ItemEvent::Created(post.clone()));
            }
        }
        ItemEvent::Approved(post) => {
            if author_on_screen(profile, post) {
                profile.posts.upsert(post.clone());
            }
        }
        ItemEvent::Updated(post) => {
            if author_on_screen(profile, post) {
                if post.approved {
                    profile.posts.apply(ItemEvent::Updated(post.clone()));
                } else {
                    profile.posts.remove(&post.id);
                }
            }
        }
        ItemEvent::Deleted(id) => profile.posts.apply(ItemEvent::Deleted(id.clone())),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn author_on_screen(profile: &ProfileState, post: &Post) -> bool {
    profile.user_id.as_deref() == Some(post.author_id.as_str())
}

/// Fan a post envelope out to every view that shows posts.
#[cfg(feature = "hydrate")]
pub(super) fn handle_post_event(
    envelope: &events::Envelope,
    feed: leptos::prelude::RwSignal<FeedState>,
    admin: leptos::prelude::RwSignal<AdminState>,
    profile: leptos::prelude::RwSignal<ProfileState>,
) -> bool {
    use leptos::prelude::Update;

    let Some(event) = events::parse_item_event::<Post>(envelope, "post") else {
        return false;
    };
    feed.update(|f| apply_feed_event(f, &event));
    admin.update(|a| apply_admin_post_event(a, &event));
    profile.update(|p| apply_profile_post_event(p, &event));
    true
}
