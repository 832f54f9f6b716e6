use super::*;
use crate::net::types::StatusFilter;

fn post(id: &str, approved: bool, ts: i64) -> Post {
    Post {
        id: id.to_owned(),
        author_id: "u1".to_owned(),
        author_name: "Ann".to_owned(),
        body: "hello".to_owned(),
        approved,
        created_at: ts,
        updated_at: ts,
    }
}

fn bumped(mut p: Post) -> Post {
    p.updated_at += 1;
    p
}

// =============================================================
// Feed scoping
// =============================================================

#[test]
fn feed_ignores_created_pending_posts() {
    let mut feed = FeedState::default();
    apply_feed_event(&mut feed, &ItemEvent::Created(post("p1", false, 10)));
    assert!(feed.posts.is_empty());
}

#[test]
fn feed_inserts_created_approved_posts() {
    let mut feed = FeedState::default();
    apply_feed_event(&mut feed, &ItemEvent::Created(post("p1", true, 10)));
    assert!(feed.posts.contains("p1"));
}

#[test]
fn feed_surfaces_posts_on_approval() {
    let mut feed = FeedState::default();
    apply_feed_event(&mut feed, &ItemEvent::Approved(post("p1", true, 10)));
    assert!(feed.posts.contains("p1"));
}

#[test]
fn feed_drops_posts_updated_back_to_pending() {
    let mut feed = FeedState::default();
    apply_feed_event(&mut feed, &ItemEvent::Created(post("p1", true, 10)));
    apply_feed_event(&mut feed, &ItemEvent::Updated(bumped(post("p1", false, 10))));
    assert!(!feed.posts.contains("p1"));
}

#[test]
fn feed_removes_deleted_posts() {
    let mut feed = FeedState::default();
    apply_feed_event(&mut feed, &ItemEvent::Created(post("p1", true, 10)));
    apply_feed_event(&mut feed, &ItemEvent::Deleted("p1".to_owned()));
    assert!(feed.posts.is_empty());
}

// =============================================================
// Admin scoping
// =============================================================

#[test]
fn pending_filter_drops_approved_posts_from_the_queue() {
    let mut admin = AdminState::default();
    admin.post_status = StatusFilter::Pending;
    apply_admin_post_event(&mut admin, &ItemEvent::Created(post("p1", false, 10)));
    assert!(admin.posts.contains("p1"));

    apply_admin_post_event(&mut admin, &ItemEvent::Approved(bumped(post("p1", true, 10))));
    assert!(!admin.posts.contains("p1"));
}

#[test]
fn removal_by_filter_leaves_no_tombstone() {
    let mut admin = AdminState::default();
    admin.post_status = StatusFilter::Pending;
    apply_admin_post_event(&mut admin, &ItemEvent::Approved(post("p1", true, 10)));
    assert!(!admin.posts.contains("p1"));

    // The filter widens: the same id may come back through an update.
    admin.post_status = StatusFilter::All;
    apply_admin_post_event(&mut admin, &ItemEvent::Updated(bumped(post("p1", true, 10))));
    assert!(admin.posts.contains("p1"));
}

#[test]
fn all_filter_accepts_both_approval_states() {
    let mut admin = AdminState::default();
    apply_admin_post_event(&mut admin, &ItemEvent::Created(post("p1", false, 10)));
    apply_admin_post_event(&mut admin, &ItemEvent::Created(post("p2", true, 20)));
    assert_eq!(admin.posts.len(), 2);
}

#[test]
fn admin_delete_applies_regardless_of_filter() {
    let mut admin = AdminState::default();
    admin.post_status = StatusFilter::Approved;
    apply_admin_post_event(&mut admin, &ItemEvent::Created(post("p1", true, 10)));
    apply_admin_post_event(&mut admin, &ItemEvent::Deleted("p1".to_owned()));
    assert!(admin.posts.is_empty());
}

// =============================================================
// Profile scoping
// =============================================================

#[test]
fn profile_applies_events_only_for_the_shown_author() {
    let mut profile = ProfileState::default();
    profile.switch_to("u1");
    apply_profile_post_event(&mut profile, &ItemEvent::Created(post("p1", true, 10)));
    assert!(profile.posts.contains("p1"));

    let mut foreign = post("p2", true, 20);
    foreign.author_id = "u9".to_owned();
    apply_profile_post_event(&mut profile, &ItemEvent::Created(foreign));
    assert!(!profile.posts.contains("p2"));
}

#[test]
fn profile_without_identity_ignores_creations() {
    let mut profile = ProfileState::default();
    apply_profile_post_event(&mut profile, &ItemEvent::Created(post("p1", true, 10)));
    assert!(profile.posts.is_empty());
}

#[test]
fn profile_deletion_applies_by_id_alone() {
    let mut profile = ProfileState::default();
    profile.switch_to("u1");
    apply_profile_post_event(&mut profile, &ItemEvent::Created(post("p1", true, 10)));
    apply_profile_post_event(&mut profile, &ItemEvent::Deleted("p1".to_owned()));
    assert!(profile.posts.is_empty());
}
