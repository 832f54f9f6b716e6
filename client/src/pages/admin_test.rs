use super::*;
use crate::net::types::{AccountRow, Post};

fn post(id: &str, approved: bool) -> Post {
    Post {
        id: id.to_owned(),
        author_id: "u1".to_owned(),
        author_name: "Ann".to_owned(),
        body: "x".to_owned(),
        approved,
        created_at: 10,
        updated_at: 11,
    }
}

fn account(id: &str, role: Role) -> AccountRow {
    AccountRow {
        id: id.to_owned(),
        name: "Ann".to_owned(),
        email: "ann@example.com".to_owned(),
        role,
        created_at: 10,
        updated_at: 11,
    }
}

#[test]
fn post_query_reflects_the_active_filters() {
    let mut state = AdminState::default();
    state.post_status = StatusFilter::Pending;
    state.post_search = " spam ".to_owned();
    let ticket = state.posts.begin_load(true).expect("reset load should start");

    let query = admin_post_query(&state, &ticket);
    assert_eq!(query.status, StatusFilter::Pending);
    assert_eq!(query.search, "spam");
    assert_eq!(query.limit, crate::state::INITIAL_PAGE_SIZE);
}

#[test]
fn user_query_reflects_the_active_filters() {
    let mut state = AdminState::default();
    state.user_role = RoleFilter::Admin;
    let ticket = state.users.begin_load(true).expect("reset load should start");

    let query = admin_user_query(&state, &ticket);
    assert_eq!(query.role, RoleFilter::Admin);
    assert!(query.search.is_empty());
}

#[test]
fn filter_values_parse_with_all_fallback() {
    assert_eq!(status_from_value("pending"), StatusFilter::Pending);
    assert_eq!(status_from_value("approved"), StatusFilter::Approved);
    assert_eq!(status_from_value("anything"), StatusFilter::All);
    assert_eq!(role_filter_from_value("moderator"), RoleFilter::Moderator);
    assert_eq!(role_filter_from_value("anything"), RoleFilter::All);
}

#[test]
fn approving_under_pending_filter_removes_the_post() {
    let mut state = AdminState::default();
    state.post_status = StatusFilter::Pending;
    let ticket = state.posts.begin_load(true).expect("reset load should start");
    assert!(state.posts.complete_load(ticket, vec![post("p1", false)]));

    absorb_moderated_post(&mut state, post("p1", true));
    assert!(!state.posts.contains("p1"));
}

#[test]
fn approving_under_all_filter_patches_the_post() {
    let mut state = AdminState::default();
    let ticket = state.posts.begin_load(true).expect("reset load should start");
    assert!(state.posts.complete_load(ticket, vec![post("p1", false)]));

    let mut approved = post("p1", true);
    approved.updated_at = 12;
    absorb_moderated_post(&mut state, approved);
    assert!(state.posts.items()[0].approved);
}

#[test]
fn role_change_outside_the_filter_removes_the_row() {
    let mut state = AdminState::default();
    state.user_role = RoleFilter::Member;
    let ticket = state.users.begin_load(true).expect("reset load should start");
    assert!(state.users.complete_load(ticket, vec![account("u1", Role::Member)]));

    let mut promoted = account("u1", Role::Admin);
    promoted.updated_at = 12;
    absorb_changed_user(&mut state, promoted);
    assert!(state.users.is_empty());
}
