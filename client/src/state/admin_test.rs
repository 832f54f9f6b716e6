use super::*;

#[test]
fn admin_state_defaults_to_posts_tab_with_open_filters() {
    let state = AdminState::default();
    assert_eq!(state.tab, AdminTab::Posts);
    assert_eq!(state.post_status, StatusFilter::All);
    assert_eq!(state.user_role, RoleFilter::All);
    assert!(state.posts.is_empty());
    assert!(state.users.is_empty());
}

#[test]
fn tab_lists_paginate_independently() {
    let mut state = AdminState::default();
    let posts_ticket = state.posts.begin_load(true).expect("posts load should start");
    assert!(state.posts.is_loading());
    assert!(!state.users.is_loading());
    assert!(state.users.begin_load(true).is_some());
    let _ = posts_ticket;
}
