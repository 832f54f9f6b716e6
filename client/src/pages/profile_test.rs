use super::*;

#[test]
fn profile_query_scopes_to_the_shown_author() {
    let mut state = ProfileState::default();
    state.switch_to("u7");
    let ticket = state.posts.begin_load(true).expect("reset load should start");

    let query = profile_posts_query(&state, &ticket);
    assert_eq!(query.author_id.as_deref(), Some("u7"));
    assert_eq!(query.status, StatusFilter::Approved);
    assert!(query.search.is_empty());
}

#[test]
fn switching_identity_starts_pagination_over() {
    let mut state = ProfileState::default();
    state.switch_to("u1");
    let ticket = state.posts.begin_load(true).expect("reset load should start");
    let batch = (0..ticket.limit)
        .map(|i| crate::net::types::Post {
            id: format!("p{i}"),
            author_id: "u1".to_owned(),
            author_name: "Ann".to_owned(),
            body: "x".to_owned(),
            approved: true,
            created_at: i64::try_from(i).unwrap_or(0),
            updated_at: i64::try_from(i).unwrap_or(0),
        })
        .collect();
    assert!(state.posts.complete_load(ticket, batch));
    assert_eq!(state.posts.len(), crate::state::INITIAL_PAGE_SIZE);

    state.switch_to("u2");
    assert!(state.posts.is_empty());
    let ticket = state.posts.begin_load(true).expect("reset load should start");
    assert_eq!(ticket.offset, 0);
}
