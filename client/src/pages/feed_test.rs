use super::*;

#[test]
fn feed_query_pins_status_to_approved() {
    let mut state = FeedState::default();
    state.search = "  rust  ".to_owned();
    let ticket = state.posts.begin_load(true).expect("reset load should start");

    let query = feed_query(&state, &ticket);
    assert_eq!(query.status, StatusFilter::Approved);
    assert_eq!(query.search, "rust");
    assert_eq!(query.offset, 0);
    assert_eq!(query.limit, crate::state::INITIAL_PAGE_SIZE);
    assert!(query.author_id.is_none());
}

#[test]
fn feed_query_carries_the_tickets_window() {
    let mut state = FeedState::default();
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

    let ticket = state.posts.begin_load(false).expect("append load should start");
    let query = feed_query(&state, &ticket);
    assert_eq!(query.offset, crate::state::INITIAL_PAGE_SIZE);
    assert_eq!(query.limit, crate::state::FOLLOW_PAGE_SIZE);
}

#[test]
fn sort_values_parse_with_newest_fallback() {
    assert_eq!(sort_from_value("oldest"), SortOrder::OldestFirst);
    assert_eq!(sort_from_value("newest"), SortOrder::NewestFirst);
    assert_eq!(sort_from_value("garbage"), SortOrder::NewestFirst);
}

#[test]
fn connection_labels_cover_every_status() {
    assert_eq!(connection_label(ConnectionStatus::Disconnected), "offline");
    assert_eq!(connection_label(ConnectionStatus::Connecting), "connecting");
    assert_eq!(connection_label(ConnectionStatus::Connected), "live");
}
