use super::*;

#[test]
fn post_deserializes_with_float_timestamps() {
    let post: Post = serde_json::from_value(serde_json::json!({
        "id": "p1",
        "author_id": "u1",
        "author_name": "Ann",
        "body": "hello",
        "approved": true,
        "created_at": 1000.0,
        "updated_at": 2000
    }))
    .expect("post should deserialize");
    assert_eq!(post.created_at, 1000);
    assert_eq!(post.updated_at, 2000);
}

#[test]
fn post_list_item_uses_created_for_order_and_updated_for_revision() {
    use livelist::ListItem;
    let post: Post = serde_json::from_value(serde_json::json!({
        "id": "p1",
        "author_id": "u1",
        "author_name": "Ann",
        "body": "hello",
        "created_at": 10,
        "updated_at": 20
    }))
    .expect("post should deserialize");
    assert_eq!(post.sort_ts(), 10);
    assert_eq!(post.revision(), 20);
    assert!(!post.approved);
}

#[test]
fn message_defaults_pending_to_false_on_the_wire() {
    let msg: Message = serde_json::from_value(serde_json::json!({
        "id": "m1",
        "conversation_id": "c1",
        "sender_id": "u1",
        "sender_name": "Ann",
        "body": "hi",
        "created_at": 5
    }))
    .expect("message should deserialize");
    assert!(!msg.pending);
}

#[test]
fn role_round_trips_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).expect("serialize"), "\"admin\"");
    let role: Role = serde_json::from_str("\"moderator\"").expect("deserialize");
    assert_eq!(role, Role::Moderator);
}

#[test]
fn user_is_admin_for_admin_and_moderator_roles() {
    let mut user: User = serde_json::from_value(serde_json::json!({
        "id": "u1",
        "name": "Ann",
        "email": "ann@example.com",
        "role": "member"
    }))
    .expect("user should deserialize");
    assert!(!user.is_admin());
    user.role = Role::Moderator;
    assert!(user.is_admin());
    user.role = Role::Admin;
    assert!(user.is_admin());
}

#[test]
fn status_filter_matches_approval_state() {
    assert!(StatusFilter::All.matches(true));
    assert!(StatusFilter::All.matches(false));
    assert!(StatusFilter::Pending.matches(false));
    assert!(!StatusFilter::Pending.matches(true));
    assert!(StatusFilter::Approved.matches(true));
    assert!(!StatusFilter::Approved.matches(false));
}

#[test]
fn role_filter_matches_roles() {
    assert!(RoleFilter::All.matches(Role::Member));
    assert!(RoleFilter::Admin.matches(Role::Admin));
    assert!(!RoleFilter::Admin.matches(Role::Member));
}

#[test]
fn post_query_omits_unfiltered_dimensions() {
    let query = PostQuery {
        offset: 0,
        limit: 10,
        ..PostQuery::default()
    };
    assert_eq!(query.query_string(), "offset=0&limit=10&sort=newest");
}

#[test]
fn post_query_includes_all_active_dimensions() {
    let query = PostQuery {
        offset: 10,
        limit: 3,
        search: "rust lang".to_owned(),
        status: StatusFilter::Pending,
        author_id: Some("u1".to_owned()),
        sort: livelist::SortOrder::OldestFirst,
    };
    assert_eq!(
        query.query_string(),
        "offset=10&limit=3&sort=oldest&status=pending&author_id=u1&search=rust%20lang"
    );
}

#[test]
fn user_query_includes_role_and_search() {
    let query = UserQuery {
        offset: 0,
        limit: 10,
        search: "ann".to_owned(),
        role: RoleFilter::Moderator,
        sort: livelist::SortOrder::NewestFirst,
    };
    assert_eq!(
        query.query_string(),
        "offset=0&limit=10&sort=newest&role=moderator&search=ann"
    );
}

#[test]
fn encode_component_passes_unreserved_and_encodes_the_rest() {
    assert_eq!(encode_component("abc-XYZ_0.9~"), "abc-XYZ_0.9~");
    assert_eq!(encode_component("a b&c"), "a%20b%26c");
    assert_eq!(encode_component("héllo"), "h%C3%A9llo");
}
