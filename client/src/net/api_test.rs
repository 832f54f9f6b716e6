use super::*;
use livelist::SortOrder;

#[test]
fn posts_endpoint_carries_query_string() {
    let query = PostQuery {
        offset: 10,
        limit: 3,
        search: String::new(),
        status: crate::net::types::StatusFilter::Approved,
        author_id: None,
        sort: SortOrder::NewestFirst,
    };
    assert_eq!(posts_endpoint(&query), "/api/posts?offset=10&limit=3&sort=newest&status=approved");
}

#[test]
fn post_endpoints_format_expected_paths() {
    assert_eq!(post_endpoint("p1"), "/api/posts/p1");
    assert_eq!(post_approve_endpoint("p1"), "/api/posts/p1/approve");
}

#[test]
fn user_endpoints_format_expected_paths() {
    assert_eq!(user_endpoint("u1"), "/api/users/u1");
    assert_eq!(user_profile_endpoint("u123"), "/api/users/u123/profile");
    assert_eq!(user_role_endpoint("u1"), "/api/users/u1/role");
}

#[test]
fn users_endpoint_carries_query_string() {
    let query = UserQuery {
        offset: 0,
        limit: 10,
        search: String::new(),
        role: crate::net::types::RoleFilter::All,
        sort: SortOrder::NewestFirst,
    };
    assert_eq!(users_endpoint(&query), "/api/users?offset=0&limit=10&sort=newest");
}

#[test]
fn conversation_messages_endpoint_formats_offset_and_limit() {
    assert_eq!(
        conversation_messages_endpoint("c1", 10, 3),
        "/api/conversations/c1/messages?offset=10&limit=3"
    );
}

#[test]
fn list_payload_accepts_bare_array() {
    let payload: ListPayload<i32> = serde_json::from_str("[1,2,3]").expect("payload should parse");
    assert_eq!(payload.into_items(), vec![1, 2, 3]);
}

#[test]
fn list_payload_accepts_wrapped_items() {
    let payload: ListPayload<i32> =
        serde_json::from_str(r#"{"items":[4,5],"total":17}"#).expect("payload should parse");
    assert_eq!(payload.into_items(), vec![4, 5]);
}
