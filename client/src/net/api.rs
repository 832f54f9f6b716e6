//! REST API helpers for communicating with the Solace backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/errors since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! List and write calls return `Result<_, ApiError>` so pages can
//! distinguish transport failures from expired sessions; auth/profile
//! lookups return `Option` so a missing session degrades rendering without
//! crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{AccountRow, Conversation, Message, Post, PostQuery, Role, User, UserProfile, UserQuery};
#[cfg(any(test, feature = "hydrate"))]
use serde::Deserialize;

#[cfg(any(test, feature = "hydrate"))]
fn posts_endpoint(query: &PostQuery) -> String {
    format!("/api/posts?{}", query.query_string())
}

#[cfg(any(test, feature = "hydrate"))]
fn post_endpoint(post_id: &str) -> String {
    format!("/api/posts/{post_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn post_approve_endpoint(post_id: &str) -> String {
    format!("/api/posts/{post_id}/approve")
}

#[cfg(any(test, feature = "hydrate"))]
fn users_endpoint(query: &UserQuery) -> String {
    format!("/api/users?{}", query.query_string())
}

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(user_id: &str) -> String {
    format!("/api/users/{user_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_profile_endpoint(user_id: &str) -> String {
    format!("/api/users/{user_id}/profile")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_role_endpoint(user_id: &str) -> String {
    format!("/api/users/{user_id}/role")
}

#[cfg(any(test, feature = "hydrate"))]
fn conversation_messages_endpoint(conversation_id: &str, offset: usize, limit: usize) -> String {
    format!("/api/conversations/{conversation_id}/messages?offset={offset}&limit={limit}")
}

/// List endpoints answer either a bare array or a `{items, total}` wrapper;
/// both shapes reduce to the items.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListPayload<T> {
    Wrapped { items: Vec<T> },
    Bare(Vec<T>),
}

#[cfg(any(test, feature = "hydrate"))]
impl<T> ListPayload<T> {
    fn into_items(self) -> Vec<T> {
        match self {
            Self::Wrapped { items } | Self::Bare(items) => items,
        }
    }
}

#[cfg(feature = "hydrate")]
fn net_err(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn parse_response<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(ApiError::from_status(resp.status()));
    }
    resp.json::<T>().await.map_err(net_err)
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url).send().await.map_err(net_err)?;
    parse_response(resp).await
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::de::DeserializeOwned>(url: &str, payload: &serde_json::Value) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(payload)
        .map_err(net_err)?
        .send()
        .await
        .map_err(net_err)?;
    parse_response(resp).await
}

#[cfg(feature = "hydrate")]
async fn put_json<T: serde::de::DeserializeOwned>(url: &str, payload: &serde_json::Value) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::put(url)
        .json(payload)
        .map_err(net_err)?
        .send()
        .await
        .map_err(net_err)?;
    parse_response(resp).await
}

#[cfg(feature = "hydrate")]
async fn delete(url: &str) -> Result<(), ApiError> {
    let resp = gloo_net::http::Request::delete(url).send().await.map_err(net_err)?;
    if !resp.ok() {
        return Err(ApiError::from_status(resp.status()));
    }
    Ok(())
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        get_json::<User>("/api/auth/me").await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Authenticate with email and password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or credentials are
/// rejected.
pub async fn login(email: &str, password: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        post_json("/api/auth/login", &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Create an account via `POST /api/auth/register`; the session is
/// established on success.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the email is taken.
pub async fn register(name: &str, email: &str, password: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "name": name, "email": email, "password": password });
        post_json("/api/auth/register", &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout").send().await;
    }
}

/// Create a websocket authentication ticket via `POST /api/live/ticket`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the ticket request fails.
pub async fn create_live_ticket() -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(Deserialize)]
        struct TicketResponse {
            ticket: String,
        }
        let body: TicketResponse = post_json("/api/live/ticket", &serde_json::json!({})).await?;
        Ok(body.ticket)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch one page of posts matching `query`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails; the caller's collection
/// is left untouched.
pub async fn fetch_posts(query: &PostQuery) -> Result<Vec<Post>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload: ListPayload<Post> = get_json(&posts_endpoint(query)).await?;
        Ok(payload.into_items())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Create a post via `POST /api/posts`; returns the stored post.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn create_post(body: &str) -> Result<Post, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "body": body });
        post_json("/api/posts", &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Approve a post via `PUT /api/posts/{id}/approve`; returns the updated
/// post.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn approve_post(post_id: &str) -> Result<Post, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        put_json(&post_approve_endpoint(post_id), &serde_json::json!({})).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = post_id;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Delete a post via `DELETE /api/posts/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn delete_post(post_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        delete(&post_endpoint(post_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = post_id;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch one page of users matching `query`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn fetch_users(query: &UserQuery) -> Result<Vec<AccountRow>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload: ListPayload<AccountRow> = get_json(&users_endpoint(query)).await?;
        Ok(payload.into_items())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch a user's profile from `/api/users/{user_id}/profile`.
pub async fn fetch_user_profile(user_id: &str) -> Option<UserProfile> {
    #[cfg(feature = "hydrate")]
    {
        get_json::<UserProfile>(&user_profile_endpoint(user_id)).await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        None
    }
}

/// Change a user's role via `PUT /api/users/{id}/role`; returns the updated
/// row.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn set_user_role(user_id: &str, role: Role) -> Result<AccountRow, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "role": role.as_str() });
        put_json(&user_role_endpoint(user_id), &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, role);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Delete a user via `DELETE /api/users/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn delete_user(user_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        delete(&user_endpoint(user_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch the current user's conversations from `/api/conversations`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn fetch_conversations() -> Result<Vec<Conversation>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload: ListPayload<Conversation> = get_json("/api/conversations").await?;
        Ok(payload.into_items())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch one page of a conversation's messages.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn fetch_messages(conversation_id: &str, offset: usize, limit: usize) -> Result<Vec<Message>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload: ListPayload<Message> =
            get_json(&conversation_messages_endpoint(conversation_id, offset, limit)).await?;
        Ok(payload.into_items())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (conversation_id, offset, limit);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Send a message via `POST /api/conversations/{id}/messages`; returns the
/// stored message that supersedes the caller's optimistic placeholder.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails; the caller rolls its
/// placeholder back.
pub async fn send_message(conversation_id: &str, body: &str) -> Result<Message, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "body": body });
        let url = format!("/api/conversations/{conversation_id}/messages");
        post_json(&url, &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (conversation_id, body);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}
