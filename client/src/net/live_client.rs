//! Websocket live client for realtime reconciliation with the server.
//!
//! The live client manages the connection lifecycle: ticket-based
//! authentication, reconnection with exponential backoff, envelope decoding,
//! and dispatch into the per-domain state signals. It is the push half of the
//! list synchronizer; the pull half is the REST layer in `api`.
//!
//! All websocket logic is gated behind `#[cfg(feature = "hydrate")]` since it
//! requires a browser environment; the per-entity apply rules live in the
//! submodules as plain functions over state structs so they stay testable on
//! the host.
//!
//! ERROR HANDLING
//! ==============
//! Transport and decode failures are logged and absorbed; realtime UX
//! recovers through the reconnect loop, and every reconnect forces the pages
//! into a reset fetch because events missed during the gap are gone.

#[path = "live_client_messages.rs"]
mod live_client_messages;
#[path = "live_client_parse.rs"]
mod live_client_parse;
#[path = "live_client_posts.rs"]
mod live_client_posts;
#[path = "live_client_users.rs"]
mod live_client_users;

#[cfg(feature = "hydrate")]
use self::live_client_messages::handle_message_event;
#[cfg(feature = "hydrate")]
use self::live_client_parse::{connected_client_id, subscribe_envelope};
#[cfg(feature = "hydrate")]
use self::live_client_posts::handle_post_event;
#[cfg(feature = "hydrate")]
use self::live_client_users::handle_user_event;

#[cfg(feature = "hydrate")]
use events::Envelope;
#[cfg(feature = "hydrate")]
use leptos::prelude::{RwSignal, Update};

#[cfg(feature = "hydrate")]
use crate::state::admin::AdminState;
#[cfg(feature = "hydrate")]
use crate::state::conn::{ConnState, ConnectionStatus};
#[cfg(feature = "hydrate")]
use crate::state::feed::FeedState;
#[cfg(feature = "hydrate")]
use crate::state::messages::MessagesState;
#[cfg(feature = "hydrate")]
use crate::state::profile::ProfileState;

/// Spawn the websocket live-client lifecycle as a local async task.
///
/// Connects to the server, dispatches incoming envelopes into state, and
/// reconnects on disconnect with exponential backoff.
#[cfg(feature = "hydrate")]
pub fn spawn_live_client(
    conn: RwSignal<ConnState>,
    feed: RwSignal<FeedState>,
    admin: RwSignal<AdminState>,
    profile: RwSignal<ProfileState>,
    messages: RwSignal<MessagesState>,
) {
    leptos::task::spawn_local(live_client_loop(conn, feed, admin, profile, messages));
}

/// Main connection loop with reconnect logic.
#[cfg(feature = "hydrate")]
async fn live_client_loop(
    conn: RwSignal<ConnState>,
    feed: RwSignal<FeedState>,
    admin: RwSignal<AdminState>,
    profile: RwSignal<ProfileState>,
    messages: RwSignal<MessagesState>,
) {
    let mut backoff_ms: u32 = 1000;
    let max_backoff_ms: u32 = 10_000;

    loop {
        conn.update(|c| c.status = ConnectionStatus::Connecting);

        // Get a websocket ticket over REST; the socket itself carries no
        // session cookie.
        let ticket = match crate::net::api::create_live_ticket().await {
            Ok(t) => t,
            Err(e) => {
                leptos::logging::warn!("live ticket failed: {e}");
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
                backoff_ms = (backoff_ms * 2).min(max_backoff_ms);
                continue;
            }
        };

        // Determine the websocket URL from the page origin.
        let location = web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default();
        let ws_proto = if location.starts_with("https") { "wss" } else { "ws" };
        let host = web_sys::window()
            .and_then(|w| w.location().host().ok())
            .unwrap_or_else(|| "localhost:3000".to_owned());
        let ws_url = format!("{ws_proto}://{host}/api/live?ticket={ticket}");

        match connect_and_run(&ws_url, conn, feed, admin, profile, messages).await {
            Ok(()) => {
                leptos::logging::log!("live channel disconnected cleanly");
                backoff_ms = 1000;
            }
            Err(e) => {
                leptos::logging::warn!("live channel error: {e}");
            }
        }

        conn.update(|c| c.status = ConnectionStatus::Disconnected);

        // Exponential backoff before reconnect.
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = (backoff_ms * 2).min(max_backoff_ms);
    }
}

/// Connect to the websocket and process events until disconnect.
#[cfg(feature = "hydrate")]
async fn connect_and_run(
    url: &str,
    conn: RwSignal<ConnState>,
    feed: RwSignal<FeedState>,
    admin: RwSignal<AdminState>,
    profile: RwSignal<ProfileState>,
    messages: RwSignal<MessagesState>,
) -> Result<(), String> {
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let mut ws = WebSocket::open(url).map_err(|e| e.to_string())?;

    // Subscribe before announcing the connection, so the resync fetch the
    // pages fire cannot race ahead of event delivery.
    let subscribe = events::encode_event(&subscribe_envelope());
    ws.send(Message::Text(subscribe)).await.map_err(|e| e.to_string())?;
    conn.update(ConnState::mark_connected);

    while let Some(msg) = ws.next().await {
        match msg {
            Ok(Message::Text(text)) => match events::decode_event(&text) {
                Ok(envelope) => dispatch_event(&envelope, conn, feed, admin, profile, messages),
                Err(e) => leptos::logging::warn!("live event decode error: {e}"),
            },
            Ok(Message::Bytes(_)) => {}
            Err(e) => {
                leptos::logging::warn!("live recv error: {e}");
                break;
            }
        }
    }

    Ok(())
}

/// Dispatch an incoming envelope to the matching state handler.
#[cfg(feature = "hydrate")]
fn dispatch_event(
    envelope: &Envelope,
    conn: RwSignal<ConnState>,
    feed: RwSignal<FeedState>,
    admin: RwSignal<AdminState>,
    profile: RwSignal<ProfileState>,
    messages: RwSignal<MessagesState>,
) {
    if let Some(client_id) = connected_client_id(envelope) {
        conn.update(|c| c.client_id = Some(client_id));
        return;
    }
    if handle_post_event(envelope, feed, admin, profile) {
        return;
    }
    if handle_user_event(envelope, admin) {
        return;
    }
    if handle_message_event(envelope, messages) {
        return;
    }
    leptos::logging::log!("unhandled live event: {}", envelope.event);
}
