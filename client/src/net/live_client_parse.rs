//! Envelope helpers extracted from `live_client`.

#[cfg(test)]
#[path = "live_client_parse_test.rs"]
mod live_client_parse_test;

#[cfg(any(test, feature = "hydrate"))]
use events::Envelope;

/// Entity topics this client subscribes to on every connection.
#[cfg(any(test, feature = "hydrate"))]
pub(super) const LIVE_TOPICS: [&str; 3] = ["post", "user", "message"];

/// Extract the session identity from a `session:connected` envelope.
#[cfg(any(test, feature = "hydrate"))]
pub(super) fn connected_client_id(envelope: &Envelope) -> Option<String> {
    if envelope.event != "session:connected" {
        return None;
    }
    envelope
        .data
        .get("client_id")
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned)
}

/// Build the subscription handshake sent right after the socket opens.
#[cfg(any(test, feature = "hydrate"))]
pub(super) fn subscribe_envelope() -> Envelope {
    Envelope {
        id: uuid::Uuid::new_v4().to_string(),
        ts: 0,
        event: "session:subscribe".to_owned(),
        data: serde_json::json!({ "topics": LIVE_TOPICS }),
    }
}
