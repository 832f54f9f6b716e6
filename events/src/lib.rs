//! Shared wire model for the Solace realtime push channel.
//!
//! This crate owns the envelope representation the client receives over the
//! websocket. It intentionally keeps payloads flexible (`serde_json::Value`)
//! while the envelope itself stays strict, so dispatch code can remain
//! schema-driven.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error returned by [`decode_event`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The raw text could not be decoded as a JSON envelope.
    #[error("failed to decode event envelope: {0}")]
    Decode(#[from] serde_json::Error),
    /// The envelope carries no event name.
    #[error("empty event name")]
    EmptyEvent,
}

/// A single push message on the realtime channel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Unique identifier for this event (UUID string).
    pub id: String,
    /// Milliseconds since the Unix epoch when the event was emitted.
    #[serde(default)]
    pub ts: i64,
    /// Namespaced event name, e.g. `"post:created"`.
    pub event: String,
    /// Arbitrary JSON payload.
    #[serde(default)]
    pub data: Value,
}

impl Envelope {
    /// Entity prefix of the event name (`"post"` for `"post:created"`).
    #[must_use]
    pub fn entity(&self) -> &str {
        self.event.split(':').next().unwrap_or("")
    }

    /// Action suffix of the event name (`"created"` for `"post:created"`).
    ///
    /// Empty when the event name carries no `:` separator.
    #[must_use]
    pub fn action(&self) -> &str {
        self.event.split_once(':').map_or("", |(_, action)| action)
    }
}

/// Encode an envelope into JSON text.
///
/// # Panics
///
/// Never panics in practice; serializing an [`Envelope`] is infallible since
/// every field is already JSON-representable.
#[must_use]
pub fn encode_event(envelope: &Envelope) -> String {
    serde_json::to_string(envelope).unwrap_or_default()
}

/// Decode JSON text into an envelope.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for malformed JSON and
/// [`CodecError::EmptyEvent`] when the event name is missing or blank.
pub fn decode_event(text: &str) -> Result<Envelope, CodecError> {
    let envelope: Envelope = serde_json::from_str(text)?;
    if envelope.event.is_empty() {
        return Err(CodecError::EmptyEvent);
    }
    Ok(envelope)
}

/// A typed mutation delivered for one entity's list.
///
/// This is the reconciliation vocabulary: every push event that touches a
/// client-held collection reduces to one of these four shapes.
#[derive(Clone, Debug, PartialEq)]
pub enum ItemEvent<T> {
    /// A new item came into existence; carries the full item.
    Created(T),
    /// An existing item changed fields; carries the full updated item.
    Updated(T),
    /// An item passed moderation; carries the full updated item.
    Approved(T),
    /// The item with this id is gone.
    Deleted(String),
}

/// Parse a typed [`ItemEvent`] from an envelope scoped to one entity.
///
/// Returns `None` when the envelope belongs to another entity, names an
/// unknown action, or carries a payload that does not deserialize as `T`.
/// Deletions only need an `id` field in the payload.
#[must_use]
pub fn parse_item_event<T: DeserializeOwned>(envelope: &Envelope, entity: &str) -> Option<ItemEvent<T>> {
    if envelope.entity() != entity {
        return None;
    }
    match envelope.action() {
        "created" => serde_json::from_value(envelope.data.clone())
            .ok()
            .map(ItemEvent::Created),
        "updated" => serde_json::from_value(envelope.data.clone())
            .ok()
            .map(ItemEvent::Updated),
        "approved" => serde_json::from_value(envelope.data.clone())
            .ok()
            .map(ItemEvent::Approved),
        "deleted" => envelope
            .data
            .get("id")
            .and_then(Value::as_str)
            .map(|id| ItemEvent::Deleted(id.to_owned())),
        _ => None,
    }
}
