//! Message event handlers extracted from `live_client`.

#[cfg(test)]
#[path = "live_client_messages_test.rs"]
mod live_client_messages_test;

#[cfg(any(test, feature = "hydrate"))]
use events::ItemEvent;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::Message;
#[cfg(any(test, feature = "hydrate"))]
use crate::state::messages::MessagesState;

/// Reconcile a message event against the messages page.
///
/// A creation lands in the on-screen thread when its conversation is active
/// (idempotent against the optimistic confirm racing the broadcast) and
/// always refreshes the sidebar preview. Other mutations only concern the
/// active thread.
#[cfg(any(test, feature = "hydrate"))]
pub(super) fn apply_message_event(messages: &mut MessagesState, event: &ItemEvent<Message>) {
    match event {
        ItemEvent::Created(message) => {
            if messages.active_id.as_deref() == Some(message.conversation_id.as_str()) {
                messages.thread.apply(ItemEvent::Created(message.clone()));
            }
            messages.bump_preview(message);
        }
        ItemEvent::Updated(message) | ItemEvent::Approved(message) => {
            if messages.active_id.as_deref() == Some(message.conversation_id.as_str()) {
                messages.thread.apply(ItemEvent::Updated(message.clone()));
            }
        }
        ItemEvent::Deleted(id) => messages.thread.apply(ItemEvent::Deleted(id.clone())),
    }
}

/// Route a message envelope to the messages page.
#[cfg(feature = "hydrate")]
pub(super) fn handle_message_event(
    envelope: &events::Envelope,
    messages: leptos::prelude::RwSignal<MessagesState>,
) -> bool {
    use leptos::prelude::Update;

    let Some(event) = events::parse_item_event::<Message>(envelope, "message") else {
        return false;
    };
    messages.update(|m| apply_message_event(m, &event));
    true
}
