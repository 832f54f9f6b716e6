//! A single message rendered in the active conversation thread.

use leptos::prelude::*;

use crate::net::types::Message;

/// Message bubble; optimistic placeholders render dimmed with a sending hint
/// until the server confirms them.
#[component]
pub fn MessageBubble(message: Message, is_self: bool) -> impl IntoView {
    let mut class = String::from("message-bubble");
    class.push_str(if is_self {
        " message-bubble--self"
    } else {
        " message-bubble--peer"
    });
    if message.pending {
        class.push_str(" message-bubble--pending");
    }
    let pending = message.pending;

    view! {
        <div class=class>
            <span class="message-bubble__sender">{message.sender_name.clone()}</span>
            <p class="message-bubble__body">{message.body.clone()}</p>
            <Show when=move || pending>
                <span class="message-bubble__status">"Sending..."</span>
            </Show>
        </div>
    }
}
