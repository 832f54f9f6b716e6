//! Messages page — conversation inventory and the active thread.
//!
//! ARCHITECTURE
//! ============
//! The thread is the one place a client-originated mutation enters the
//! collection before server confirmation: submit inserts a placeholder with
//! a local `temp-` id, and the REST response (or the racing broadcast echo)
//! supersedes it through the list's pending API. Failure rolls the
//! placeholder back so no phantom message survives.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::message_bubble::MessageBubble;
use crate::net::types::{Message, User};
use crate::state::auth::AuthState;
use crate::state::conn::ConnState;
use crate::state::messages::MessagesState;
use crate::util::auth::install_unauth_redirect;
use crate::util::resync::install_resync_reload;
use crate::util::validation::validate_message_input;

/// Build the optimistic placeholder inserted at submit time.
fn pending_message(conversation_id: &str, sender: &User, body: &str, now_ms: i64) -> Message {
    Message {
        id: format!("temp-{}", uuid::Uuid::new_v4()),
        conversation_id: conversation_id.to_owned(),
        sender_id: sender.id.clone(),
        sender_name: sender.name.clone(),
        body: body.to_owned(),
        created_at: now_ms,
        pending: true,
    }
}

fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        {
            js_sys::Date::now() as i64
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}

fn load_conversations(messages: RwSignal<MessagesState>, auth: RwSignal<AuthState>) {
    if messages.with_untracked(|m| m.conversations_loading) {
        return;
    }
    messages.update(|m| m.conversations_loading = true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_conversations().await {
            Ok(list) => messages.update(|m| {
                m.conversations = list;
                m.conversations.sort_by(|a, b| b.last_ts.cmp(&a.last_ts));
                m.conversations_loading = false;
                m.error = None;
            }),
            Err(e) => {
                if e.is_unauthorized() {
                    auth.update(|a| a.user = None);
                }
                messages.update(|m| {
                    m.conversations_loading = false;
                    m.error = Some(e.to_string());
                });
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
        messages.update(|m| m.conversations_loading = false);
    }
}

/// Load one page of the active thread. `reset` replaces the collection when
/// the conversation changes or the live channel resyncs; append fetches
/// reach further back in time.
fn load_thread(messages: RwSignal<MessagesState>, auth: RwSignal<AuthState>, reset: bool) {
    let Some(conversation_id) = messages.with_untracked(|m| m.active_id.clone()) else {
        return;
    };
    let mut ticket = None;
    messages.update(|m| ticket = m.thread.begin_load(reset));
    let Some(ticket) = ticket else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_messages(&conversation_id, ticket.offset, ticket.limit).await {
            Ok(batch) => messages.update(|m| {
                m.thread.complete_load(ticket, batch);
                m.error = None;
            }),
            Err(e) => {
                if e.is_unauthorized() {
                    auth.update(|a| a.user = None);
                }
                messages.update(|m| {
                    m.thread.fail_load(ticket);
                    m.error = Some(e.to_string());
                });
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, conversation_id);
        messages.update(|m| m.thread.fail_load(ticket));
    }
}

fn open_conversation(messages: RwSignal<MessagesState>, auth: RwSignal<AuthState>, conversation_id: &str) {
    let already_open = messages.with_untracked(|m| m.active_id.as_deref() == Some(conversation_id));
    if already_open {
        return;
    }
    messages.update(|m| {
        m.active_id = Some(conversation_id.to_owned());
        m.send_error = None;
        m.mark_read(conversation_id);
    });
    load_thread(messages, auth, true);
}

/// Messages page for `/messages`.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn MessagesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let conn = expect_context::<RwSignal<ConnState>>();
    let messages = expect_context::<RwSignal<MessagesState>>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate.clone());
    install_resync_reload(conn, move || {
        load_conversations(messages, auth);
        load_thread(messages, auth, true);
    });

    let requested_initial = RwSignal::new(false);
    Effect::new(move || {
        if requested_initial.get() {
            return;
        }
        let state = auth.get();
        if state.loading || state.user.is_none() {
            return;
        }
        requested_initial.set(true);
        load_conversations(messages, auth);
    });

    // Keep the newest message in view as the thread grows.
    let thread_ref = NodeRef::<leptos::html::Div>::new();
    Effect::new(move || {
        let _ = messages.with(|m| m.thread.len());
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = thread_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let draft = RwSignal::new(String::new());
    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(conversation_id) = messages.with_untracked(|m| m.active_id.clone()) else {
            return;
        };
        let Some(sender) = auth.with_untracked(|a| a.user.clone()) else {
            return;
        };
        let body = match validate_message_input(&draft.get_untracked()) {
            Ok(body) => body,
            Err(msg) => {
                messages.update(|m| m.send_error = Some(msg.to_owned()));
                return;
            }
        };

        let placeholder = pending_message(&conversation_id, &sender, &body, now_ms());
        let temp_id = placeholder.id.clone();
        messages.update(|m| {
            m.send_error = None;
            m.thread.push_pending(placeholder);
        });
        draft.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::send_message(&conversation_id, &body).await {
                Ok(stored) => messages.update(|m| {
                    m.thread.confirm_pending(&temp_id, stored.clone());
                    m.bump_preview(&stored);
                }),
                Err(e) => {
                    if e.is_unauthorized() {
                        auth.update(|a| a.user = None);
                    }
                    messages.update(|m| {
                        m.thread.reject_pending(&temp_id);
                        m.send_error = Some(e.to_string());
                    });
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (body, conversation_id);
            messages.update(|m| m.thread.reject_pending(&temp_id));
        }
    };

    let self_id = move || auth.with(|a| a.user.as_ref().map(|u| u.id.clone()).unwrap_or_default());

    view! {
        <div class="messages-page">
            <header class="messages-page__header toolbar">
                <span class="toolbar__title">"Messages"</span>
                <span class="toolbar__spacer"></span>
                <a class="toolbar__link" href="/">"Back to feed"</a>
            </header>

            <Show when=move || messages.with(|m| m.error.is_some())>
                <p class="messages-page__error">
                    {move || messages.with(|m| m.error.clone()).unwrap_or_default()}
                    <button class="btn" on:click=move |_| load_conversations(messages, auth)>
                        "Retry"
                    </button>
                </p>
            </Show>

            <div class="messages-page__layout">
                <aside class="messages-page__sidebar">
                    <Show
                        when=move || !messages.with(|m| m.conversations_loading)
                        fallback=move || view! { <p>"Loading conversations..."</p> }
                    >
                        {move || {
                            let conversations = messages.with(|m| m.conversations.clone());
                            conversations
                                .into_iter()
                                .map(|conversation| {
                                    let id = conversation.id.clone();
                                    let active = {
                                        let id = id.clone();
                                        move || messages.with(|m| m.active_id.as_deref() == Some(id.as_str()))
                                    };
                                    let unread = conversation.unread;
                                    view! {
                                        <button
                                            class="messages-page__conversation"
                                            class=("messages-page__conversation--active", active)
                                            on:click=move |_| open_conversation(messages, auth, &id)
                                        >
                                            <span class="messages-page__peer">{conversation.peer_name.clone()}</span>
                                            <span class="messages-page__preview">
                                                {conversation.last_message.clone().unwrap_or_default()}
                                            </span>
                                            <Show when=move || { unread > 0 }>
                                                <span class="messages-page__unread">{unread}</span>
                                            </Show>
                                        </button>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </Show>
                </aside>

                <section class="messages-page__thread">
                    <Show
                        when=move || messages.with(|m| m.active_id.is_some())
                        fallback=move || view! { <p class="messages-page__empty">"Pick a conversation."</p> }
                    >
                        <Show when=move || messages.with(|m| m.thread.has_more())>
                            <button
                                class="btn messages-page__earlier"
                                disabled=move || messages.with(|m| m.thread.is_loading())
                                on:click=move |_| load_thread(messages, auth, false)
                            >
                                {move || {
                                    if messages.with(|m| m.thread.is_loading()) { "Loading..." } else { "Load earlier" }
                                }}
                            </button>
                        </Show>

                        <div class="messages-page__bubbles" node_ref=thread_ref>
                            {move || {
                                let me = self_id();
                                let thread = messages.with(|m| m.thread.items().to_vec());
                                thread
                                    .into_iter()
                                    .map(|message| {
                                        let is_self = message.sender_id == me;
                                        view! { <MessageBubble message=message is_self=is_self/> }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>

                        <Show when=move || messages.with(|m| m.send_error.is_some())>
                            <p class="messages-page__send-error">
                                {move || messages.with(|m| m.send_error.clone()).unwrap_or_default()}
                            </p>
                        </Show>

                        <form class="messages-page__composer" on:submit=on_send>
                            <input
                                class="messages-page__input"
                                type="text"
                                placeholder="Write a message"
                                prop:value=move || draft.get()
                                on:input=move |ev| draft.set(event_target_value(&ev))
                            />
                            <button class="btn btn--primary" type="submit">
                                "Send"
                            </button>
                        </form>
                    </Show>
                </section>
            </div>
        </div>
    }
}
