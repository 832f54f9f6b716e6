//! Messaging state: conversation inventory and the active thread.
//!
//! DESIGN
//! ======
//! The thread is an oldest-first `LiveList`; "load earlier" appends older
//! pages which the merge re-sorts to the top. Optimistic placeholders enter
//! through the list's pending API so the confirm/rollback rules live in one
//! place.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use livelist::{LiveList, SortOrder};

use crate::net::types::{Conversation, Message};
use crate::state::{FOLLOW_PAGE_SIZE, INITIAL_PAGE_SIZE};

/// State for the messages page.
#[derive(Clone, Debug, PartialEq)]
pub struct MessagesState {
    pub conversations: Vec<Conversation>,
    pub conversations_loading: bool,
    /// Conversation whose thread is on screen, if any.
    pub active_id: Option<String>,
    pub thread: LiveList<Message>,
    pub send_error: Option<String>,
    pub error: Option<String>,
}

impl Default for MessagesState {
    fn default() -> Self {
        Self {
            conversations: Vec::new(),
            conversations_loading: false,
            active_id: None,
            thread: LiveList::new(SortOrder::OldestFirst, INITIAL_PAGE_SIZE, FOLLOW_PAGE_SIZE),
            send_error: None,
            error: None,
        }
    }
}

impl MessagesState {
    /// Update a conversation's sidebar preview for an incoming message,
    /// counting it unread unless its thread is on screen.
    pub fn bump_preview(&mut self, message: &Message) {
        let active = self.active_id.as_deref() == Some(message.conversation_id.as_str());
        if let Some(conversation) = self
            .conversations
            .iter_mut()
            .find(|c| c.id == message.conversation_id)
        {
            conversation.last_message = Some(message.body.clone());
            conversation.last_ts = message.created_at;
            if !active {
                conversation.unread += 1;
            }
        }
        self.conversations.sort_by(|a, b| b.last_ts.cmp(&a.last_ts));
    }

    /// Clear the unread counter when a conversation is opened.
    pub fn mark_read(&mut self, conversation_id: &str) {
        if let Some(conversation) = self.conversations.iter_mut().find(|c| c.id == conversation_id) {
            conversation.unread = 0;
        }
    }
}
