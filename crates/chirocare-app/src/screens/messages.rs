//! Conversation list and conversation screens

use chirocare_nav::{ConversationId, NavAction, Route};

use crate::data::{self, ChatMessage, ConversationPreview};

/// Inbox
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagesScreen {
    conversations: Vec<ConversationPreview>,
}

impl Default for MessagesScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl MessagesScreen {
    /// Inbox over the sample conversations
    pub fn new() -> Self {
        Self {
            conversations: data::conversations(),
        }
    }

    /// Conversation rows
    pub fn conversations(&self) -> &[ConversationPreview] {
        &self.conversations
    }

    /// Open a conversation. `None` if it is not in the inbox.
    pub fn open(&self, id: &str) -> Option<NavAction> {
        let preview = self.conversations.iter().find(|preview| preview.id == id)?;
        let id = ConversationId::new(preview.id.clone()).ok()?;
        Some(NavAction::push(Route::Conversation { id }))
    }
}

/// A single chat thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationScreen {
    id: ConversationId,
    with: Option<String>,
    messages: Vec<ChatMessage>,
    outbox: Vec<String>,
}

impl ConversationScreen {
    /// Thread for `id`
    pub fn new(id: ConversationId) -> Self {
        let with = data::conversations()
            .into_iter()
            .find(|preview| preview.id == id.as_str())
            .map(|preview| preview.with);
        let messages = data::messages(id.as_str());
        Self {
            id,
            with,
            messages,
            outbox: Vec::new(),
        }
    }

    /// Conversation id
    pub fn id(&self) -> &ConversationId {
        &self.id
    }

    /// Other participant, if known
    pub fn with(&self) -> Option<&str> {
        self.with.as_deref()
    }

    /// Messages, oldest first
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Queue a message for the chat transport. Blank input is ignored.
    pub fn queue_message(&mut self, body: &str) -> bool {
        let body = body.trim();
        if body.is_empty() {
            return false;
        }
        self.outbox.push(body.to_string());
        true
    }

    /// Messages waiting for the transport
    pub fn outbox(&self) -> &[String] {
        &self.outbox
    }
}
