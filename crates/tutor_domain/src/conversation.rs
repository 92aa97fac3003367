use derive_more::derive::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{ChatMessage, MessageId, Role};

#[derive(Debug, Display, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ConversationId(Uuid);

impl ConversationId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

/// The in-memory transcript of one conversation. Lives for the duration of
/// the process; prior turns seed the model session on every send.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Conversation {
    pub id: ConversationId,
    pub messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new() -> Self {
        Self { id: ConversationId::generate(), messages: Vec::new() }
    }

    pub fn push(&mut self, message: ChatMessage) -> MessageId {
        let id = message.id;
        self.messages.push(message);
        id
    }

    pub fn get_mut(&mut self, id: MessageId) -> Option<&mut ChatMessage> {
        self.messages.iter_mut().find(|message| message.id == id)
    }

    /// Messages that seed a fresh model session: every completed turn, in
    /// order, excluding the message an active turn is still writing to.
    pub fn history(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter().filter(|message| !message.is_streaming)
    }

    pub fn last_model_message(&self) -> Option<&ChatMessage> {
        self.messages
            .iter()
            .rev()
            .find(|message| message.role == Role::Model)
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_history_excludes_streaming_message() {
        let mut fixture = Conversation::new();
        fixture.push(ChatMessage::user("hỏi"));
        fixture.push(ChatMessage::streaming());

        let actual = fixture.history().count();
        assert_eq!(actual, 1);
    }

    #[test]
    fn test_get_mut_finds_by_id() {
        let mut fixture = Conversation::new();
        let id = fixture.push(ChatMessage::streaming());
        fixture.get_mut(id).unwrap().text.push_str("một phần");

        assert_eq!(fixture.messages[0].text, "một phần");
    }
}
