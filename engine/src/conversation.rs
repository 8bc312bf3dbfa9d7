//! Conversation types.

use crate::{ConversationId, Message, MessageId};
use serde::{Deserialize, Serialize};

/// A chat thread: a unique id and an ordered list of messages.
///
/// The id is immutable for the lifetime of the entity. The message list is
/// treated as a full-replacement value by [`crate::reconcile`]: an update
/// installs the incoming list wholesale, it never merges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    /// Unique identifier for this conversation
    #[serde(rename = "_id")]
    pub id: ConversationId,
    /// Ordered message history, oldest first
    pub messages: Vec<Message>,
}

impl Conversation {
    /// Create a new conversation.
    pub fn new(id: impl Into<ConversationId>, messages: Vec<Message>) -> Self {
        Self {
            id: id.into(),
            messages,
        }
    }

    /// Create a conversation with no messages yet.
    pub fn empty(id: impl Into<ConversationId>) -> Self {
        Self::new(id, Vec::new())
    }

    /// The most recent message, if any.
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Whether a message with the given id is present.
    pub fn contains_message(&self, id: &str) -> bool {
        self.messages.iter().any(|m| m.id == id)
    }

    /// Number of messages in the thread.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Look up a message by id.
    pub fn message(&self, id: &MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| &m.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_conversation() {
        let message = Message::new("msg_1", "user_1", "hello", 1000);
        let conversation = Conversation::new("conv_1", vec![message]);

        assert_eq!(conversation.id, "conv_1");
        assert_eq!(conversation.message_count(), 1);
    }

    #[test]
    fn empty_conversation() {
        let conversation = Conversation::empty("conv_1");

        assert_eq!(conversation.message_count(), 0);
        assert!(conversation.last_message().is_none());
    }

    #[test]
    fn last_message() {
        let conversation = Conversation::new(
            "conv_1",
            vec![
                Message::new("msg_1", "user_1", "first", 1000),
                Message::new("msg_2", "user_2", "second", 2000),
            ],
        );

        assert_eq!(conversation.last_message().unwrap().id, "msg_2");
    }

    #[test]
    fn contains_message() {
        let conversation = Conversation::new(
            "conv_1",
            vec![Message::new("msg_1", "user_1", "hello", 1000)],
        );

        assert!(conversation.contains_message("msg_1"));
        assert!(!conversation.contains_message("msg_2"));
    }

    #[test]
    fn serialization_roundtrip() {
        let conversation = Conversation::new(
            "conv_1",
            vec![Message::new("msg_1", "user_1", "hello", 1000)],
        );

        let json = serde_json::to_string(&conversation).unwrap();
        let parsed: Conversation = serde_json::from_str(&json).unwrap();

        assert_eq!(conversation, parsed);
    }

    #[test]
    fn serialization_format() {
        let conversation = Conversation::empty("conv_1");

        let json = serde_json::to_string(&conversation).unwrap();
        assert!(json.contains("\"_id\":\"conv_1\""));
        assert!(json.contains("\"messages\":[]"));
    }
}
