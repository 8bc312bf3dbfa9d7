//! Message types.

use crate::{MessageId, Timestamp, UserId};
use serde::{Deserialize, Serialize};

/// One chat message inside a conversation.
///
/// Reconciliation never looks inside a message; the whole list is carried
/// as a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique identifier for this message
    #[serde(rename = "_id")]
    pub id: MessageId,
    /// User who sent the message
    pub sender: UserId,
    /// Message text
    pub body: String,
    /// When the message was sent (milliseconds since epoch)
    pub sent_at: Timestamp,
}

impl Message {
    /// Create a new message.
    pub fn new(
        id: impl Into<MessageId>,
        sender: impl Into<UserId>,
        body: impl Into<String>,
        sent_at: Timestamp,
    ) -> Self {
        Self {
            id: id.into(),
            sender: sender.into(),
            body: body.into(),
            sent_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_message() {
        let message = Message::new("msg_1", "user_1", "hello", 1000);

        assert_eq!(message.id, "msg_1");
        assert_eq!(message.sender, "user_1");
        assert_eq!(message.body, "hello");
        assert_eq!(message.sent_at, 1000);
    }

    #[test]
    fn serialization_roundtrip() {
        let message = Message::new("msg_1", "user_1", "hello", 1000);

        let json = serde_json::to_string(&message).unwrap();
        let parsed: Message = serde_json::from_str(&json).unwrap();

        assert_eq!(message, parsed);
    }

    #[test]
    fn serialization_format() {
        let message = Message::new("msg_1", "user_1", "hello", 1000);

        let json = serde_json::to_string(&message).unwrap();
        assert!(json.contains("\"_id\":\"msg_1\""));
        assert!(json.contains("sentAt")); // camelCase
    }
}
