//! Action descriptors for expressing state transitions.
//!
//! Changes are expressed as plain data descriptors, not direct mutations.
//! The set of kinds is closed, so the reducer's match is exhaustive and a
//! misspelled tag is a compile error rather than a silently dropped update.

use crate::{Conversation, ConversationId, UserId};
use serde::{Deserialize, Serialize};

/// A state transition descriptor consumed by [`crate::Store::apply`].
///
/// The serialized form carries a `type` tag (`SET_USER_ID`, ...), the wire
/// naming the mobile clients have always used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Record the signed-in user.
    #[serde(rename_all = "camelCase")]
    SetUserId { user_id: UserId },
    /// Replace the whole conversation list, e.g. after an initial fetch.
    #[serde(rename_all = "camelCase")]
    SetConversations { conversations: Vec<Conversation> },
    /// Change which thread is open.
    #[serde(rename_all = "camelCase")]
    SetConversationSelectedId {
        conversation_selected_id: ConversationId,
    },
    /// Fold one updated conversation into the list.
    #[serde(rename_all = "camelCase")]
    UpdateConversations { conversation: Conversation },
}

impl Action {
    /// Build a [`Action::SetUserId`] descriptor.
    pub fn set_user_id(user_id: impl Into<UserId>) -> Self {
        Action::SetUserId {
            user_id: user_id.into(),
        }
    }

    /// Build a [`Action::SetConversations`] descriptor.
    pub fn set_conversations(conversations: Vec<Conversation>) -> Self {
        Action::SetConversations { conversations }
    }

    /// Build a [`Action::SetConversationSelectedId`] descriptor.
    pub fn set_conversation_selected_id(conversation_id: impl Into<ConversationId>) -> Self {
        Action::SetConversationSelectedId {
            conversation_selected_id: conversation_id.into(),
        }
    }

    /// Build an [`Action::UpdateConversations`] descriptor.
    pub fn update_conversations(conversation: Conversation) -> Self {
        Action::UpdateConversations { conversation }
    }

    /// The kind of this action, for logging and diagnostics.
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::SetUserId { .. } => ActionKind::SetUserId,
            Action::SetConversations { .. } => ActionKind::SetConversations,
            Action::SetConversationSelectedId { .. } => ActionKind::SetConversationSelectedId,
            Action::UpdateConversations { .. } => ActionKind::UpdateConversations,
        }
    }
}

/// Discriminant of an [`Action`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    SetUserId,
    SetConversations,
    SetConversationSelectedId,
    UpdateConversations,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionKind::SetUserId => write!(f, "SET_USER_ID"),
            ActionKind::SetConversations => write!(f, "SET_CONVERSATIONS"),
            ActionKind::SetConversationSelectedId => write!(f, "SET_CONVERSATION_SELECTED_ID"),
            ActionKind::UpdateConversations => write!(f, "UPDATE_CONVERSATIONS"),
        }
    }
}
