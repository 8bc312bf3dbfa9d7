//! Store - the single-writer state container.
//!
//! The Store owns all presentation-layer state. It consumes action
//! descriptors through [`Store::apply`] and is the only writer; callers
//! (the host shell's dispatch layer) serialize access to it.

use crate::{
    error::Result, reconcile::reconcile, Action, Conversation, ConversationId, StateSnapshot,
    UserId, SNAPSHOT_FORMAT_VERSION,
};
use serde::{Deserialize, Serialize};

/// The client state: signed-in user, conversation list, current selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    /// Signed-in user, set after authentication
    user_id: Option<UserId>,
    /// Conversation list, in display order; ids are unique
    conversations: Vec<Conversation>,
    /// Thread currently open in the UI, if any
    selected_conversation_id: Option<ConversationId>,
}

/// What an applied action changed, for observability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The signed-in user was recorded.
    UserIdSet,
    /// The whole conversation list was replaced.
    ConversationsReplaced { count: usize },
    /// The open thread changed.
    SelectionChanged,
    /// An existing conversation took an updated message list.
    ConversationUpdated { index: usize },
    /// A conversation not previously in the list was appended.
    ConversationAppended { index: usize },
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action descriptor. This is the reducer: total over all
    /// actions, no error path.
    pub fn apply(&mut self, action: Action) -> Transition {
        match action {
            Action::SetUserId { user_id } => {
                self.user_id = Some(user_id);
                Transition::UserIdSet
            }
            Action::SetConversations { conversations } => {
                let count = conversations.len();
                self.conversations = conversations;
                Transition::ConversationsReplaced { count }
            }
            Action::SetConversationSelectedId {
                conversation_selected_id,
            } => {
                self.selected_conversation_id = Some(conversation_selected_id);
                Transition::SelectionChanged
            }
            Action::UpdateConversations { conversation } => {
                let matched = self
                    .conversations
                    .iter()
                    .position(|c| c.id == conversation.id);
                self.conversations = reconcile(&self.conversations, conversation);
                match matched {
                    Some(index) => Transition::ConversationUpdated { index },
                    None => Transition::ConversationAppended {
                        index: self.conversations.len() - 1,
                    },
                }
            }
        }
    }

    /// The signed-in user, if any.
    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }

    /// The conversation list, in display order.
    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    /// Get a conversation by id.
    pub fn conversation(&self, id: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == id)
    }

    /// The id of the open thread, if any.
    pub fn selected_conversation_id(&self) -> Option<&ConversationId> {
        self.selected_conversation_id.as_ref()
    }

    /// The open thread itself. `None` when nothing is selected or the
    /// selected id is not in the list.
    pub fn selected_conversation(&self) -> Option<&Conversation> {
        let id = self.selected_conversation_id.as_ref()?;
        self.conversation(id)
    }

    /// Export the current state as a snapshot for the host to persist.
    pub fn export_state(&self) -> StateSnapshot {
        StateSnapshot {
            format_version: SNAPSHOT_FORMAT_VERSION,
            user_id: self.user_id.clone(),
            selected_conversation_id: self.selected_conversation_id.clone(),
            conversations: self.conversations.clone(),
        }
    }

    /// Import state from a snapshot, replacing the current state.
    ///
    /// The snapshot must be internally consistent (unique conversation ids).
    pub fn import_state(&mut self, snapshot: StateSnapshot) -> Result<()> {
        snapshot.validate()?;

        self.user_id = snapshot.user_id;
        self.selected_conversation_id = snapshot.selected_conversation_id;
        self.conversations = snapshot.conversations;

        Ok(())
    }
}
