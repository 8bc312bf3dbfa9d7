//! Snapshot types for persisting and restoring store state.
//!
//! The engine owns no storage; the host shell does. Snapshots are the bridge:
//! the shell serializes one on suspend and hands it back on the next launch.

use crate::{error::Result, Conversation, ConversationId, Error, UserId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Version of the snapshot format for future compatibility.
pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

/// A point-in-time snapshot of the store state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSnapshot {
    /// Snapshot format version
    pub format_version: u32,
    /// Signed-in user, if any
    pub user_id: Option<UserId>,
    /// Currently open thread, if any
    pub selected_conversation_id: Option<ConversationId>,
    /// The conversation list, in display order
    pub conversations: Vec<Conversation>,
}

impl Default for StateSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl StateSnapshot {
    /// Create a new empty snapshot at the current format version.
    pub fn new() -> Self {
        Self {
            format_version: SNAPSHOT_FORMAT_VERSION,
            user_id: None,
            selected_conversation_id: None,
            conversations: Vec::new(),
        }
    }

    /// Number of conversations captured.
    pub fn conversation_count(&self) -> usize {
        self.conversations.len()
    }

    /// Validate internal consistency: conversation ids must be unique.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for conversation in &self.conversations {
            if !seen.insert(&conversation.id) {
                return Err(Error::DuplicateConversationId(conversation.id.clone()));
            }
        }
        Ok(())
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::InvalidSnapshot(e.to_string()))
    }

    /// Serialize to pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::InvalidSnapshot(e.to_string()))
    }

    /// Deserialize from JSON, rejecting snapshots from a newer format.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Self =
            serde_json::from_str(json).map_err(|e| Error::InvalidSnapshot(e.to_string()))?;

        if snapshot.format_version > SNAPSHOT_FORMAT_VERSION {
            return Err(Error::SnapshotVersionMismatch {
                supported: SNAPSHOT_FORMAT_VERSION,
                actual: snapshot.format_version,
            });
        }

        Ok(snapshot)
    }
}
