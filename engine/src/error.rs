//! Error types for the Parley engine.

use crate::ConversationId;
use thiserror::Error;

/// All possible errors from the Parley engine.
///
/// The reducer and the reconciler are total over well-formed input and never
/// fail; errors only arise at the persistence boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("unsupported snapshot format version: {actual} (max supported: {supported})")]
    SnapshotVersionMismatch { supported: u32, actual: u32 },

    #[error("duplicate conversation id: {0}")]
    DuplicateConversationId(ConversationId),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
