//! Unified error handling for the client layer.

use crate::{auth::AuthError, storage::StorageError};

/// Errors a client flow can surface to the shell.
///
/// Business rejections (wrong password, taken email) are flow outcomes,
/// not errors; this type covers collaborator failures only.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type alias for client flows.
pub type Result<T> = std::result::Result<T, ClientError>;
