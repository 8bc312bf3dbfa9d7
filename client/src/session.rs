//! Session credential persistence.
//!
//! Credentials live in the host's key-value store under the keys the mobile
//! clients have always used, so an upgraded app finds its existing session.

use crate::{
    auth::Credentials,
    config::Config,
    storage::{KeyValueStore, StorageError},
};

pub const USER_ID_KEY: &str = "userId";
pub const USER_NAME_KEY: &str = "userName";
pub const TOKEN_KEY: &str = "token";

/// Write all three credential values.
pub async fn persist_credentials(
    store: &dyn KeyValueStore,
    config: &Config,
    credentials: &Credentials,
) -> Result<(), StorageError> {
    store
        .set(&config.storage_key(USER_ID_KEY), &credentials.user_id)
        .await?;
    store
        .set(&config.storage_key(USER_NAME_KEY), &credentials.user_name)
        .await?;
    store
        .set(&config.storage_key(TOKEN_KEY), &credentials.token)
        .await?;

    tracing::debug!(user_id = %credentials.user_id, "credentials persisted");

    Ok(())
}

/// Read the stored session back. Returns `None` unless all three values are
/// present; a partial session is treated as signed out.
pub async fn load_credentials(
    store: &dyn KeyValueStore,
    config: &Config,
) -> Result<Option<Credentials>, StorageError> {
    let user_id = store.get(&config.storage_key(USER_ID_KEY)).await?;
    let user_name = store.get(&config.storage_key(USER_NAME_KEY)).await?;
    let token = store.get(&config.storage_key(TOKEN_KEY)).await?;

    match (user_id, user_name, token) {
        (Some(user_id), Some(user_name), Some(token)) => Ok(Some(Credentials {
            user_id,
            user_name,
            token,
        })),
        _ => Ok(None),
    }
}

/// Drop the stored session, signing the user out.
pub async fn clear_credentials(
    store: &dyn KeyValueStore,
    config: &Config,
) -> Result<(), StorageError> {
    store.remove(&config.storage_key(USER_ID_KEY)).await?;
    store.remove(&config.storage_key(USER_NAME_KEY)).await?;
    store.remove(&config.storage_key(TOKEN_KEY)).await?;

    Ok(())
}
