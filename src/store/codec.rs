//! JSON encoding of persisted values.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::adapter::PersistenceAdapter;

/// Failure to encode or decode a stored value.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to encode value for {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("stored value under {key} is unreadable: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Serialize `value` as JSON under `key`.
pub fn save<P, T>(store: &mut P, key: &str, value: &T) -> Result<(), StoreError>
where
    P: PersistenceAdapter + ?Sized,
    T: Serialize,
{
    let json = serde_json::to_string(value).map_err(|source| StoreError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.set(key, json);
    Ok(())
}

/// Load and deserialize the JSON value under `key`.
///
/// `Ok(None)` means nothing is stored.
pub fn load<P, T>(store: &P, key: &str) -> Result<Option<T>, StoreError>
where
    P: PersistenceAdapter + ?Sized,
    T: DeserializeOwned,
{
    let Some(json) = store.get(key) else {
        return Ok(None);
    };
    serde_json::from_str(&json)
        .map(Some)
        .map_err(|source| StoreError::Decode {
            key: key.to_string(),
            source,
        })
}
