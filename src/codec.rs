//! Record codec.
//!
//! Serializes domain records to and from the string values held by a
//! [`KeyValueStore`]. Collections are snapshotted whole: every save rewrites
//! the full sequence under its key, and every load reads it back. A missing
//! key, or a value that no longer parses, loads as the empty collection;
//! malformed data is logged and discarded rather than surfaced or repaired.

use serde::{Serialize, de::DeserializeOwned};

use crate::storage::{KeyValueStore, StorageError};

/// Load the full collection stored under `key`.
///
/// Returns an empty vector when the key is absent or the stored value fails
/// to parse.
///
/// # Errors
///
/// Returns a [`StorageError`] only if the backing storage cannot be read;
/// parse failures are recovered locally.
pub fn load_all<T, S>(store: &S, key: &str) -> Result<Vec<T>, StorageError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key)? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str(&raw) {
        Ok(records) => Ok(records),
        Err(err) => {
            tracing::warn!(key, %err, "discarding malformed stored collection");
            Ok(Vec::new())
        }
    }
}

/// Serialize `records` and overwrite the value stored under `key`.
///
/// # Errors
///
/// Returns a [`StorageError`] if serialization or the write fails.
pub fn save_all<T, S>(store: &S, key: &str, records: &[T]) -> Result<(), StorageError>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(records).map_err(|source| StorageError::Encode {
        key: key.to_owned(),
        source,
    })?;

    store.set(key, &raw)
}

/// Load the single record stored under `key`, if any.
///
/// Malformed data reads as `None`, same policy as [`load_all`].
///
/// # Errors
///
/// Returns a [`StorageError`] only if the backing storage cannot be read.
pub fn load_one<T, S>(store: &S, key: &str) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(record) => Ok(Some(record)),
        Err(err) => {
            tracing::warn!(key, %err, "discarding malformed stored record");
            Ok(None)
        }
    }
}

/// Serialize a single record and overwrite the value stored under `key`.
///
/// # Errors
///
/// Returns a [`StorageError`] if serialization or the write fails.
pub fn save_one<T, S>(store: &S, key: &str, record: &T) -> Result<(), StorageError>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(record).map_err(|source| StorageError::Encode {
        key: key.to_owned(),
        source,
    })?;

    store.set(key, &raw)
}
