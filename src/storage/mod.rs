//! Persistent key-value storage.
//!
//! The storefront keeps all of its state behind a synchronous, string-keyed
//! store: one JSON-encoded collection or record per key. Two backends are
//! provided: [`MemoryStore`] for tests and throwaway sessions, and
//! [`FileStore`] for durable on-disk state. Handles are cheap to clone and
//! clones share the same backing storage, with no coordination between them
//! beyond last-write-wins.

use std::path::PathBuf;

use thiserror::Error;

pub mod keys;

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors raised by the storage layer.
///
/// Write failures are never swallowed: every store mutation surfaces them to
/// the caller.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing storage could not be read or written.
    #[error("storage I/O failed for key `{key}`")]
    Io {
        /// Storage key involved in the failed operation.
        key: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The storage directory could not be created or inspected.
    #[error("failed to prepare storage directory `{path}`")]
    Directory {
        /// Directory the store was asked to use.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A record failed to serialize before being written.
    #[error("failed to encode value for key `{key}`")]
    Encode {
        /// Storage key the value was destined for.
        key: String,
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },
}

/// A synchronous, string-keyed persistent store.
///
/// Reads and writes are blocking and complete before returning; there is no
/// buffering, retry queue or background flush.
pub trait KeyValueStore {
    /// Read the raw value stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing storage cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key` entirely. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing storage cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
