//! Auth store.
//!
//! "Authentication" here is identity self-assertion: registering writes the
//! visitor's details to an append-only log and remembers them as the current
//! session, logging out forgets the session. There are no credentials,
//! tokens or expiry, and none are to be added quietly; that trust level is a
//! deliberate property of the storefront, not an oversight.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    codec,
    notify::{Notification, SharedSink},
    storage::{KeyValueStore, StorageError, keys},
};

/// A registered visitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Display name.
    pub name: String,
    /// Mobile number.
    pub mobile: String,
    /// Email address; the natural identifier for display, not enforced
    /// unique.
    pub email: String,
    /// Country.
    pub country: String,
    /// City.
    pub city: String,
    /// Postal code.
    pub pincode: String,
    /// When the visitor registered. Immutable thereafter.
    pub registered_at: Timestamp,
}

/// Registration form input, before stamping.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Mobile number.
    pub mobile: String,
    /// Email address.
    pub email: String,
    /// Country.
    pub country: String,
    /// City.
    pub city: String,
    /// Postal code.
    pub pincode: String,
}

/// Current-session user plus the append-only registration log.
///
/// The session pointer and the log live under independent storage keys; the
/// current user, when set, is always a value copy of a log entry.
#[derive(Debug)]
pub struct AuthStore<S> {
    store: S,
    sink: SharedSink,
    current_user: Option<UserRecord>,
}

impl<S: KeyValueStore> AuthStore<S> {
    /// Open the store, rehydrating any persisted session.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing storage cannot be read.
    pub fn open(store: S, sink: SharedSink) -> Result<Self, StorageError> {
        let current_user = codec::load_one(&store, keys::CURRENT_USER)?;

        Ok(Self {
            store,
            sink,
            current_user,
        })
    }

    /// Register a visitor: stamp the record, append it to the user log,
    /// then make it the current session.
    ///
    /// Duplicate emails are accepted silently; there is no uniqueness check
    /// against earlier log entries. Registering while already authenticated
    /// simply replaces the session.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if either write fails. The log is written
    /// first; a failure between the two writes leaves the previous session
    /// in place.
    pub fn register(&mut self, new_user: NewUser) -> Result<(), StorageError> {
        let record = UserRecord {
            name: new_user.name,
            mobile: new_user.mobile,
            email: new_user.email,
            country: new_user.country,
            city: new_user.city,
            pincode: new_user.pincode,
            registered_at: Timestamp::now(),
        };

        let mut log: Vec<UserRecord> = codec::load_all(&self.store, keys::USER_LOG)?;
        log.push(record.clone());
        codec::save_all(&self.store, keys::USER_LOG, &log)?;

        codec::save_one(&self.store, keys::CURRENT_USER, &record)?;
        tracing::info!(email = %record.email, "registered user");

        self.sink.notify(Notification::success(
            "Registration Successful!",
            format!("Welcome, {}!", record.name),
        ));
        self.current_user = Some(record);

        Ok(())
    }

    /// Forget the current session. The user log is untouched; logout never
    /// deletes history.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the session key cannot be removed.
    pub fn logout(&mut self) -> Result<(), StorageError> {
        self.store.remove(keys::CURRENT_USER)?;
        self.current_user = None;

        self.sink.notify(Notification::success(
            "Logged Out",
            "You have been successfully logged out.",
        ));

        Ok(())
    }

    /// The current session's user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<&UserRecord> {
        self.current_user.as_ref()
    }

    /// Check whether a session is active.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    /// Read the full registration log, oldest first.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing storage cannot be read.
    pub fn user_log(&self) -> Result<Vec<UserRecord>, StorageError> {
        codec::load_all(&self.store, keys::USER_LOG)
    }

    /// Erase the entire registration log in one write. The caller is
    /// responsible for having confirmed this destructive intent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the log key cannot be removed.
    pub fn clear_user_log(&self) -> Result<(), StorageError> {
        self.store.remove(keys::USER_LOG)?;

        self.sink.notify(Notification::info("User log cleared."));

        Ok(())
    }
}
