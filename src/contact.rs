//! Contact submissions.
//!
//! A write-only sink: the storefront appends submissions but has no reading
//! surface for them beyond the admin CSV export. Validation happens here,
//! before the log is touched; the log itself accepts whatever it is given.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    codec,
    notify::{Notification, SharedSink},
    stamp,
    storage::{KeyValueStore, StorageError, keys},
};

/// A logged contact-form submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    /// Time-derived unique id.
    pub id: i64,
    /// Sender name.
    pub name: String,
    /// Sender email.
    pub email: String,
    /// Sender phone, may be empty.
    pub phone: String,
    /// Subject line, may be empty.
    pub subject: String,
    /// Message body.
    pub message: String,
    /// When the form was submitted. Immutable.
    pub submitted_at: Timestamp,
}

/// Contact form input, before stamping.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewContact {
    /// Sender name. Required.
    pub name: String,
    /// Sender email. Required.
    pub email: String,
    /// Sender phone.
    pub phone: String,
    /// Subject line.
    pub subject: String,
    /// Message body. Required.
    pub message: String,
}

/// Errors from the contact flow.
#[derive(Debug, Error)]
pub enum ContactError {
    /// Name, email or message was left blank.
    #[error("name, email and message are required")]
    MissingFields,

    /// The submission could not be persisted.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Append-only contact submission log.
#[derive(Debug)]
pub struct ContactLog<S> {
    store: S,
    sink: SharedSink,
    last_stamp: i64,
}

impl<S: KeyValueStore> ContactLog<S> {
    /// Open the log over the given store.
    #[must_use]
    pub fn new(store: S, sink: SharedSink) -> Self {
        Self {
            store,
            sink,
            last_stamp: 0,
        }
    }

    /// Validate and log a contact submission. Returns the stamped record.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::MissingFields`] if name, email or message is
    /// blank; the log is not touched in that case. Storage failures
    /// propagate.
    pub fn submit(&mut self, form: NewContact) -> Result<ContactSubmission, ContactError> {
        if form.name.trim().is_empty()
            || form.email.trim().is_empty()
            || form.message.trim().is_empty()
        {
            self.sink
                .notify(Notification::error("Please fill all required fields."));
            return Err(ContactError::MissingFields);
        }

        let record = ContactSubmission {
            id: stamp::next_millis(&mut self.last_stamp),
            name: form.name,
            email: form.email,
            phone: form.phone,
            subject: form.subject,
            message: form.message,
            submitted_at: Timestamp::now(),
        };

        let mut log: Vec<ContactSubmission> = codec::load_all(&self.store, keys::CONTACTS)?;
        log.push(record.clone());
        codec::save_all(&self.store, keys::CONTACTS, &log)?;
        tracing::info!(id = record.id, "logged contact submission");

        self.sink.notify(Notification::success(
            "Message sent!",
            "Thank you for reaching out. We'll get back to you soon.",
        ));

        Ok(record)
    }

    /// The full submission log, in insertion order. Used only by the admin
    /// exporter; the storefront itself never reads this back.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing storage cannot be read.
    pub fn list_all(&self) -> Result<Vec<ContactSubmission>, StorageError> {
        codec::load_all(&self.store, keys::CONTACTS)
    }
}
