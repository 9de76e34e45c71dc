//! Order/booking log.
//!
//! One append-only collection covers both product-cart checkouts and service
//! bookings; the records share a shape and differ only in which optional
//! fields they use. Appends are read-modify-write over the whole collection
//! with no concurrency guard: two handles appending at once will lose one of
//! the records, which is accepted last-write-wins behavior for this storage
//! model, not a bug to paper over here.

use std::fmt;

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    cart::CartLineItem,
    codec,
    notify::{Notification, SharedSink},
    stamp,
    storage::{KeyValueStore, StorageError, keys},
};

/// Price on an order: a concrete amount, or a quote-pending sentinel for
/// service bookings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderPrice {
    /// A concrete amount.
    Amount(Decimal),
    /// A free-form label such as "Quote Pending".
    Quote(String),
}

impl OrderPrice {
    /// The quote-pending sentinel used by service bookings.
    #[must_use]
    pub fn quote_pending() -> Self {
        Self::Quote("Quote Pending".to_owned())
    }
}

impl fmt::Display for OrderPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Amount(amount) => write!(f, "{amount}"),
            Self::Quote(label) => f.write_str(label),
        }
    }
}

/// Payment state of an order. Orders are created `Pending`; any later
/// transition is driven externally (manual follow-up), never by this store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    /// Awaiting payment; the state every order is created in.
    #[default]
    Pending,
    /// Settled externally.
    Paid,
}

/// A logged order or service booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    /// Time-derived unique id.
    pub id: i64,

    /// Customer display name.
    pub customer_name: String,

    /// Human-readable summary: "Name (xQty), ..." for carts, the service
    /// title for bookings.
    pub item_or_service: String,

    /// Delivery address, or an "N/A" sentinel for services.
    pub delivery_address: String,

    /// Preferred slot for bookings, or an "N/A" sentinel for product orders.
    pub preferred_date_time: String,

    /// Order price; quote-pending for bookings.
    pub price: OrderPrice,

    /// Payment state, `Pending` at creation.
    pub payment_status: PaymentStatus,

    /// When the record was appended. Immutable.
    pub created_at: Timestamp,

    /// Snapshot of the cart lines at checkout time (product orders only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<CartLineItem>>,

    /// Vehicle details (bookings only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_info: Option<String>,

    /// Free-form notes (bookings only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Uploaded reference image, by file name only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_image: Option<String>,
}

/// An order before the log stamps it with an id and creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    /// Customer display name.
    pub customer_name: String,
    /// Human-readable summary line.
    pub item_or_service: String,
    /// Delivery address or "N/A" sentinel.
    pub delivery_address: String,
    /// Preferred slot or "N/A" sentinel.
    pub preferred_date_time: String,
    /// Price or quote sentinel.
    pub price: OrderPrice,
    /// Cart snapshot, for product orders.
    pub items: Option<Vec<CartLineItem>>,
    /// Vehicle details, for bookings.
    pub vehicle_info: Option<String>,
    /// Free-form notes, for bookings.
    pub notes: Option<String>,
    /// Uploaded image file name, for bookings.
    pub uploaded_image: Option<String>,
}

/// Append-only order/booking log.
///
/// The log holds no in-memory copy: every operation reads or writes the
/// persisted collection directly.
#[derive(Debug)]
pub struct OrderLog<S> {
    store: S,
    sink: SharedSink,
    last_stamp: i64,
}

impl<S: KeyValueStore> OrderLog<S> {
    /// Open the log over the given store.
    #[must_use]
    pub fn new(store: S, sink: SharedSink) -> Self {
        Self {
            store,
            sink,
            last_stamp: 0,
        }
    }

    /// Stamp `order` with an id and creation time and append it.
    ///
    /// Read-modify-write over the whole collection; no cross-handle guard.
    /// Returns the stamped record.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the collection cannot be read back or
    /// rewritten.
    pub fn append(&mut self, order: NewOrder) -> Result<OrderRecord, StorageError> {
        let record = OrderRecord {
            id: stamp::next_millis(&mut self.last_stamp),
            customer_name: order.customer_name,
            item_or_service: order.item_or_service,
            delivery_address: order.delivery_address,
            preferred_date_time: order.preferred_date_time,
            price: order.price,
            payment_status: PaymentStatus::Pending,
            created_at: Timestamp::now(),
            items: order.items,
            vehicle_info: order.vehicle_info,
            notes: order.notes,
            uploaded_image: order.uploaded_image,
        };

        let mut log: Vec<OrderRecord> = codec::load_all(&self.store, keys::ORDER_LOG)?;
        log.push(record.clone());
        codec::save_all(&self.store, keys::ORDER_LOG, &log)?;
        tracing::info!(id = record.id, entries = log.len(), "appended order");

        Ok(record)
    }

    /// The full log, in insertion order.
    ///
    /// Insertion order and `created_at` order coincide as long as nothing
    /// external reorders the backing value; the log never re-sorts.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing storage cannot be read.
    pub fn list_all(&self) -> Result<Vec<OrderRecord>, StorageError> {
        codec::load_all(&self.store, keys::ORDER_LOG)
    }

    /// Number of logged orders.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing storage cannot be read.
    pub fn len(&self) -> Result<usize, StorageError> {
        Ok(self.list_all()?.len())
    }

    /// Check whether the log is empty.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing storage cannot be read.
    pub fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.len()? == 0)
    }

    /// Erase the entire log in one write. This is the only deletion path;
    /// individual records are never removed. The caller is responsible for
    /// having confirmed this destructive intent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the log key cannot be removed.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(keys::ORDER_LOG)?;
        tracing::info!("cleared order log");

        self.sink.notify(Notification::info("Order log cleared."));

        Ok(())
    }
}
