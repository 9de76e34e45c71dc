//! CustomCrafts prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    auth::{AuthStore, NewUser, UserRecord},
    booking::{AVAILABLE_TIMES, BookingError, BookingRequest, available_dates, book_service},
    cart::{CartLineItem, CartStore},
    checkout::{CheckoutError, cart_summary, place_order},
    codec,
    config::{ConfigError, StoreConfig},
    contact::{ContactError, ContactLog, ContactSubmission, NewContact},
    export::{ExportError, to_csv},
    fixtures::{FixtureError, load_catalog},
    notify::{
        NoopSink, Notification, NotificationSink, RecordingSink, Severity, SharedSink, TracingSink,
    },
    orders::{NewOrder, OrderLog, OrderPrice, OrderRecord, PaymentStatus},
    products::{Catalog, Product, Service},
    storage::{FileStore, KeyValueStore, MemoryStore, StorageError, keys},
};
