//! Storage keys for the persisted state layout.
//!
//! One JSON-encoded collection or record per key. The names are part of the
//! external interface: they match what the storefront has always written, so
//! existing state keeps loading.

/// Cart snapshot: sequence of cart line items.
pub const CART: &str = "customCraftsCart";

/// Current-session user: a single user record, absent when logged out.
pub const CURRENT_USER: &str = "customCraftsCurrentUser";

/// Append-only user registration log.
pub const USER_LOG: &str = "customCraftsUserLog";

/// Append-only order/booking log.
pub const ORDER_LOG: &str = "customCraftsOrderLog";

/// Append-only contact submission log.
pub const CONTACTS: &str = "customCraftsContacts";
