//! Checkout flow.
//!
//! Turns the current cart into an order-log entry. All validation happens
//! before any store is mutated; once validation passes, the order is
//! appended and the cart cleared, each write-through in its own right.

use thiserror::Error;

use crate::{
    auth::AuthStore,
    cart::{CartLineItem, CartStore},
    notify::{Notification, NotificationSink},
    orders::{NewOrder, OrderLog, OrderPrice, OrderRecord},
    storage::{KeyValueStore, StorageError},
};

/// Errors from the checkout flow.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout requires an active session.
    #[error("login required before checkout")]
    NotLoggedIn,

    /// There is nothing in the cart to order.
    #[error("cart is empty")]
    EmptyCart,

    /// The order could not be persisted.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Place an order for the current cart.
///
/// Builds an order record from the session user and the cart snapshot,
/// appends it to the order log, then clears the cart. Returns the logged
/// record.
///
/// # Errors
///
/// - [`CheckoutError::NotLoggedIn`]: no active session; nothing is mutated.
/// - [`CheckoutError::EmptyCart`]: the cart has no lines; nothing is mutated.
/// - [`CheckoutError::Storage`]: a persistence write failed. If the failure
///   hits the cart clear, the order has already been logged.
pub fn place_order<S: KeyValueStore>(
    cart: &mut CartStore<S>,
    auth: &AuthStore<S>,
    orders: &mut OrderLog<S>,
    sink: &dyn NotificationSink,
) -> Result<OrderRecord, CheckoutError> {
    let Some(user) = auth.current_user() else {
        sink.notify(
            Notification::error("Please login to checkout.")
                .with_description("You need to be logged in to place an order."),
        );
        return Err(CheckoutError::NotLoggedIn);
    };

    if cart.is_empty() {
        sink.notify(Notification::error("Your cart is empty."));
        return Err(CheckoutError::EmptyCart);
    }

    let summary = cart
        .items()
        .iter()
        .map(|item| format!("{} (x{})", item.name, item.quantity))
        .collect::<Vec<_>>()
        .join(", ");

    let record = orders.append(NewOrder {
        customer_name: user.name.clone(),
        item_or_service: summary,
        delivery_address: format!("{}, {}", user.city, user.pincode),
        preferred_date_time: "N/A - Product Order".to_owned(),
        price: OrderPrice::Amount(cart.total()),
        items: Some(cart.items().to_vec()),
        vehicle_info: None,
        notes: None,
        uploaded_image: None,
    })?;

    sink.notify(Notification::success(
        "Order Placed!",
        "Your order has been logged. We will contact you shortly.",
    ));

    cart.clear()?;

    Ok(record)
}

/// Build the multi-line order summary handed to the messaging collaborator.
///
/// The collaborator is responsible for URL-encoding and opening the deep
/// link; this side only guarantees a well-formed summary string.
#[must_use]
pub fn cart_summary(items: &[CartLineItem], total: rust_decimal::Decimal) -> String {
    let mut message = String::from("Hi, I'd like to place an order:\n\n");

    for item in items {
        message.push_str(&format!("*{}* (x{})\n", item.name, item.quantity));
        for (key, value) in &item.customization {
            if !value.is_empty() {
                message.push_str(&format!("  - {}: {value}\n", capitalize(key)));
            }
        }
        message.push_str(&format!("  - Price: Rs.{}\n\n", item.line_total()));
    }

    message.push_str(&format!("*Total: Rs.{total}*"));

    message
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
