//! Admin viewer support.
//!
//! Renders the user and order logs as tables for terminal display. The
//! viewer only consumes the stores' read APIs; the sole mutation it may
//! trigger is a bulk log clear, and obtaining confirmation for that is the
//! caller's job.

use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Rows},
};

use crate::{auth::UserRecord, orders::OrderRecord};

/// Render the registration log as a table, oldest first.
#[must_use]
pub fn render_user_log(users: &[UserRecord]) -> String {
    if users.is_empty() {
        return "No users yet.".to_owned();
    }

    let mut builder = Builder::default();
    builder.push_record(["Name", "Email", "Mobile", "Location", "Registered"]);

    for user in users {
        builder.push_record([
            user.name.clone(),
            user.email.clone(),
            user.mobile.clone(),
            format!("{}, {}, {}", user.city, user.pincode, user.country),
            user.registered_at.to_string(),
        ]);
    }

    style(builder)
}

/// Render the order/booking log as a table, oldest first.
#[must_use]
pub fn render_order_log(orders: &[OrderRecord]) -> String {
    if orders.is_empty() {
        return "No orders yet.".to_owned();
    }

    let mut builder = Builder::default();
    builder.push_record(["Customer", "Order/Service", "Price", "Status", "Created"]);

    for order in orders {
        builder.push_record([
            order.customer_name.clone(),
            order.item_or_service.clone(),
            order.price.to_string(),
            format!("{:?}", order.payment_status),
            order.created_at.to_string(),
        ]);
    }

    style(builder)
}

fn style(builder: Builder) -> String {
    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Alignment::center());

    table.to_string()
}
