//! Cart store.
//!
//! Owns the ordered list of cart line items. The collection is rehydrated
//! once when the store is opened and the whole snapshot is written back
//! through the key-value store on every mutation, so a crash immediately
//! after any call observes the post-mutation state on reload.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    codec,
    notify::{Notification, SharedSink},
    products::Product,
    stamp,
    storage::{KeyValueStore, StorageError, keys},
};

/// One line in the cart.
///
/// Adding the same product twice never merges lines, even with identical
/// customization; each add produces a distinct line with its own id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Session-unique line id, generated at add time.
    pub id: String,

    /// Catalog product this line was built from.
    pub product_id: String,

    /// Product display name, copied at add time.
    pub name: String,

    /// Price per unit.
    pub unit_price: Decimal,

    /// Image reference, copied at add time.
    pub image: String,

    /// Number of units; a line with zero quantity never exists.
    pub quantity: u32,

    /// Customization attributes chosen for this line (color, size,
    /// free text, uploaded asset name). May be empty.
    #[serde(default)]
    pub customization: BTreeMap<String, String>,
}

impl CartLineItem {
    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// The cart: ordered line items with write-through persistence.
#[derive(Debug)]
pub struct CartStore<S> {
    store: S,
    sink: SharedSink,
    items: Vec<CartLineItem>,
    last_stamp: i64,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Open the cart, rehydrating any persisted snapshot.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing storage cannot be read.
    pub fn open(store: S, sink: SharedSink) -> Result<Self, StorageError> {
        let items = codec::load_all(&store, keys::CART)?;

        Ok(Self {
            store,
            sink,
            items,
            last_stamp: 0,
        })
    }

    /// Add one unit of `product` to the end of the cart.
    ///
    /// Always creates a new line with a fresh id, even if an identical
    /// product/customization combination is already present. Returns the new
    /// line's id.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the snapshot cannot be persisted.
    pub fn add_item(
        &mut self,
        product: &Product,
        customization: BTreeMap<String, String>,
    ) -> Result<String, StorageError> {
        let id = format!(
            "{}-{}",
            product.id,
            stamp::next_millis(&mut self.last_stamp)
        );

        self.items.push(CartLineItem {
            id: id.clone(),
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            image: product.image.clone(),
            quantity: 1,
            customization,
        });
        self.persist()?;

        self.sink.notify(Notification::success(
            "Added to cart!",
            format!("{} has been added to your cart.", product.name),
        ));

        Ok(id)
    }

    /// Remove the line with the given id. Removing an absent id is a no-op,
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the snapshot cannot be persisted.
    pub fn remove_item(&mut self, item_id: &str) -> Result<(), StorageError> {
        self.items.retain(|item| item.id != item_id);
        self.persist()?;

        self.sink.notify(Notification::success(
            "Removed from cart",
            "Item has been removed from your cart.",
        ));

        Ok(())
    }

    /// Set the quantity of the line with the given id, preserving its
    /// position. A quantity of zero removes the line instead. Quantity edits
    /// are silent: no notification, unlike explicit add/remove.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the snapshot cannot be persisted.
    pub fn update_quantity(&mut self, item_id: &str, new_quantity: u32) -> Result<(), StorageError> {
        if new_quantity == 0 {
            return self.remove_item(item_id);
        }

        if let Some(item) = self.items.iter_mut().find(|item| item.id == item_id) {
            item.quantity = new_quantity;
        }

        self.persist()
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the snapshot cannot be persisted.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.items.clear();
        self.persist()?;

        self.sink.notify(Notification::success(
            "Cart cleared",
            "All items have been removed from your cart.",
        ));

        Ok(())
    }

    /// Sum of `unit_price * quantity` over all lines. Derived, never stored.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// Sum of quantities over all lines. Derived, never stored.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// The lines, in insertion (= display) order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Number of lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn persist(&self) -> Result<(), StorageError> {
        codec::save_all(&self.store, keys::CART, &self.items)?;
        tracing::debug!(lines = self.items.len(), "persisted cart snapshot");

        Ok(())
    }
}
