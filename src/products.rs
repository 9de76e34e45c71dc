//! Products & services.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog product that can be customized and added to the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Stable identifier, referenced by cart line items.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Unit price.
    pub price: Decimal,

    /// Image reference (a path or asset name, never binary content).
    pub image: String,

    /// Colors offered by the customizer.
    #[serde(default)]
    pub colors: Vec<String>,

    /// Sizes offered by the customizer.
    #[serde(default)]
    pub sizes: Vec<String>,
}

/// A bookable service (wraps, tinting, detailing and the like).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Stable identifier.
    pub id: String,

    /// Display title, used as the order summary line for bookings.
    pub title: String,

    /// Short description.
    #[serde(default)]
    pub description: String,

    /// Price label; services are usually quoted, not priced.
    #[serde(default)]
    pub price_label: String,
}

/// The storefront catalog: products plus bookable services.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Products offered by the storefront.
    #[serde(default)]
    pub products: Vec<Product>,

    /// Services offered by the storefront.
    #[serde(default)]
    pub services: Vec<Service>,
}

impl Catalog {
    /// Find a product by id.
    #[must_use]
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Find a service by id.
    #[must_use]
    pub fn service(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    /// Check if the catalog has no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty() && self.services.is_empty()
    }
}
