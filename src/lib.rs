//! CustomCrafts
//!
//! CustomCrafts is the persisted-state layer of a custom-apparel and vehicle
//! customisation storefront: a synchronous key-value store with a JSON
//! record codec over it, and cart, auth, order-log and contact stores with
//! derived views, CSV export and admin table rendering on top.

pub mod admin;
pub mod auth;
pub mod booking;
pub mod cart;
pub mod checkout;
pub mod codec;
pub mod config;
pub mod contact;
pub mod export;
pub mod fixtures;
pub mod notify;
pub mod orders;
pub mod prelude;
pub mod products;
pub mod storage;
pub mod utils;

mod stamp;
