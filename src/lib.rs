//! rocketcart: client-side shopping cart manager with stock validation and
//! durable key-value persistence.
//!
//! The cart is an ordered, id-unique list of items mirrored to storage under
//! a single key. Additions and quantity changes are validated against a
//! remote stock service; consumers mutate the cart only through
//! [`CartManager`] operations and decide themselves how to present failures.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

use adapters::{FilesystemKeyValueStore, HttpShopApi};

pub use app::{CartManager, Config};
pub use domain::{CART_STORAGE_KEY, Cart, CartError, CartItem, Product, ProductId, Stock};

/// Cart manager wired to the default HTTP and filesystem adapters.
pub type DefaultCartManager = CartManager<HttpShopApi, HttpShopApi, FilesystemKeyValueStore>;

/// Open a cart manager against the configured shop API and storage directory,
/// hydrated from any previously persisted cart.
pub fn open(config: &Config) -> Result<DefaultCartManager, CartError> {
    let api = HttpShopApi::new(config.api_url.clone())?;
    let store = FilesystemKeyValueStore::new(config);
    CartManager::hydrate(api.clone(), api, store)
}
