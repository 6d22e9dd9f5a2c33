//! The cart manager: add/remove/update against stock, mirrored to storage.

use crate::domain::{CART_STORAGE_KEY, Cart, CartError, CartItem, ProductId};
use crate::ports::{CatalogService, KeyValueStore, StockService};

/// Shopping cart state container.
///
/// Owns the in-memory cart exclusively; every mutation validates against
/// the stock port, persists the full serialized cart through the key-value
/// port, and only then replaces the in-memory state. A failed operation
/// leaves both copies on their previous state.
#[derive(Debug)]
pub struct CartManager<S: StockService, C: CatalogService, K: KeyValueStore> {
    stock: S,
    catalog: C,
    store: K,
    storage_key: String,
    cart: Cart,
}

impl<S: StockService, C: CatalogService, K: KeyValueStore> CartManager<S, C, K> {
    /// Create a manager hydrated from the default storage key.
    ///
    /// An absent key yields an empty cart; a present but unparseable value
    /// is an error rather than a silently discarded cart.
    pub fn hydrate(stock: S, catalog: C, store: K) -> Result<Self, CartError> {
        Self::hydrate_with_key(stock, catalog, store, CART_STORAGE_KEY)
    }

    /// Create a manager hydrated from a custom storage key.
    pub fn hydrate_with_key(
        stock: S,
        catalog: C,
        store: K,
        storage_key: impl Into<String>,
    ) -> Result<Self, CartError> {
        let storage_key = storage_key.into();
        let cart = match store.get(&storage_key)? {
            Some(raw) => {
                Cart::from_json(&raw).map_err(|e| CartError::MalformedCart(e.to_string()))?
            }
            None => Cart::new(),
        };
        Ok(Self { stock, catalog, store, storage_key, cart })
    }

    /// Current cart contents.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add one unit of a product to the cart.
    ///
    /// First addition fetches catalog metadata and appends an entry with
    /// amount 1; repeat additions bump the existing entry. Rejected with
    /// [`CartError::StockExceeded`] when the resulting amount would pass
    /// the reported stock.
    pub fn add_product(&mut self, product_id: ProductId) -> Result<(), CartError> {
        let requested = self.cart.amount_of(product_id).unwrap_or(0).saturating_add(1);

        let stock = self.stock.stock(product_id)?;
        if requested > stock.amount {
            return Err(CartError::StockExceeded {
                product_id,
                requested,
                available: stock.amount,
            });
        }

        let mut candidate = self.cart.clone();
        if candidate.contains(product_id) {
            candidate.set_amount(product_id, requested);
        } else {
            let product = self.catalog.product(product_id)?;
            candidate.push(CartItem::new(product, 1));
        }

        self.commit(candidate)
    }

    /// Remove a product from the cart entirely.
    ///
    /// An absent id is an error, unlike [`update_product_amount`].
    ///
    /// [`update_product_amount`]: Self::update_product_amount
    pub fn remove_product(&mut self, product_id: ProductId) -> Result<(), CartError> {
        if !self.cart.contains(product_id) {
            return Err(CartError::NotInCart(product_id));
        }

        let mut candidate = self.cart.clone();
        candidate.remove(product_id);
        self.commit(candidate)
    }

    /// Set the absolute quantity of a product already in the cart.
    ///
    /// `amount <= 0` is a silent no-op with no remote call. An id absent
    /// from the cart is also a silent no-op after the stock check; this
    /// asymmetry with [`remove_product`](Self::remove_product) is kept
    /// deliberately.
    pub fn update_product_amount(
        &mut self,
        product_id: ProductId,
        amount: i64,
    ) -> Result<(), CartError> {
        if amount <= 0 {
            return Ok(());
        }

        let stock = self.stock.stock(product_id)?;
        if amount > i64::from(stock.amount) {
            return Err(CartError::StockExceeded {
                product_id,
                // Saturated; only used for the report.
                requested: u32::try_from(amount).unwrap_or(u32::MAX),
                available: stock.amount,
            });
        }
        let requested = u32::try_from(amount).unwrap_or(u32::MAX);

        if !self.cart.contains(product_id) {
            return Ok(());
        }

        let mut candidate = self.cart.clone();
        candidate.set_amount(product_id, requested);
        self.commit(candidate)
    }

    /// Empty the cart and persist the empty list.
    pub fn clear(&mut self) -> Result<(), CartError> {
        let mut candidate = self.cart.clone();
        candidate.clear();
        self.commit(candidate)
    }

    /// Persist the candidate cart, then swap it in.
    fn commit(&mut self, candidate: Cart) -> Result<(), CartError> {
        let serialized =
            candidate.to_json().map_err(|e| CartError::MalformedCart(e.to_string()))?;
        self.store.set(&self.storage_key, &serialized)?;
        self.cart = candidate;
        Ok(())
    }
}
