use serde::{Deserialize, Serialize};

use super::{Product, ProductId};

/// Storage key under which the serialized cart lives.
///
/// Kept identical to the original front-end so a previously persisted
/// cart hydrates unchanged.
pub const CART_STORAGE_KEY: &str = "@RocketShoes:cart";

/// A product placed in the cart together with its chosen quantity.
///
/// Serializes with the same camelCase keys as [`Product`] plus `amount`,
/// matching the persisted wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub image_url: String,
    pub amount: u32,
}

impl CartItem {
    /// Build a cart entry from catalog metadata and a quantity.
    pub fn new(product: Product, amount: u32) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            image_url: product.image_url,
            amount,
        }
    }
}

/// Ordered collection of cart items, unique by product id.
///
/// Insertion order is preserved; quantity updates keep an item in place.
/// `Cart` is a plain data structure — stock validation and persistence
/// are the manager's job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Current quantity for a product, if present.
    pub fn amount_of(&self, id: ProductId) -> Option<u32> {
        self.get(id).map(|item| item.amount)
    }

    /// Append a new item. The caller guarantees the id is not already present.
    pub fn push(&mut self, item: CartItem) {
        debug_assert!(!self.contains(item.id));
        self.items.push(item);
    }

    /// Set the quantity of an existing item in place.
    ///
    /// Returns `false` if the id is not in the cart.
    pub fn set_amount(&mut self, id: ProductId, amount: u32) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.amount = amount;
                true
            }
            None => false,
        }
    }

    /// Remove the item with the given id.
    ///
    /// Returns `false` if the id is not in the cart.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() < before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of `price * amount` over all items.
    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.price * f64::from(item.amount)).sum()
    }

    /// Serialize to the persisted JSON array form.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.items)
    }

    /// Parse the persisted JSON array form.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let items: Vec<CartItem> = serde_json::from_str(raw)?;
        Ok(Self { items })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, amount: u32) -> CartItem {
        CartItem {
            id: ProductId(id),
            name: format!("product-{id}"),
            price: 10.0,
            image_url: String::new(),
            amount,
        }
    }

    #[test]
    fn push_preserves_insertion_order() {
        let mut cart = Cart::new();
        cart.push(item(2, 1));
        cart.push(item(1, 1));
        cart.push(item(3, 1));

        let ids: Vec<u64> = cart.items().iter().map(|i| i.id.0).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn set_amount_updates_in_place() {
        let mut cart = Cart::new();
        cart.push(item(1, 1));
        cart.push(item(2, 1));

        assert!(cart.set_amount(ProductId(1), 4));
        assert_eq!(cart.amount_of(ProductId(1)), Some(4));

        let ids: Vec<u64> = cart.items().iter().map(|i| i.id.0).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn set_amount_reports_missing_id() {
        let mut cart = Cart::new();
        assert!(!cart.set_amount(ProductId(9), 2));
    }

    #[test]
    fn remove_reports_whether_id_was_present() {
        let mut cart = Cart::new();
        cart.push(item(1, 1));

        assert!(cart.remove(ProductId(1)));
        assert!(!cart.remove(ProductId(1)));
        assert!(cart.is_empty());
    }

    #[test]
    fn clear_removes_all_items() {
        let mut cart = Cart::new();
        cart.push(item(1, 2));
        cart.push(item(2, 1));

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.to_json().unwrap(), "[]");
    }

    #[test]
    fn total_sums_price_times_amount() {
        let mut cart = Cart::new();
        cart.push(CartItem { price: 19.9, ..item(1, 2) });
        cart.push(CartItem { price: 5.0, ..item(2, 3) });

        assert!((cart.total() - (19.9 * 2.0 + 5.0 * 3.0)).abs() < 1e-9);
    }

    #[test]
    fn json_round_trip_preserves_items_and_order() {
        let mut cart = Cart::new();
        cart.push(item(5, 2));
        cart.push(item(3, 1));

        let json = cart.to_json().unwrap();
        let parsed = Cart::from_json(&json).unwrap();
        assert_eq!(parsed, cart);
    }

    #[test]
    fn from_json_accepts_original_front_end_payload() {
        let raw = r#"[{"id":1,"name":"Tênis","price":139.9,"imageUrl":"https://cdn/1.jpg","amount":2}]"#;
        let cart = Cart::from_json(raw).unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.amount_of(ProductId(1)), Some(2));
    }

    #[test]
    fn from_json_rejects_garbage() {
        assert!(Cart::from_json("not json").is_err());
        assert!(Cart::from_json(r#"{"id":1}"#).is_err());
    }
}
