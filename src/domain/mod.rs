pub mod cart;
pub mod error;
pub mod product;

pub use cart::{CART_STORAGE_KEY, Cart, CartItem};
pub use error::{CartError, ServiceError, StoreError};
pub use product::{Product, ProductId, Stock};
