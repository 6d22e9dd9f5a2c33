//! Product catalog lookup port.

use crate::domain::{Product, ProductId, ServiceError};

/// Port for reading catalog metadata of a product.
///
/// Consulted only when a product enters the cart for the first time;
/// subsequent quantity changes reuse the stored entry.
pub trait CatalogService {
    fn product(&self, product_id: ProductId) -> Result<Product, ServiceError>;
}
