//! Stock availability lookup port.

use crate::domain::{ProductId, ServiceError, Stock};

/// Port for reading the externally reported stock of a product.
///
/// Stock is the maximum purchasable quantity; the cart manager validates
/// every addition and quantity change against it.
pub trait StockService {
    fn stock(&self, product_id: ProductId) -> Result<Stock, ServiceError>;
}
