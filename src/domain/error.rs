use std::io;

use thiserror::Error;

use super::ProductId;

/// Failure talking to the remote stock/catalog service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Request never completed (connection refused, DNS, broken pipe, ...).
    #[error("request to {resource} failed: {detail}")]
    Transport { resource: String, detail: String },

    /// Service answered with a non-success status.
    #[error("{resource} returned HTTP {status}")]
    Status { resource: String, status: u16 },

    /// Response body could not be decoded into the expected shape.
    #[error("failed to decode response from {resource}: {detail}")]
    Decode { resource: String, detail: String },
}

/// Failure in the key-value persistence backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Backend file exists but is not a valid key-value document.
    #[error("malformed storage file {path}: {detail}")]
    Malformed { path: String, detail: String },
}

/// Library-wide error type for cart operations.
///
/// Every operation either fully commits or returns one of these with the
/// cart (in memory and persisted) left on its previous state.
#[derive(Debug, Error)]
pub enum CartError {
    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Desired quantity exceeds the stock reported for the product.
    #[error(
        "requested amount {requested} of product {product_id} exceeds available stock ({available})"
    )]
    StockExceeded { product_id: ProductId, requested: u32, available: u32 },

    /// Removal referenced a product that is not in the cart.
    #[error("product {0} is not in the cart")]
    NotInCart(ProductId),

    /// Remote stock or catalog lookup failed.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// Persistence backend failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Persisted cart value could not be parsed.
    #[error("malformed persisted cart: {0}")]
    MalformedCart(String),
}
