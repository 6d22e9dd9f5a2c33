//! String key-value persistence port.

use crate::domain::StoreError;

/// Port for durable string-keyed storage, the localStorage analog.
///
/// The cart manager keeps one key holding the full serialized cart and
/// overwrites it wholesale after every successful mutation. Backends are
/// synchronous and assumed non-blocking.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
