mod catalog_service;
mod key_value_store;
mod stock_service;

pub use catalog_service::CatalogService;
pub use key_value_store::KeyValueStore;
pub use stock_service::StockService;
