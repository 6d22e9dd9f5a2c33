mod filesystem_store;
mod memory_store;
mod shop_api_http;

pub use filesystem_store::FilesystemKeyValueStore;
pub use memory_store::MemoryKeyValueStore;
pub use shop_api_http::HttpShopApi;
