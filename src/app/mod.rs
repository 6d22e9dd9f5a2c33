pub mod cart_manager;
pub mod config;

pub use cart_manager::CartManager;
pub use config::Config;
