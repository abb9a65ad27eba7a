pub mod loader;
pub mod sales_store;
