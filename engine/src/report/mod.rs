pub mod aggregate;
pub mod format;
