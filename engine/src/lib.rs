// Engine library root.
pub mod config;
pub mod data;
pub mod detect;
pub mod error;
pub mod report;
pub mod resolve;
pub mod services;
