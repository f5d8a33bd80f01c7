pub mod repository;

pub mod config;
pub use config::{init_db, DatabaseConfig};
