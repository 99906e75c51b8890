//! # assethub-database
//!
//! PostgreSQL connection management and the concrete repository
//! implementations of the AssetHub store contracts.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
