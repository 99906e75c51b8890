//! # assethub-entity
//!
//! Domain entity models for AssetHub, together with the store contracts
//! the move engine consumes. Every model struct represents a database
//! table row or a domain value object; all derive `Debug`, `Clone`,
//! `Serialize`, `Deserialize`, and database entities additionally derive
//! `sqlx::FromRow`.
//!
//! The store contracts live next to the models they operate on and are
//! implemented by `assethub-database` (PostgreSQL) and by the in-memory
//! test stores of the engine crate.

pub mod assetstore;
pub mod file;
pub mod folder;
pub mod item;
pub mod job;
pub mod user;
