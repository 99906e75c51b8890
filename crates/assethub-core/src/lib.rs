//! # assethub-core
//!
//! Core crate for AssetHub. Contains configuration schemas, the
//! collaborator traits that do not reference domain entities (progress
//! reporting and time budgets), and the unified error system.
//!
//! This crate has **no** internal dependencies on other AssetHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
