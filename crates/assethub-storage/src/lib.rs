//! Assetstore transfer backends.
//!
//! Implementations of [`assethub_entity::assetstore::AssetstoreTransfer`]
//! that physically relocate file bytes between assetstores. The move
//! engine only sees the trait; which backend sits behind it is wiring.

pub mod local;

pub use local::LocalAssetstoreTransfer;
