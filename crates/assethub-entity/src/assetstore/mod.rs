//! Assetstore entity, store contract, and transfer primitive contract.

pub mod model;
pub mod store;
pub mod transfer;

pub use model::{Assetstore, AssetstoreKind};
pub use store::AssetstoreStore;
pub use transfer::{AssetstoreTransfer, MoveReceipt};
