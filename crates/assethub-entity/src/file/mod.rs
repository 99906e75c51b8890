//! File entity, move filter, and store contract.

pub mod filter;
pub mod model;
pub mod store;

pub use filter::MoveFilter;
pub use model::File;
pub use store::FileStore;
