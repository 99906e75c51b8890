//! Concrete repository implementations of the AssetHub store contracts.

pub mod assetstore;
pub mod file;
pub mod folder;
pub mod job;
pub mod user;

pub use assetstore::AssetstoreRepository;
pub use file::FileRepository;
pub use folder::FolderRepository;
pub use job::JobRepository;
pub use user::UserRepository;
