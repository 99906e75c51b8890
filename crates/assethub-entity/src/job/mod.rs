//! Background job entity and store contract.

pub mod model;
pub mod status;
pub mod store;

pub use model::{CreateJob, Job};
pub use status::JobStatus;
pub use store::{JobStore, JobUpdate};
