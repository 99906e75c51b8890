//! Background job dispatch at the queue boundary.
//!
//! The queue and scheduler themselves live outside this system; this
//! crate provides the seam they plug into — a [`JobHandler`] trait, a
//! [`JobExecutor`] that dispatches by job type, and the handler that
//! turns a queued `folder_move` request into a run of the move engine.

pub mod executor;
pub mod jobs;

pub use executor::{JobExecutionError, JobExecutor, JobHandler};
pub use jobs::folder_move::FolderMoveJobHandler;
