//! Collaborator traits defined in `assethub-core` and implemented by
//! other crates or by the embedding application.

pub mod budget;
pub mod progress;

pub use budget::{NoopBudget, TimeBudget};
pub use progress::{NullProgress, ProgressContext, ProgressSink};
