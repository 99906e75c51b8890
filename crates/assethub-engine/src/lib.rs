//! # assethub-engine
//!
//! The folder-to-assetstore move engine: walks a folder tree depth-first,
//! selects the files that still need moving, relocates them one at a
//! time, and keeps an auditable append-only log on the job record, while
//! checking for external cancellation before every folder and every file.
//!
//! Cancellation is data, not control flow: every layer returns a tagged
//! result ([`Gate`], [`MoveStep`], [`WalkOutcome`]) and the
//! [`MoveOrchestrator`] is the single place the cancellation path stops
//! propagating, as the benign [`MoveOutcome::Cancelled`] outcome.
//!
//! One move occupies one worker; files move strictly one at a time, so
//! the result list and the job log share exact traversal order and the
//! worst-case delay between a cancellation request and the traversal
//! stopping is one file-move duration.

pub mod gate;
pub mod lifecycle;
pub mod mover;
pub mod orchestrator;
pub mod walker;

pub use gate::{CancellationGate, Gate};
pub use lifecycle::JobLifecycle;
pub use mover::{FileMover, MoveStep};
pub use orchestrator::{MoveOrchestrator, MoveOutcome};
pub use walker::{TreeWalker, WalkOutcome};
