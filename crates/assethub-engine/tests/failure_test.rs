//! Failure behavior: missing metadata and transfer errors are recorded
//! on the job and surface as an absent result.

mod support;

use std::sync::Arc;
use std::time::Duration;

use assethub_core::config::transfer::TransferConfig;
use assethub_core::error::ErrorKind;
use assethub_core::traits::{NoopBudget, NullProgress, ProgressContext};
use assethub_entity::job::{CreateJob, JobStatus, JobStore};
use assethub_engine::{
    CancellationGate, FileMover, JobLifecycle, MoveOutcome, TreeWalker,
};
use support::{MemoryHub, orchestrator, mixed_store_tree};

#[tokio::test]
async fn folder_without_metadata_item_fails_the_whole_move() {
    let hub = MemoryHub::new();
    let user = hub.add_user("mover");
    let target = hub.add_assetstore("target");
    let root = hub.add_folder(None, "root", &user);
    // No metadata item on root.
    let engine = orchestrator(&hub);

    let outcome = engine
        .move_folder(&user, &root, &target, false, false)
        .await
        .expect("job starts");

    assert!(matches!(outcome, MoveOutcome::Failed));
    assert!(hub.moved_order().is_empty());

    let job = hub.only_job();
    assert_eq!(job.status, JobStatus::Error);
    let last = job.log.last().expect("failure logged");
    assert!(last.contains("Failed with MISSING_METADATA"));
    assert!(last.contains(&root.id.to_string()));
}

#[tokio::test]
async fn missing_metadata_below_the_root_keeps_earlier_moves() {
    let hub = MemoryHub::new();
    let user = hub.add_user("mover");
    let source = hub.add_assetstore("source");
    let target = hub.add_assetstore("target");

    let root = hub.add_folder(None, "root", &user);
    let root_meta = hub.add_metadata_item(&root);
    let moved = hub.add_attached_file(&root_meta, "moved", &source, false);
    hub.add_folder(Some(root.id), "broken", &user);

    let engine = orchestrator(&hub);
    let outcome = engine
        .move_folder(&user, &root, &target, false, false)
        .await
        .expect("job starts");

    // The root's file moved before the broken child aborted the walk.
    assert!(matches!(outcome, MoveOutcome::Failed));
    assert_eq!(hub.moved_order(), vec![moved.id]);
    assert_eq!(hub.file(moved.id).assetstore_id, target.id);
    assert_eq!(hub.only_job().status, JobStatus::Error);
}

#[tokio::test]
async fn walker_reports_missing_metadata_as_an_error() {
    let hub = MemoryHub::new();
    let user = hub.add_user("mover");
    let target = hub.add_assetstore("target");
    let root = hub.add_folder(None, "root", &user);

    let job = hub
        .create(CreateJob {
            job_type: "folder_move".to_string(),
            title: "test".to_string(),
            payload: serde_json::json!({}),
            created_by: None,
        })
        .await
        .expect("job created");

    let gate = CancellationGate::new(hub.clone());
    let lifecycle = JobLifecycle::new(hub.clone());
    let mover = FileMover::new(
        gate.clone(),
        lifecycle,
        hub.clone(),
        Arc::new(NoopBudget),
        Duration::from_secs(TransferConfig::default().time_budget_seconds),
    );
    let walker = TreeWalker::new(gate, hub.clone(), hub.clone(), mover);
    let progress = ProgressContext::open(Arc::new(NullProgress), false, "test");

    let err = walker
        .walk(&root, &user, &target, false, &progress, job.id)
        .await
        .expect_err("metadata is mandatory");
    assert_eq!(err.kind, ErrorKind::MissingMetadata);
}

#[tokio::test]
async fn transfer_error_marks_the_job_failed() {
    let hub = MemoryHub::new();
    let s = mixed_store_tree(&hub);
    hub.fail_move_of(s.f3.id);
    let engine = orchestrator(&hub);

    let outcome = engine
        .move_folder(&s.user, &s.folder_f, &s.store_y, false, false)
        .await
        .expect("job starts");

    assert!(matches!(outcome, MoveOutcome::Failed));
    // f1 moved before f3 failed; it stays moved.
    assert_eq!(hub.moved_order(), vec![s.f1.id]);

    let job = hub.only_job();
    assert_eq!(job.status, JobStatus::Error);
    let last = job.log.last().expect("failure logged");
    assert!(last.contains("Failed with TRANSFER: disk full"));
}
