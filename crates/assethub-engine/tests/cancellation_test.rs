//! Cancellation behavior: the signal is observed at fine granularity and
//! converted to a benign outcome only at the orchestrator.

mod support;

use assethub_engine::MoveOutcome;
use support::{MemoryHub, orchestrator, mixed_store_tree};

#[tokio::test]
async fn cancellation_before_first_check_moves_nothing() {
    let hub = MemoryHub::new();
    let s = mixed_store_tree(&hub);
    hub.cancel_immediately();
    let engine = orchestrator(&hub);

    let outcome = engine
        .move_folder(&s.user, &s.folder_f, &s.store_y, false, false)
        .await
        .expect("job starts");

    assert!(matches!(outcome, MoveOutcome::Cancelled));
    assert_eq!(outcome.to_string(), "Job canceled");
    assert!(hub.moved_order().is_empty());
}

#[tokio::test]
async fn canceled_jobs_get_no_further_log_writes() {
    let hub = MemoryHub::new();
    let s = mixed_store_tree(&hub);
    hub.cancel_immediately();
    let engine = orchestrator(&hub);

    engine
        .move_folder(&s.user, &s.folder_f, &s.store_y, false, false)
        .await
        .expect("job starts");

    let job = hub.only_job();
    // Only the start line, written before the cancellation was visible.
    assert_eq!(job.log.len(), 1);
    assert!(job.log[0].contains("Starting folder move"));
    assert!(job.is_canceled());
}

#[tokio::test]
async fn mid_walk_cancellation_keeps_already_moved_files() {
    let hub = MemoryHub::new();
    let s = mixed_store_tree(&hub);
    hub.cancel_after_moves(1);
    let engine = orchestrator(&hub);

    let outcome = engine
        .move_folder(&s.user, &s.folder_f, &s.store_y, false, false)
        .await
        .expect("job starts");

    // f1 moved before the cancellation was observed; no rollback.
    assert!(matches!(outcome, MoveOutcome::Cancelled));
    assert!(outcome.receipts().is_none());
    assert_eq!(hub.moved_order(), vec![s.f1.id]);
    assert_eq!(hub.file(s.f1.id).assetstore_id, s.store_y.id);
    assert_eq!(hub.file(s.f3.id).assetstore_id, s.store_x.id);

    let job = hub.only_job();
    assert!(!job.log.iter().any(|line| line.contains("Finished")));
    assert!(!job.log.iter().any(|line| line.contains("Failed")));
}
