//! The qualifying-file predicate for a folder move.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::File;

/// Selects the files that still need moving.
///
/// A file qualifies when it is not already in the target assetstore,
/// and — when `ignore_imported` is set — when it was not imported by
/// reference. The same predicate is applied at every level of the
/// traversal and to every file source (attached or owned), whether it
/// runs as a SQL `WHERE` clause or in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveFilter {
    /// The assetstore files are being consolidated into.
    pub target_assetstore_id: Uuid,
    /// Skip files whose bytes were ingested by reference.
    pub ignore_imported: bool,
}

impl MoveFilter {
    /// Build the predicate for a move into `target_assetstore_id`.
    pub fn new(target_assetstore_id: Uuid, ignore_imported: bool) -> Self {
        Self {
            target_assetstore_id,
            ignore_imported,
        }
    }

    /// Check whether `file` needs moving under this filter.
    pub fn matches(&self, file: &File) -> bool {
        if file.assetstore_id == self.target_assetstore_id {
            return false;
        }
        if self.ignore_imported && file.imported {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn file(assetstore_id: Uuid, imported: bool) -> File {
        File {
            id: Uuid::new_v4(),
            name: "report.pdf".to_string(),
            assetstore_id,
            item_id: None,
            attached_to_id: None,
            imported,
            size_bytes: 1024,
            storage_path: "ab/cd/report.pdf".to_string(),
            mime_type: Some("application/pdf".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_skips_files_already_in_target() {
        let target = Uuid::new_v4();
        let filter = MoveFilter::new(target, false);
        assert!(!filter.matches(&file(target, false)));
        assert!(filter.matches(&file(Uuid::new_v4(), false)));
    }

    #[test]
    fn test_imported_files_skipped_only_when_requested() {
        let target = Uuid::new_v4();
        let other = Uuid::new_v4();
        assert!(!MoveFilter::new(target, true).matches(&file(other, true)));
        assert!(MoveFilter::new(target, false).matches(&file(other, true)));
    }
}
