//! File transfer configuration.

use serde::{Deserialize, Serialize};

/// Settings for moving file bytes between assetstores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferConfig {
    /// Processing-time window, in seconds, granted to a single file move.
    ///
    /// A move may run far longer than an ordinary request-scoped timeout,
    /// so the engine extends the caller's allowed processing window by
    /// this amount before each transfer.
    #[serde(default = "default_time_budget")]
    pub time_budget_seconds: u64,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            time_budget_seconds: default_time_budget(),
        }
    }
}

fn default_time_budget() -> u64 {
    86_400
}
