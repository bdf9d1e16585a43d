//! Reconciliation settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CheckConfig {
    /// Worker threads for per-project checks. `0` uses the available
    /// parallelism, `1` checks sequentially on the calling thread.
    #[serde(default)]
    pub jobs: usize,
}
