//! Block context handed to every hook.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Read-only view of the block being processed.
///
/// Hooks must not read wall-clock time; `time` is the block header time agreed
/// on by consensus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockContext {
    height: u64,
    time: DateTime<Utc>,
    chain_id: String,
}

impl BlockContext {
    pub fn new(height: u64, time: DateTime<Utc>, chain_id: impl Into<String>) -> Self {
        Self {
            height,
            time,
            chain_id: chain_id.into(),
        }
    }

    pub fn height(&self) -> u64 {
        self.height
    }

    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }

    pub fn chain_id(&self) -> &str {
        &self.chain_id
    }
}
