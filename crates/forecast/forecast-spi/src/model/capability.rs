//! Strategy capability descriptor.

use serde::{Deserialize, Serialize};

/// Whether a strategy can run on a given history, and what it returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capability {
    pub available: bool,
    pub min_history: usize,
    /// Produces lower/upper bounds per step
    pub intervals: bool,
}

impl Capability {
    pub fn for_history(history_len: usize, min_history: usize, intervals: bool) -> Self {
        Self {
            available: history_len >= min_history,
            min_history,
            intervals,
        }
    }
}
