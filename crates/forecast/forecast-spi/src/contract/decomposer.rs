//! Decomposer trait definition

use crate::{Capability, DecompositionResult, Result};

/// Splits a series into trend, seasonal and residual components.
pub trait Decomposer: Send + Sync {
    /// Whether [`decompose`](Decomposer::decompose) can run on
    /// `history_len` observations with cycle length `period`.
    fn capability(&self, history_len: usize, period: usize) -> Capability;

    /// Decompose `data` with seasonal cycle length `period`.
    fn decompose(&self, data: &[f64], period: usize) -> Result<DecompositionResult>;
}
