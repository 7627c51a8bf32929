//! Error types raised while configuring the heuristic scorer.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised when constructing a [`HeuristicScorer`](crate::HeuristicScorer).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScorerError {
    /// A weight was negative or non-finite, or all weights were zero.
    #[error("score weights must be finite, non-negative and not all zero")]
    InvalidWeights,
}
