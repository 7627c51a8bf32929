//! Tunable weights for the heuristic scorer.
#![forbid(unsafe_code)]

use crate::ScorerError;

/// Maximum contribution of each scoring term.
///
/// The trend term ranges over `0.0..=trend`, the budget term over
/// `-budget..=budget` and the interest term over `0.0..=interest`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScoreWeights {
    /// Multiplier applied to the matching city's trend score.
    pub trend: f32,
    /// Largest reward for headroom, and largest penalty for overspend.
    pub budget: f32,
    /// Reward when every stated interest matches an activity.
    pub interest: f32,
}

impl ScoreWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ScorerError::InvalidWeights`] when any value is negative or
    /// not finite, or when all of them are zero.
    pub fn validate(self) -> Result<Self, ScorerError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(ScorerError::InvalidWeights)
        }
    }

    const fn is_valid(self) -> bool {
        self.has_finite_values() && self.has_non_negative_values() && self.has_non_zero_total()
    }

    const fn has_finite_values(self) -> bool {
        self.trend.is_finite() && self.budget.is_finite() && self.interest.is_finite()
    }

    const fn has_non_negative_values(self) -> bool {
        self.trend >= 0.0_f32 && self.budget >= 0.0_f32 && self.interest >= 0.0_f32
    }

    const fn has_non_zero_total(self) -> bool {
        self.trend > 0.0_f32 || self.budget > 0.0_f32 || self.interest > 0.0_f32
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            trend: 0.5_f32,
            budget: 0.3_f32,
            interest: 0.2_f32,
        }
    }
}
