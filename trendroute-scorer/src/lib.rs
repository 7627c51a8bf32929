//! Heuristic route scoring for TrendRoute.
//!
//! [`HeuristicScorer`] implements the [`Scorer`](trendroute_core::Scorer)
//! seam by summing three independent terms and clamping the total into
//! `0.0..=1.0`:
//!
//! - **Trend**: the `trend_score` of the first trend entry whose city equals
//!   the route's city, scaled by [`ScoreWeights::trend`].
//! - **Budget**: when the caller's budget and the route's cost are both known
//!   and non-zero, headroom earns up to [`ScoreWeights::budget`] and
//!   overspend costs up to the same amount, proportional to the shortfall.
//! - **Interest**: the share of the caller's interests found verbatim in the
//!   route's activities, scaled by [`ScoreWeights::interest`].
//!
//! Missing inputs contribute nothing rather than failing.
//!
//! # Examples
//!
//! ```
//! use trendroute_core::{RouteCandidate, Scorer, TrendingLocation, UserProfile};
//! use trendroute_scorer::HeuristicScorer;
//!
//! let route = RouteCandidate::new("route_1", "Izmir").with_cost(250);
//! let profile = UserProfile::new().with_budget(500);
//! let trends = [TrendingLocation::new("Izmir", 75, 0.8)];
//!
//! let score = HeuristicScorer::default().score(&route, &profile, &trends);
//! assert!((score - 0.55).abs() < 1e-6);
//! ```

#![forbid(unsafe_code)]

use trendroute_core::{RouteCandidate, Scorer, TrendingLocation, UserProfile, trend_score_for};

mod error;
mod types;

pub use error::ScorerError;
pub use types::ScoreWeights;

/// Weighted trend, budget and interest scorer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeuristicScorer {
    weights: ScoreWeights,
}

impl HeuristicScorer {
    /// Build a scorer with custom weights.
    ///
    /// # Errors
    /// Returns [`ScorerError::InvalidWeights`] when the weights fail
    /// [`ScoreWeights::validate`].
    pub fn new(weights: ScoreWeights) -> Result<Self, ScorerError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// Weights in use.
    #[must_use]
    pub const fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Trend contribution for `route`.
    #[must_use]
    pub fn trend_term(&self, route: &RouteCandidate, trends: &[TrendingLocation]) -> f64 {
        trend_term(self.weights.trend, route, trends)
    }

    /// Budget contribution for `route`.
    #[must_use]
    pub fn budget_term(&self, route: &RouteCandidate, profile: &UserProfile) -> f64 {
        budget_term(self.weights.budget, profile.budget(), route.estimated_cost)
    }

    /// Interest contribution for `route`.
    #[must_use]
    pub fn interest_term(&self, route: &RouteCandidate, profile: &UserProfile) -> f64 {
        interest_term(self.weights.interest, route, profile.interests())
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "the trend term scales a trend score by its weight"
)]
fn trend_term(weight: f32, route: &RouteCandidate, trends: &[TrendingLocation]) -> f64 {
    trend_score_for(trends, &route.city).map_or(0.0, |trend| f64::from(trend) * f64::from(weight))
}

#[expect(
    clippy::float_arithmetic,
    reason = "budget fit is a ratio of cost to budget"
)]
fn budget_term(weight: f32, budget: Option<u32>, cost: Option<u32>) -> f64 {
    let (Some(budget_raw), Some(cost_raw)) = (budget, cost) else {
        return 0.0;
    };
    if budget_raw == 0 || cost_raw == 0 {
        return 0.0;
    }
    let limit = f64::from(budget_raw);
    let spend = f64::from(cost_raw);
    let scale = f64::from(weight);
    if limit >= spend {
        scale * (1.0 - spend / limit)
    } else {
        -scale * (spend - limit) / spend
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "the interest term is a weighted match ratio"
)]
fn interest_term(weight: f32, route: &RouteCandidate, interests: &[String]) -> f64 {
    if interests.is_empty() || route.activities.is_empty() {
        return 0.0;
    }
    let matches = interests
        .iter()
        .filter(|interest| route.has_activity(interest))
        .count();
    if matches == 0 {
        return 0.0;
    }
    let matched = f64::from(u32::try_from(matches).unwrap_or(u32::MAX));
    let stated = f64::from(u32::try_from(interests.len()).unwrap_or(u32::MAX));
    f64::from(weight) * matched / stated
}

impl Scorer for HeuristicScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "the final score is the sum of the three terms"
    )]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "terms are bounded by the weights, well inside f32 range"
    )]
    fn score(
        &self,
        route: &RouteCandidate,
        profile: &UserProfile,
        trends: &[TrendingLocation],
    ) -> f32 {
        let total = self.trend_term(route, trends)
            + self.budget_term(route, profile)
            + self.interest_term(route, profile);
        let score = Self::sanitise(total as f32);
        log::trace!("scored route {} at {score}", route.route_id);
        score
    }
}
