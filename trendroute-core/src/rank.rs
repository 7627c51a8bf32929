//! Score, order and truncate route candidates.

use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{RouteCandidate, RouteCard, Scorer, TrendingLocation, UserProfile};

/// A candidate paired with its score for one ranking pass.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoredRoute {
    /// The scored candidate.
    pub route: RouteCandidate,
    /// Relevance in `0.0..=1.0`.
    pub score: f32,
}

/// Score every candidate, order by descending score and keep the best
/// `max_results`.
///
/// The sort is stable: candidates with equal scores keep their input order,
/// so two runs over the same input always agree.
///
/// # Examples
/// ```
/// use trendroute_core::{RouteCandidate, Scorer, TrendingLocation, UserProfile, rank_candidates};
///
/// struct CostScorer;
///
/// impl Scorer for CostScorer {
///     fn score(&self, route: &RouteCandidate, _: &UserProfile, _: &[TrendingLocation]) -> f32 {
///         if route.estimated_cost.unwrap_or(0) < 500 { 0.9 } else { 0.1 }
///     }
/// }
///
/// let candidates = vec![
///     RouteCandidate::new("dear", "X").with_cost(900),
///     RouteCandidate::new("cheap", "X").with_cost(100),
/// ];
/// let ranked = rank_candidates(&CostScorer, &candidates, &UserProfile::new(), &[], 1);
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked[0].route.route_id, "cheap");
/// ```
#[must_use]
pub fn rank_candidates<S: Scorer>(
    scorer: &S,
    candidates: &[RouteCandidate],
    profile: &UserProfile,
    trends: &[TrendingLocation],
    max_results: usize,
) -> Vec<ScoredRoute> {
    let mut scored: Vec<ScoredRoute> = candidates
        .iter()
        .map(|route| ScoredRoute {
            score: scorer.score(route, profile, trends),
            route: route.clone(),
        })
        .collect();
    // `partial_cmp` keeps 0.0 and -0.0 equal so ties stay in catalog order.
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored.truncate(max_results);
    scored
}

/// Rank candidates and project the survivors into display cards.
///
/// An empty candidate list yields an empty card list.
#[must_use]
pub fn rank_and_format<S: Scorer>(
    scorer: &S,
    candidates: &[RouteCandidate],
    profile: &UserProfile,
    trends: &[TrendingLocation],
    max_results: usize,
) -> Vec<RouteCard> {
    rank_candidates(scorer, candidates, profile, trends, max_results)
        .into_iter()
        .map(RouteCard::from_scored)
        .collect()
}
