//! Score route candidates for a user profile.
//!
//! The `Scorer` trait assigns a relevance score to a
//! [`RouteCandidate`](crate::RouteCandidate) given a caller's
//! [`UserProfile`](crate::UserProfile) and the trend set in use.

use crate::{RouteCandidate, TrendingLocation, UserProfile};

/// Calculate a relevance score for a route candidate.
///
/// Higher scores indicate a better match between the route and the caller.
/// Implementations must be thread-safe (`Send` + `Sync`) so a single scorer
/// can serve concurrent requests. The method is infallible; implementers must
/// degrade missing inputs to a neutral contribution.
///
/// Implementations must:
/// - Produce finite (`f32::is_finite`) scores.
/// - Return non-negative values.
/// - Normalise results to the range `0.0..=1.0`.
///
/// Use [`Scorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use trendroute_core::{RouteCandidate, Scorer, TrendingLocation, UserProfile};
///
/// struct UnitScorer;
///
/// impl Scorer for UnitScorer {
///     fn score(
///         &self,
///         _route: &RouteCandidate,
///         _profile: &UserProfile,
///         _trends: &[TrendingLocation],
///     ) -> f32 {
///         1.0
///     }
/// }
///
/// let route = RouteCandidate::new("r", "Izmir");
/// let profile = UserProfile::new();
/// assert_eq!(UnitScorer.score(&route, &profile, &[]), 1.0);
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `route` according to `profile` and `trends`.
    fn score(
        &self,
        route: &RouteCandidate,
        profile: &UserProfile,
        trends: &[TrendingLocation],
    ) -> f32;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=1.0`.
    fn sanitise(score: f32) -> f32
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, 1.0)
    }
}

impl<S: Scorer + ?Sized> Scorer for &S {
    fn score(
        &self,
        route: &RouteCandidate,
        profile: &UserProfile,
        trends: &[TrendingLocation],
    ) -> f32 {
        (**self).score(route, profile, trends)
    }
}
