//! Optional candidate refinement before scoring.
//!
//! A [`Refiner`] may reorder, filter or enrich the candidate list for a
//! profile, for example by consulting a language model. The engine always
//! holds one; [`IdentityRefiner`] is the default and changes nothing.

use crate::{RouteCandidate, UserProfile};

/// Adjust the candidate set for a profile before it is scored.
///
/// # Examples
/// ```
/// use trendroute_core::{Refiner, RouteCandidate, UserProfile};
///
/// struct CityFilter(&'static str);
///
/// impl Refiner for CityFilter {
///     fn refine(&self, _: &UserProfile, candidates: Vec<RouteCandidate>) -> Vec<RouteCandidate> {
///         candidates.into_iter().filter(|r| r.city == self.0).collect()
///     }
/// }
///
/// let kept = CityFilter("Izmir").refine(
///     &UserProfile::new(),
///     vec![RouteCandidate::new("a", "Izmir"), RouteCandidate::new("b", "Antalya")],
/// );
/// assert_eq!(kept.len(), 1);
/// ```
pub trait Refiner: Send + Sync {
    /// Return the candidates to score for `profile`.
    fn refine(&self, profile: &UserProfile, candidates: Vec<RouteCandidate>) -> Vec<RouteCandidate>;
}

/// Refiner that returns its input unchanged.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IdentityRefiner;

impl Refiner for IdentityRefiner {
    fn refine(&self, _profile: &UserProfile, candidates: Vec<RouteCandidate>) -> Vec<RouteCandidate> {
        candidates
    }
}
