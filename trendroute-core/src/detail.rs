//! Step-by-step route itineraries and their lookup seam.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One leg of a detailed itinerary.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StepDetail {
    /// One-based position in the itinerary.
    pub step_number: u32,
    /// Travel mode, e.g. `walk`, `bus` or `ferry`.
    pub mode: String,
    /// Instruction shown on the timeline.
    pub instruction: String,
    /// Time spent on this leg.
    pub duration_minutes: u32,
    /// Distance covered on this leg.
    pub distance_m: u32,
    /// Extra guidance.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub detail: Option<String>,
    /// Emoji or icon name.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub icon: Option<String>,
    /// Public transport line.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub line_info: Option<String>,
    /// Number of stops ridden.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub stops: Option<u32>,
}

/// Expanded itinerary for a single route, fetched by identifier.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RouteDetail {
    /// Identifier shared with the matching
    /// [`RouteCandidate`](crate::RouteCandidate).
    pub route_id: String,
    /// Timeline heading.
    pub title: String,
    /// Dominant transport type.
    pub transport_type: String,
    /// Where the itinerary begins.
    pub start_point: String,
    /// Where the itinerary ends.
    pub end_point: String,
    /// Sum of step durations as advertised.
    pub total_duration_minutes: u32,
    /// Total distance as advertised.
    pub total_distance_km: f64,
    /// One-line summary.
    pub summary: String,
    /// Ordered legs.
    pub steps: Vec<StepDetail>,
    /// Message shown on arrival.
    pub final_message: String,
    /// Encoded path geometry.
    #[cfg_attr(feature = "serde", serde(default))]
    pub polyline: Option<String>,
}

/// Keyed lookup of route details.
///
/// `None` is the expected outcome for an unknown identifier and must not be
/// conflated with a failure of the backing store.
///
/// # Examples
/// ```
/// use trendroute_core::{RouteDetail, RouteDetailStore};
///
/// struct Empty;
///
/// impl RouteDetailStore for Empty {
///     fn route_detail(&self, _route_id: &str) -> Option<RouteDetail> {
///         None
///     }
/// }
///
/// assert!(Empty.route_detail("missing").is_none());
/// ```
pub trait RouteDetailStore: Send + Sync {
    /// Return the detail for `route_id`, or `None` when it is unknown.
    fn route_detail(&self, route_id: &str) -> Option<RouteDetail>;
}

impl RouteDetail {
    /// Sum the per-step durations.
    ///
    /// Catalog data advertises `total_duration_minutes` separately; this is
    /// what the steps actually add up to.
    #[must_use]
    pub fn step_minutes(&self) -> u32 {
        self.steps
            .iter()
            .fold(0_u32, |acc, step| acc.saturating_add(step.duration_minutes))
    }
}
