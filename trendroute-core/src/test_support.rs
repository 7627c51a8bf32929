//! Deterministic helpers for unit and behaviour tests.

use std::collections::HashMap;

use crate::{
    RouteCandidate, RouteDetail, Scorer, StepDetail, TrendingLocation, UserProfile,
};

/// `Scorer` returning preset scores keyed by route identifier.
///
/// Unknown routes score `0.0`.
#[derive(Debug, Clone, Default)]
pub struct FixedScorer {
    scores: HashMap<String, f32>,
}

impl FixedScorer {
    /// Create a scorer from `(route_id, score)` pairs.
    pub fn new<I, S>(scores: I) -> Self
    where
        I: IntoIterator<Item = (S, f32)>,
        S: Into<String>,
    {
        Self {
            scores: scores.into_iter().map(|(id, s)| (id.into(), s)).collect(),
        }
    }
}

impl Scorer for FixedScorer {
    fn score(&self, route: &RouteCandidate, _: &UserProfile, _: &[TrendingLocation]) -> f32 {
        self.scores.get(&route.route_id).copied().unwrap_or(0.0)
    }
}

/// Build a three-leg walking and bus itinerary for `route_id`.
#[must_use]
pub fn sample_detail(route_id: &str) -> RouteDetail {
    let leg = |step_number, mode: &str, minutes, metres| StepDetail {
        step_number,
        mode: mode.to_owned(),
        instruction: format!("Leg {step_number}"),
        duration_minutes: minutes,
        distance_m: metres,
        detail: None,
        icon: None,
        line_info: None,
        stops: None,
    };
    RouteDetail {
        route_id: route_id.to_owned(),
        title: format!("Detail for {route_id}"),
        transport_type: "Public transport".to_owned(),
        start_point: "Hotel".to_owned(),
        end_point: "Museum".to_owned(),
        total_duration_minutes: 20,
        total_distance_km: 4.95,
        summary: "Total time: 20 min, total distance: 4.95 km".to_owned(),
        steps: vec![leg(1, "walk", 5, 300), leg(2, "bus", 12, 4500), leg(3, "walk", 3, 150)],
        final_message: "You have arrived!".to_owned(),
        polyline: None,
    }
}
