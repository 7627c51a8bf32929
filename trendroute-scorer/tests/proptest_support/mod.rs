//! Proptest strategies for heuristic scorer property tests.
//!
//! Cities and activity labels are drawn from small vocabularies so that trend
//! and interest matches occur often enough to exercise every scoring term.

use proptest::prelude::*;
use proptest::sample::select;
use trendroute_core::{RouteCandidate, TrendingLocation, UserProfile};

/// Cities used by generated routes and trends.
pub const CITIES: [&str; 4] = ["Istanbul", "Cappadocia", "Antalya", "Izmir"];

/// City that never appears in generated trend sets.
pub const UNTRENDED_CITY: &str = "Nowhere";

/// Activity and interest vocabulary.
pub const LABELS: [&str; 6] = ["history", "culture", "food", "nature", "sea", "shopping"];

/// Strategy for a list of distinct-or-repeated vocabulary labels.
pub fn labels_strategy(max_len: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(select(LABELS.to_vec()).prop_map(str::to_owned), 0..=max_len)
}

/// Strategy for a trend set over [`CITIES`], possibly with repeated cities.
pub fn trends_strategy() -> impl Strategy<Value = Vec<TrendingLocation>> {
    proptest::collection::vec(
        (select(CITIES.to_vec()), 0_u32..=100, 0.0_f32..=1.0_f32)
            .prop_map(|(city, popularity, score)| TrendingLocation::new(city, popularity, score)),
        0..=6,
    )
}

/// Strategy for a route candidate located in one of [`CITIES`].
pub fn route_strategy() -> impl Strategy<Value = RouteCandidate> {
    (
        select(CITIES.to_vec()),
        proptest::option::of(0_u32..=5_000),
        labels_strategy(4),
    )
        .prop_map(|(city, cost, activities)| {
            let mut route = RouteCandidate::new("generated", city).with_activities(activities);
            route.estimated_cost = cost;
            route
        })
}

/// Strategy for a user profile with optional budget and a few interests.
pub fn profile_strategy() -> impl Strategy<Value = UserProfile> {
    (proptest::option::of(0_u32..=5_000), labels_strategy(3)).prop_map(|(budget, interests)| {
        budget
            .into_iter()
            .fold(UserProfile::new().with_interests(interests), UserProfile::with_budget)
    })
}
