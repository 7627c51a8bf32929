//! Display-ready route cards.

use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{BudgetLevel, RouteStep, ScoredRoute};

/// Label on the card's primary button.
pub const SELECT_ROUTE_LABEL: &str = "Select Route";
/// Action identifier carried by the card's primary button.
pub const SELECT_ROUTE_ACTION: &str = "select_route";

/// Button descriptor attached to every card.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CallToAction {
    /// Button text.
    pub label: String,
    /// Action identifier understood by the client.
    pub action: String,
    /// Route the action applies to.
    pub route_id: String,
}

impl CallToAction {
    /// Build the "select this route" action for `route_id`.
    pub fn select_route(route_id: impl Into<String>) -> Self {
        Self {
            label: SELECT_ROUTE_LABEL.to_owned(),
            action: SELECT_ROUTE_ACTION.to_owned(),
            route_id: route_id.into(),
        }
    }
}

/// Ranked, display-formatted projection of a route candidate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RouteCard {
    /// Catalog identifier.
    pub route_id: String,
    /// Headline.
    pub title: String,
    /// Sub-headline.
    pub subtitle: String,
    /// Icon trace.
    pub steps: Vec<RouteStep>,
    /// Human-readable duration, see [`duration_text`].
    pub approx_duration_text: String,
    /// Raw duration.
    pub approx_duration_minutes: u32,
    /// Spending band.
    pub budget_level: BudgetLevel,
    /// Estimated spend, when known.
    pub estimated_cost: Option<u32>,
    /// Activity labels.
    pub activities: Vec<String>,
    /// Representative location.
    #[cfg_attr(
        feature = "serde",
        serde(default, with = "crate::coords::lat_lon_option")
    )]
    pub coords: Option<Coord<f64>>,
    /// Relevance score in `0.0..=1.0`.
    pub score: f32,
    /// Informational explanation naming the city and budget band.
    pub reason: String,
    /// Primary button.
    pub cta: CallToAction,
}

impl RouteCard {
    /// Project a scored route into a card.
    ///
    /// # Examples
    /// ```
    /// use trendroute_core::{RouteCandidate, RouteCard, ScoredRoute};
    ///
    /// let scored = ScoredRoute {
    ///     route: RouteCandidate::new("route_1", "Izmir").with_duration_minutes(300),
    ///     score: 0.6,
    /// };
    /// let card = RouteCard::from_scored(scored);
    /// assert_eq!(card.approx_duration_text, "Approx. 5 Hours");
    /// assert_eq!(card.reason, "Trending: Izmir, Budget: Medium");
    /// assert_eq!(card.cta.route_id, "route_1");
    /// ```
    #[must_use]
    pub fn from_scored(scored: ScoredRoute) -> Self {
        let ScoredRoute { route, score } = scored;
        Self {
            approx_duration_text: duration_text(route.approx_duration_minutes),
            reason: format!("Trending: {}, Budget: {}", route.city, route.budget_level),
            cta: CallToAction::select_route(route.route_id.clone()),
            route_id: route.route_id,
            title: route.title,
            subtitle: route.subtitle,
            steps: route.steps,
            approx_duration_minutes: route.approx_duration_minutes,
            budget_level: route.budget_level,
            estimated_cost: route.estimated_cost,
            activities: route.activities,
            coords: route.coords,
            score,
        }
    }
}

/// Render a duration for display.
///
/// Durations of an hour or more are shown in whole hours with the remainder
/// dropped; shorter ones are shown in minutes.
///
/// # Examples
/// ```
/// use trendroute_core::duration_text;
///
/// assert_eq!(duration_text(125), "Approx. 2 Hours");
/// assert_eq!(duration_text(45), "Approx. 45 Minutes");
/// ```
#[must_use]
pub fn duration_text(minutes: u32) -> String {
    if minutes >= 60 {
        let hours = minutes / 60;
        let unit = if hours == 1 { "Hour" } else { "Hours" };
        format!("Approx. {hours} {unit}")
    } else {
        let unit = if minutes == 1 { "Minute" } else { "Minutes" };
        format!("Approx. {minutes} {unit}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RouteCandidate, coords::lat_lon};
    use rstest::rstest;

    #[rstest]
    #[case(0, "Approx. 0 Minutes")]
    #[case(1, "Approx. 1 Minute")]
    #[case(59, "Approx. 59 Minutes")]
    #[case(60, "Approx. 1 Hour")]
    #[case(119, "Approx. 1 Hour")]
    #[case(125, "Approx. 2 Hours")]
    #[case(420, "Approx. 7 Hours")]
    fn duration_text_truncates_to_whole_hours(#[case] minutes: u32, #[case] expected: &str) {
        assert_eq!(duration_text(minutes), expected);
    }

    #[rstest]
    fn card_carries_route_fields() {
        let route = RouteCandidate::new("route_islands_001", "Istanbul")
            .with_titles("Islands Escape", "A calm island trip")
            .with_cost(600)
            .with_activities(["nature", "sea"])
            .with_budget_level(BudgetLevel::Medium)
            .with_duration_minutes(420)
            .with_steps(vec![RouteStep::new("⛴️", "Ferry")])
            .with_coords(lat_lon(40.8761, 29.0897));
        let card = RouteCard::from_scored(ScoredRoute {
            route: route.clone(),
            score: 0.42,
        });

        assert_eq!(card.route_id, route.route_id);
        assert_eq!(card.title, "Islands Escape");
        assert_eq!(card.subtitle, "A calm island trip");
        assert_eq!(card.steps, route.steps);
        assert_eq!(card.estimated_cost, Some(600));
        assert_eq!(card.activities, ["nature", "sea"]);
        assert_eq!(card.coords, route.coords);
        assert_eq!(card.score, 0.42);
        assert_eq!(card.approx_duration_text, "Approx. 7 Hours");
        assert_eq!(card.reason, "Trending: Istanbul, Budget: Medium");
        assert_eq!(
            card.cta,
            CallToAction {
                label: "Select Route".to_owned(),
                action: "select_route".to_owned(),
                route_id: "route_islands_001".to_owned(),
            }
        );
    }
}
