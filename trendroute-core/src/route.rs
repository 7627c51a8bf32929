//! Catalog route candidates.
//!
//! A [`RouteCandidate`] describes a single-outing itinerary together with the
//! metadata the scorer consumes: city, estimated cost, and activities.

use std::fmt;
use std::str::FromStr;

use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Coarse spending band shown on route cards.
///
/// # Examples
/// ```
/// use trendroute_core::BudgetLevel;
///
/// assert_eq!(BudgetLevel::Medium.to_string(), "Medium");
/// assert_eq!("low".parse::<BudgetLevel>(), Ok(BudgetLevel::Low));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BudgetLevel {
    /// Inexpensive outings.
    Low,
    /// Mid-range outings.
    #[default]
    Medium,
    /// Premium outings.
    High,
}

impl BudgetLevel {
    /// Return the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for BudgetLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BudgetLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!("unknown budget level '{s}'")),
        }
    }
}

/// One icon/label pair in a route card's step trace.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RouteStep {
    /// Emoji or icon name.
    pub icon: String,
    /// Short label rendered under the icon.
    pub label: String,
}

impl RouteStep {
    /// Construct a step from an icon and label.
    pub fn new(icon: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            label: label.into(),
        }
    }
}

/// An immutable catalog entry that can be ranked for a user.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`; on the wire
/// they are written as a `[lat, lon]` pair.
///
/// # Examples
/// ```
/// use trendroute_core::{BudgetLevel, RouteCandidate};
///
/// let route = RouteCandidate::new("route_1", "Istanbul")
///     .with_cost(400)
///     .with_activities(["history", "culture"])
///     .with_budget_level(BudgetLevel::Low);
///
/// assert_eq!(route.estimated_cost, Some(400));
/// assert!(route.has_activity("history"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RouteCandidate {
    /// Unique catalog identifier.
    pub route_id: String,
    /// Card headline.
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: String,
    /// Card sub-headline.
    #[cfg_attr(feature = "serde", serde(default))]
    pub subtitle: String,
    /// City the route takes place in; matched against trend entries.
    pub city: String,
    /// Estimated total spend, when known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub estimated_cost: Option<u32>,
    /// Activity labels matched against user interests.
    #[cfg_attr(feature = "serde", serde(default))]
    pub activities: Vec<String>,
    /// Spending band shown on the card.
    #[cfg_attr(feature = "serde", serde(default))]
    pub budget_level: BudgetLevel,
    /// Approximate duration of the outing.
    #[cfg_attr(feature = "serde", serde(default))]
    pub approx_duration_minutes: u32,
    /// Ordered icon trace.
    #[cfg_attr(feature = "serde", serde(default))]
    pub steps: Vec<RouteStep>,
    /// Representative location.
    #[cfg_attr(
        feature = "serde",
        serde(default, with = "crate::coords::lat_lon_option")
    )]
    pub coords: Option<Coord<f64>>,
}

impl RouteCandidate {
    /// Construct a bare candidate for `city`; remaining fields take defaults.
    pub fn new(route_id: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            route_id: route_id.into(),
            title: String::new(),
            subtitle: String::new(),
            city: city.into(),
            estimated_cost: None,
            activities: Vec::new(),
            budget_level: BudgetLevel::default(),
            approx_duration_minutes: 0,
            steps: Vec::new(),
            coords: None,
        }
    }

    /// Set the title and subtitle.
    #[must_use]
    pub fn with_titles(mut self, title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        self.title = title.into();
        self.subtitle = subtitle.into();
        self
    }

    /// Set the estimated cost.
    #[must_use]
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.estimated_cost = Some(cost);
        self
    }

    /// Replace the activity list.
    #[must_use]
    pub fn with_activities<I, S>(mut self, activities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.activities = activities.into_iter().map(Into::into).collect();
        self
    }

    /// Set the budget band.
    #[must_use]
    pub fn with_budget_level(mut self, level: BudgetLevel) -> Self {
        self.budget_level = level;
        self
    }

    /// Set the approximate duration.
    #[must_use]
    pub fn with_duration_minutes(mut self, minutes: u32) -> Self {
        self.approx_duration_minutes = minutes;
        self
    }

    /// Replace the step trace.
    #[must_use]
    pub fn with_steps(mut self, steps: Vec<RouteStep>) -> Self {
        self.steps = steps;
        self
    }

    /// Set the representative location.
    #[must_use]
    pub fn with_coords(mut self, coords: Coord<f64>) -> Self {
        self.coords = Some(coords);
        self
    }

    /// Report whether `activity` is listed, using exact, case-sensitive
    /// comparison.
    #[must_use]
    pub fn has_activity(&self, activity: &str) -> bool {
        self.activities.iter().any(|listed| listed == activity)
    }
}
