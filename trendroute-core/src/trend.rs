//! Trending locations and top-N selection.

use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A city's current popularity, used to boost routes located there.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrendingLocation {
    /// City name, compared exactly against [`RouteCandidate::city`](crate::RouteCandidate::city).
    pub city: String,
    /// Ordering key for [`select_top_trending`].
    pub popularity: u32,
    /// Boost in `0.0..=1.0` applied by the scorer.
    pub trend_score: f32,
    /// Short explanation shown alongside the trend.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub reason: Option<String>,
    /// City centre.
    #[cfg_attr(
        feature = "serde",
        serde(default, with = "crate::coords::lat_lon_option")
    )]
    pub coords: Option<Coord<f64>>,
}

impl TrendingLocation {
    /// Construct a trend entry without display metadata.
    ///
    /// # Examples
    /// ```
    /// use trendroute_core::TrendingLocation;
    ///
    /// let trend = TrendingLocation::new("Antalya", 82, 0.82);
    /// assert_eq!(trend.city, "Antalya");
    /// assert!(trend.reason.is_none());
    /// ```
    pub fn new(city: impl Into<String>, popularity: u32, trend_score: f32) -> Self {
        Self {
            city: city.into(),
            popularity,
            trend_score,
            reason: None,
            coords: None,
        }
    }

    /// Attach an explanation.
    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Attach the city centre.
    #[must_use]
    pub fn with_coords(mut self, coords: Coord<f64>) -> Self {
        self.coords = Some(coords);
        self
    }
}

/// Return the `n` most popular trend entries, most popular first.
///
/// Entries with equal popularity keep their input order. Fewer than `n`
/// entries are returned when the source is shorter.
///
/// # Examples
/// ```
/// use trendroute_core::{TrendingLocation, select_top_trending};
///
/// let trends = vec![
///     TrendingLocation::new("Izmir", 75, 0.75),
///     TrendingLocation::new("Cappadocia", 95, 0.95),
///     TrendingLocation::new("Antalya", 82, 0.82),
/// ];
/// let top = select_top_trending(&trends, 2);
/// let cities: Vec<_> = top.iter().map(|t| t.city.as_str()).collect();
/// assert_eq!(cities, ["Cappadocia", "Antalya"]);
/// ```
#[must_use]
pub fn select_top_trending(trends: &[TrendingLocation], n: usize) -> Vec<TrendingLocation> {
    let mut sorted = trends.to_vec();
    sorted.sort_by(|a, b| b.popularity.cmp(&a.popularity));
    sorted.truncate(n);
    sorted
}

/// Look up the trend score of the first entry whose city equals `city`.
///
/// Later entries for the same city are ignored.
#[must_use]
pub fn trend_score_for(trends: &[TrendingLocation], city: &str) -> Option<f32> {
    trends
        .iter()
        .find(|trend| trend.city == city)
        .map(|trend| trend.trend_score)
}
