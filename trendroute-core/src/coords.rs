//! Coordinate helpers.
//!
//! Internally coordinates follow `geo` conventions (`x = longitude`,
//! `y = latitude`). Catalog files and responses carry `[lat, lon]` pairs, so
//! serialised fields route through [`lat_lon_option`].

use geo::Coord;

/// Build a coordinate from latitude and longitude in that order.
///
/// # Examples
/// ```
/// use trendroute_core::coords::lat_lon;
///
/// let istanbul = lat_lon(41.0082, 28.9784);
/// assert_eq!(istanbul.y, 41.0082);
/// assert_eq!(istanbul.x, 28.9784);
/// ```
#[must_use]
pub const fn lat_lon(lat: f64, lon: f64) -> Coord<f64> {
    Coord { x: lon, y: lat }
}

/// Serde adapter writing `Option<Coord<f64>>` as an optional `[lat, lon]`.
#[cfg(feature = "serde")]
pub mod lat_lon_option {
    use geo::Coord;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Serialise as `[lat, lon]` or `null`.
    ///
    /// # Errors
    /// Propagates serializer failures.
    pub fn serialize<S>(coord: &Option<Coord<f64>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        coord.map(|c| [c.y, c.x]).serialize(serializer)
    }

    /// Deserialise from `[lat, lon]` or `null`.
    ///
    /// # Errors
    /// Fails when the value is neither `null` nor a two-element number array.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Coord<f64>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let pair = Option::<[f64; 2]>::deserialize(deserializer)?;
        Ok(pair.map(|[lat, lon]| super::lat_lon(lat, lon)))
    }
}
