//! Immutable catalog snapshots and their publication handle.
//!
//! Requests read a whole [`CatalogSnapshot`] through [`CatalogHandle`]. A
//! reload builds a fresh snapshot and swaps it in atomically, so a request
//! that already holds the previous `Arc` keeps scoring against consistent
//! data.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{RouteCandidate, RouteDetail, RouteDetailStore, TrendingLocation};

/// One published version of the reference data.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CatalogSnapshot {
    /// Known trend entries in source order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub trending_locations: Vec<TrendingLocation>,
    /// Rankable routes in catalog order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub routes: Vec<RouteCandidate>,
    /// Detailed itineraries keyed by route identifier.
    #[cfg_attr(feature = "serde", serde(default))]
    pub route_details: BTreeMap<String, RouteDetail>,
}

impl CatalogSnapshot {
    /// Find a route candidate by identifier.
    #[must_use]
    pub fn route(&self, route_id: &str) -> Option<&RouteCandidate> {
        self.routes.iter().find(|route| route.route_id == route_id)
    }
}

impl RouteDetailStore for CatalogSnapshot {
    fn route_detail(&self, route_id: &str) -> Option<RouteDetail> {
        self.route_details.get(route_id).cloned()
    }
}

/// Shared, swappable pointer to the current [`CatalogSnapshot`].
///
/// # Examples
/// ```
/// use trendroute_core::{CatalogHandle, CatalogSnapshot, RouteCandidate};
///
/// let handle = CatalogHandle::new(CatalogSnapshot::default());
/// let before = handle.snapshot();
///
/// let mut next = CatalogSnapshot::default();
/// next.routes.push(RouteCandidate::new("r1", "Izmir"));
/// handle.replace(next);
///
/// assert!(before.routes.is_empty());
/// assert_eq!(handle.snapshot().routes.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct CatalogHandle {
    current: RwLock<Arc<CatalogSnapshot>>,
}

impl CatalogHandle {
    /// Publish `snapshot` as the initial version.
    #[must_use]
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self {
            current: RwLock::new(Arc::new(snapshot)),
        }
    }

    /// Return the current version.
    #[must_use]
    pub fn snapshot(&self) -> Arc<CatalogSnapshot> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Publish a new version and return the one it replaced.
    pub fn replace(&self, snapshot: CatalogSnapshot) -> Arc<CatalogSnapshot> {
        let next = Arc::new(snapshot);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        log::debug!(
            "publishing catalog snapshot with {} routes and {} trends",
            next.routes.len(),
            next.trending_locations.len()
        );
        std::mem::replace(&mut *guard, next)
    }
}

impl From<CatalogSnapshot> for CatalogHandle {
    fn from(snapshot: CatalogSnapshot) -> Self {
        Self::new(snapshot)
    }
}

impl RouteDetailStore for CatalogHandle {
    fn route_detail(&self, route_id: &str) -> Option<RouteDetail> {
        self.snapshot().route_detail(route_id)
    }
}
