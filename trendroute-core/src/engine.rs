//! Request-level orchestration of profile extraction, trend selection,
//! refinement and ranking.

use std::sync::Arc;

use crate::{
    CatalogHandle, IdentityRefiner, Refiner, RouteDetail, RouteDetailStore, Scorer, SuggestError,
    SuggestRequest, SuggestResponse, TrendingLocation, UserProfile, rank_and_format,
    select_top_trending,
};

/// Tunables for [`SuggestionEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Number of trend entries consulted per request.
    pub trend_count: usize,
}

impl EngineConfig {
    /// Trend entries consulted when not configured otherwise.
    pub const DEFAULT_TREND_COUNT: usize = 4;
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            trend_count: Self::DEFAULT_TREND_COUNT,
        }
    }
}

/// Produce ranked suggestions for a request.
pub trait Recommender: Send + Sync {
    /// Validate `request` and return the ranked cards with the trends used.
    ///
    /// # Errors
    /// Returns [`SuggestError::InvalidRequest`] when the request violates the
    /// caller contract.
    fn suggest(&self, request: &SuggestRequest) -> Result<SuggestResponse, SuggestError>;
}

/// Default [`Recommender`] over a shared catalog.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use trendroute_core::{
///     CatalogHandle, CatalogSnapshot, Recommender, RouteCandidate, Scorer, SuggestRequest,
///     SuggestionEngine, TrendingLocation, UserProfile,
/// };
///
/// struct Flat;
///
/// impl Scorer for Flat {
///     fn score(&self, _: &RouteCandidate, _: &UserProfile, _: &[TrendingLocation]) -> f32 {
///         0.5
///     }
/// }
///
/// let mut snapshot = CatalogSnapshot::default();
/// snapshot.routes.push(RouteCandidate::new("r1", "Izmir"));
/// let engine = SuggestionEngine::new(Flat, Arc::new(CatalogHandle::new(snapshot)));
///
/// let response = engine
///     .suggest(&SuggestRequest::new("anything").with_user_id("u1"))
///     .expect("valid request");
/// assert_eq!(response.suggestions.len(), 1);
/// assert_eq!(response.user_id.as_deref(), Some("u1"));
/// ```
#[derive(Debug)]
pub struct SuggestionEngine<S, R = IdentityRefiner> {
    scorer: S,
    refiner: R,
    catalog: Arc<CatalogHandle>,
    config: EngineConfig,
}

impl<S: Scorer> SuggestionEngine<S, IdentityRefiner> {
    /// Build an engine with the identity refiner and default settings.
    pub fn new(scorer: S, catalog: Arc<CatalogHandle>) -> Self {
        Self {
            scorer,
            refiner: IdentityRefiner,
            catalog,
            config: EngineConfig::default(),
        }
    }
}

impl<S: Scorer, R: Refiner> SuggestionEngine<S, R> {
    /// Swap in a different refiner.
    pub fn with_refiner<R2: Refiner>(self, refiner: R2) -> SuggestionEngine<S, R2> {
        SuggestionEngine {
            scorer: self.scorer,
            refiner,
            catalog: self.catalog,
            config: self.config,
        }
    }

    /// Replace the engine settings.
    #[must_use]
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Current settings.
    pub const fn config(&self) -> EngineConfig {
        self.config
    }

    /// Shared catalog handle.
    pub const fn catalog(&self) -> &Arc<CatalogHandle> {
        &self.catalog
    }

    /// The configured scorer.
    pub const fn scorer(&self) -> &S {
        &self.scorer
    }

    /// The trend entries a request would consult right now.
    pub fn trending(&self) -> Vec<TrendingLocation> {
        let snapshot = self.catalog.snapshot();
        select_top_trending(&snapshot.trending_locations, self.config.trend_count)
    }
}

impl<S: Scorer, R: Refiner> Recommender for SuggestionEngine<S, R> {
    fn suggest(&self, request: &SuggestRequest) -> Result<SuggestResponse, SuggestError> {
        let profile = UserProfile::from_request(request).inspect_err(|err| {
            log::warn!("rejecting suggestion request: {err}");
        })?;
        log::info!(
            "derived profile: budget={:?} interests={} duration_days={} max_results={}",
            profile.budget(),
            profile.interests().len(),
            profile.duration_days(),
            profile.max_results().get()
        );

        let snapshot = self.catalog.snapshot();
        let trends = select_top_trending(&snapshot.trending_locations, self.config.trend_count);
        log::info!("selected {} trending locations", trends.len());

        let candidates = self.refiner.refine(&profile, snapshot.routes.clone());
        log::debug!("scoring {} candidates", candidates.len());

        let suggestions = rank_and_format(
            &self.scorer,
            &candidates,
            &profile,
            &trends,
            profile.max_results().get(),
        );
        log::info!("produced {} route suggestions", suggestions.len());

        Ok(SuggestResponse {
            user_id: request.user_id.clone(),
            suggestions,
            used_trends: trends,
        })
    }
}

impl<S: Scorer, R: Refiner> RouteDetailStore for SuggestionEngine<S, R> {
    fn route_detail(&self, route_id: &str) -> Option<RouteDetail> {
        let detail = self.catalog.route_detail(route_id);
        if detail.is_none() {
            log::debug!("no detail for route {route_id}");
        }
        detail
    }
}
