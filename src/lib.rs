//! Facade crate for the TrendRoute suggestion engine.
//!
//! Re-exports the core domain types and, behind feature flags, the
//! heuristic scorer and the embedded catalog.

#![forbid(unsafe_code)]

pub use trendroute_core::{
    ActivityError, ActivitySink, BudgetLevel, CallToAction, CatalogHandle, CatalogSnapshot,
    EngineConfig, Feedback, IdentityRefiner, IntentParser, KeywordIntentParser, LoggingSink,
    ParsedIntent, Rating, Receipt, ReceiptStatus, Recommender, Refiner, ResultCap, RouteCandidate,
    RouteCard, RouteDetail, RouteDetailStore, RouteStep, ScoredRoute, Scorer, StepDetail,
    SuggestError, SuggestRequest, SuggestRequestValidationError, SuggestResponse,
    SuggestionEngine, Theme, TrendingLocation, TripIntent, TripLength, UserProfile,
};

#[cfg(feature = "scorer-heuristic")]
pub use trendroute_scorer::{HeuristicScorer, ScoreWeights, ScorerError};

#[cfg(feature = "builtin-catalog")]
pub use trendroute_data::{CatalogError, builtin_catalog, load_catalog};

/// Build an engine over the embedded catalog with the default scorer.
///
/// # Errors
/// Returns [`CatalogError`] if the embedded catalog fails validation.
///
/// # Examples
/// ```
/// use trendroute::{Recommender, SuggestRequest};
///
/// let engine = trendroute::builtin_engine().expect("embedded catalog");
/// let response = engine
///     .suggest(&SuggestRequest::new("a calm day").with_max_results(1))
///     .expect("valid request");
/// assert_eq!(response.suggestions.len(), 1);
/// ```
#[cfg(all(feature = "scorer-heuristic", feature = "builtin-catalog"))]
pub fn builtin_engine() -> Result<SuggestionEngine<HeuristicScorer>, CatalogError> {
    let catalog = CatalogHandle::new(builtin_catalog()?);
    Ok(SuggestionEngine::new(
        HeuristicScorer::default(),
        std::sync::Arc::new(catalog),
    ))
}
