//! Core domain types and ranking logic for the TrendRoute engine.
//!
//! The crate turns a [`SuggestRequest`] into ranked [`RouteCard`]s:
//! a [`UserProfile`] is derived from the request, the most popular
//! [`TrendingLocation`]s are selected, an injected [`Refiner`] may adjust the
//! candidate list, and a [`Scorer`] orders the catalog's [`RouteCandidate`]s.
//! Scoring implementations live in separate crates; this crate only defines
//! the seam and the deterministic ranking around it.
//!
//! Reference data is held in an immutable [`CatalogSnapshot`] published
//! through a [`CatalogHandle`], so concurrent requests never observe a
//! partially updated catalog.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod activity;
mod card;
mod catalog;
pub mod coords;
mod detail;
mod engine;
mod intent;
mod profile;
mod rank;
mod refine;
mod request;
mod route;
mod scorer;
mod theme;
mod trend;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use activity::{
    ActivityError, ActivitySink, Feedback, LoggingSink, Rating, Receipt, ReceiptStatus,
};
pub use card::{CallToAction, RouteCard, SELECT_ROUTE_ACTION, SELECT_ROUTE_LABEL, duration_text};
pub use catalog::{CatalogHandle, CatalogSnapshot};
pub use detail::{RouteDetail, RouteDetailStore, StepDetail};
pub use engine::{EngineConfig, Recommender, SuggestionEngine};
pub use intent::{
    DEFAULT_CITIES, IntentParser, KeywordIntentParser, ParsedIntent, TripIntent, TripLength,
};
pub use profile::{ResultCap, UserProfile, trip_length_days};
pub use rank::{ScoredRoute, rank_and_format, rank_candidates};
pub use refine::{IdentityRefiner, Refiner};
pub use request::{SuggestError, SuggestRequest, SuggestRequestValidationError, SuggestResponse};
pub use route::{BudgetLevel, RouteCandidate, RouteStep};
pub use scorer::Scorer;
pub use theme::Theme;
pub use trend::{TrendingLocation, select_top_trending, trend_score_for};
