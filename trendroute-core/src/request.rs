//! Suggestion requests and responses.
//!
//! [`SuggestRequest`] mirrors what a caller submits; it is validated before
//! any scoring happens so the ranking core only ever sees in-contract input.

use chrono::NaiveDate;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{ResultCap, RouteCard, TrendingLocation};

/// Raw request for route suggestions.
///
/// # Examples
/// ```rust
/// use trendroute_core::SuggestRequest;
///
/// let request = SuggestRequest::new("a calm day by the sea")
///     .with_budget(600)
///     .with_interests(["nature"]);
/// assert!(request.validate().is_ok());
/// assert_eq!(request.max_results, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SuggestRequest {
    /// Optional caller identifier echoed back in the response.
    #[cfg_attr(feature = "serde", serde(default))]
    pub user_id: Option<String>,
    /// Free-text description of the desired outing.
    pub intent: String,
    /// First day of the trip.
    #[cfg_attr(feature = "serde", serde(default))]
    pub start_date: Option<NaiveDate>,
    /// Last day of the trip, inclusive.
    #[cfg_attr(feature = "serde", serde(default))]
    pub end_date: Option<NaiveDate>,
    /// Spending limit.
    #[cfg_attr(feature = "serde", serde(default))]
    pub budget: Option<u32>,
    /// Interest labels compared against route activities.
    #[cfg_attr(feature = "serde", serde(default))]
    pub interests: Vec<String>,
    /// Number of cards to return, `1..=10`.
    #[cfg_attr(feature = "serde", serde(default = "default_max_results"))]
    pub max_results: u8,
}

#[cfg(feature = "serde")]
const fn default_max_results() -> u8 {
    ResultCap::DEFAULT.get_u8()
}

/// Detailed validation failures for [`SuggestRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestRequestValidationError {
    /// `max_results` fell outside `1..=10`.
    #[error("max_results must be between {min} and {max}, got {got}")]
    InvalidMaxResults {
        /// Value supplied by the caller.
        got: u8,
        /// Smallest accepted value.
        min: u8,
        /// Largest accepted value.
        max: u8,
    },
    /// The date range ends before it starts.
    #[error("end date {end} is before start date {start}")]
    EndBeforeStart {
        /// First day supplied.
        start: NaiveDate,
        /// Last day supplied.
        end: NaiveDate,
    },
}

/// Errors returned by [`Recommender::suggest`](crate::Recommender::suggest).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestError {
    /// Request parameters violated the caller contract.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] SuggestRequestValidationError),
}

impl SuggestRequest {
    /// Start a request with the given intent text and default settings.
    pub fn new(intent: impl Into<String>) -> Self {
        Self {
            user_id: None,
            intent: intent.into(),
            start_date: None,
            end_date: None,
            budget: None,
            interests: Vec::new(),
            max_results: ResultCap::DEFAULT.get_u8(),
        }
    }

    /// Attach a caller identifier.
    #[must_use]
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Set the spending limit.
    #[must_use]
    pub fn with_budget(mut self, budget: u32) -> Self {
        self.budget = Some(budget);
        self
    }

    /// Replace the interest labels.
    #[must_use]
    pub fn with_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interests = interests.into_iter().map(Into::into).collect();
        self
    }

    /// Set an inclusive date range.
    #[must_use]
    pub fn with_dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Set the number of cards to return.
    #[must_use]
    pub fn with_max_results(mut self, max_results: u8) -> Self {
        self.max_results = max_results;
        self
    }

    /// Validate the request, reporting the specific failure.
    ///
    /// # Errors
    /// Returns [`SuggestRequestValidationError::InvalidMaxResults`] when the
    /// result cap is out of range and
    /// [`SuggestRequestValidationError::EndBeforeStart`] for inverted ranges.
    pub fn validate_detailed(&self) -> Result<(), SuggestRequestValidationError> {
        ResultCap::new(self.max_results)?;
        crate::profile::trip_length_days(self.start_date, self.end_date)?;
        Ok(())
    }

    /// Validate the request.
    ///
    /// # Errors
    /// Returns [`SuggestError::InvalidRequest`] wrapping the detailed error.
    pub fn validate(&self) -> Result<(), SuggestError> {
        self.validate_detailed().map_err(SuggestError::from)
    }
}

/// Ranked suggestions together with the trend set used to produce them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SuggestResponse {
    /// Caller identifier copied from the request.
    pub user_id: Option<String>,
    /// Cards in descending score order.
    pub suggestions: Vec<RouteCard>,
    /// Trend entries consulted while scoring.
    pub used_trends: Vec<TrendingLocation>,
}
