//! Normalised user profiles derived from suggestion requests.
//!
//! A [`UserProfile`] is built once per request and stays immutable while the
//! candidates are scored.

use chrono::NaiveDate;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{SuggestRequest, SuggestRequestValidationError};

/// Number of cards a caller may request, validated into `1..=10`.
///
/// # Examples
/// ```
/// use trendroute_core::ResultCap;
///
/// assert_eq!(ResultCap::new(3).map(ResultCap::get), Ok(3));
/// assert!(ResultCap::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct ResultCap(u8);

impl ResultCap {
    /// Smallest accepted cap.
    pub const MIN: u8 = 1;
    /// Largest accepted cap.
    pub const MAX: u8 = 10;
    /// Cap applied when the caller does not choose one.
    pub const DEFAULT: Self = Self(4);

    /// Validate `value` as a result cap.
    ///
    /// # Errors
    /// Returns [`SuggestRequestValidationError::InvalidMaxResults`] when
    /// `value` lies outside `1..=10`.
    pub const fn new(value: u8) -> Result<Self, SuggestRequestValidationError> {
        if value < Self::MIN || value > Self::MAX {
            return Err(SuggestRequestValidationError::InvalidMaxResults {
                got: value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    /// Return the cap as a `usize` suitable for truncation.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0 as usize
    }

    /// Return the raw cap.
    #[must_use]
    pub const fn get_u8(self) -> u8 {
        self.0
    }
}

impl Default for ResultCap {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for ResultCap {
    type Error = SuggestRequestValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ResultCap> for u8 {
    fn from(cap: ResultCap) -> Self {
        cap.0
    }
}

/// Compute an inclusive trip length in days.
///
/// Returns `1` unless both dates are present, in which case both endpoints
/// count towards the total.
///
/// # Errors
/// Returns [`SuggestRequestValidationError::EndBeforeStart`] when `end`
/// precedes `start`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use trendroute_core::trip_length_days;
///
/// let sat = NaiveDate::from_ymd_opt(2024, 6, 1);
/// let sun = NaiveDate::from_ymd_opt(2024, 6, 2);
/// assert_eq!(trip_length_days(sat, sun), Ok(2));
/// assert_eq!(trip_length_days(sat, None), Ok(1));
/// ```
pub fn trip_length_days(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<u32, SuggestRequestValidationError> {
    let (Some(start), Some(end)) = (start, end) else {
        return Ok(1);
    };
    let span = end.signed_duration_since(start).num_days();
    if span < 0 {
        return Err(SuggestRequestValidationError::EndBeforeStart { start, end });
    }
    Ok(u32::try_from(span.saturating_add(1)).unwrap_or(u32::MAX))
}

/// Normalised caller preferences used as scoring input.
///
/// # Examples
/// ```
/// use trendroute_core::UserProfile;
///
/// let profile = UserProfile::new()
///     .with_budget(500)
///     .with_interests(["history"]);
/// assert_eq!(profile.budget(), Some(500));
/// assert_eq!(profile.duration_days(), 1);
/// assert_eq!(profile.max_results().get(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UserProfile {
    budget: Option<u32>,
    interests: Vec<String>,
    duration_days: u32,
    max_results: ResultCap,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            budget: None,
            interests: Vec::new(),
            duration_days: 1,
            max_results: ResultCap::DEFAULT,
        }
    }
}

impl UserProfile {
    /// Construct a one-day profile with no budget and no interests.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a profile from a request.
    ///
    /// # Errors
    /// Returns [`SuggestRequestValidationError`] when the result cap is out of
    /// range or the date range is inverted.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use trendroute_core::{SuggestRequest, UserProfile};
    ///
    /// let request = SuggestRequest::new("weekend").with_dates(
    ///     NaiveDate::from_ymd_opt(2024, 1, 6).expect("date"),
    ///     NaiveDate::from_ymd_opt(2024, 1, 7).expect("date"),
    /// );
    /// let profile = UserProfile::from_request(&request).expect("valid request");
    /// assert_eq!(profile.duration_days(), 2);
    /// ```
    pub fn from_request(request: &SuggestRequest) -> Result<Self, SuggestRequestValidationError> {
        let max_results = ResultCap::new(request.max_results)?;
        let duration_days = trip_length_days(request.start_date, request.end_date)?;
        Ok(Self {
            budget: request.budget,
            interests: request.interests.clone(),
            duration_days,
            max_results,
        })
    }

    /// Spending limit, if the caller supplied one.
    #[must_use]
    pub const fn budget(&self) -> Option<u32> {
        self.budget
    }

    /// Interest labels in caller order.
    #[must_use]
    pub fn interests(&self) -> &[String] {
        &self.interests
    }

    /// Inclusive trip length; always at least one.
    #[must_use]
    pub const fn duration_days(&self) -> u32 {
        self.duration_days
    }

    /// Number of cards to return.
    #[must_use]
    pub const fn max_results(&self) -> ResultCap {
        self.max_results
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

    /// Set the trip length. Zero is raised to one.
    #[must_use]
    pub fn with_duration_days(mut self, days: u32) -> Self {
        self.duration_days = days.max(1);
        self
    }

    /// Set the result cap.
    #[must_use]
    pub fn with_max_results(mut self, max_results: ResultCap) -> Self {
        self.max_results = max_results;
        self
    }
}
