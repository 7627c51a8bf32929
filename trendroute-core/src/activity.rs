//! Acknowledgement of route selections and feedback.
//!
//! Nothing is persisted here: [`LoggingSink`] writes a log line and returns a
//! [`Receipt`]. Storage-backed sinks implement [`ActivitySink`].

use chrono::{DateTime, Utc};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Star rating attached to feedback, validated into `1..=5`.
///
/// # Examples
/// ```
/// use trendroute_core::Rating;
///
/// assert_eq!(Rating::new(4).map(Rating::get), Ok(4));
/// assert!(Rating::new(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Rating(u8);

impl Rating {
    /// Lowest accepted rating.
    pub const MIN: u8 = 1;
    /// Highest accepted rating.
    pub const MAX: u8 = 5;

    /// Validate `value` as a rating.
    ///
    /// # Errors
    /// Returns [`ActivityError::RatingOutOfRange`] outside `1..=5`.
    pub const fn new(value: u8) -> Result<Self, ActivityError> {
        if value < Self::MIN || value > Self::MAX {
            return Err(ActivityError::RatingOutOfRange { got: value });
        }
        Ok(Self(value))
    }

    /// Return the raw rating.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = ActivityError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// Errors raised while building activity records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivityError {
    /// A rating fell outside `1..=5`.
    #[error("rating must be between 1 and 5, got {got}")]
    RatingOutOfRange {
        /// Value supplied by the caller.
        got: u8,
    },
}

/// Feedback left for a route.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Feedback {
    /// Route being rated.
    pub route_id: String,
    /// Star rating.
    pub rating: Rating,
    /// Free-text comment.
    #[cfg_attr(feature = "serde", serde(default))]
    pub comment: Option<String>,
    /// Caller identifier.
    #[cfg_attr(feature = "serde", serde(default))]
    pub user_id: Option<String>,
}

/// Outcome reported on a [`Receipt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ReceiptStatus {
    /// The event was accepted.
    Success,
}

/// Acknowledgement returned for a recorded event.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Receipt {
    /// Outcome.
    pub status: ReceiptStatus,
    /// Route the event refers to.
    pub route_id: String,
    /// Caller identifier, when supplied.
    pub user_id: Option<String>,
    /// Rating, for feedback receipts.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub rating: Option<Rating>,
    /// Comment, for feedback receipts.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub comment: Option<String>,
    /// When the event was acknowledged.
    pub recorded_at: DateTime<Utc>,
    /// Human-readable confirmation.
    pub message: String,
}

/// Destination for selection and feedback events.
pub trait ActivitySink: Send + Sync {
    /// Record that `route_id` was selected.
    fn record_selection(&self, route_id: &str, user_id: Option<&str>) -> Receipt;

    /// Record feedback for a route.
    fn record_feedback(&self, feedback: &Feedback) -> Receipt;
}

/// [`ActivitySink`] that only logs events.
///
/// # Examples
/// ```
/// use trendroute_core::{ActivitySink, LoggingSink, ReceiptStatus};
///
/// let receipt = LoggingSink::default().record_selection("route_1", Some("u1"));
/// assert_eq!(receipt.status, ReceiptStatus::Success);
/// assert_eq!(receipt.user_id.as_deref(), Some("u1"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LoggingSink {
    clock: fn() -> DateTime<Utc>,
}

impl Default for LoggingSink {
    fn default() -> Self {
        Self { clock: Utc::now }
    }
}

impl LoggingSink {
    /// Use `clock` to timestamp receipts.
    #[must_use]
    pub const fn with_clock(clock: fn() -> DateTime<Utc>) -> Self {
        Self { clock }
    }
}

impl ActivitySink for LoggingSink {
    fn record_selection(&self, route_id: &str, user_id: Option<&str>) -> Receipt {
        log::info!(
            "route selected: route_id={route_id} user_id={}",
            user_id.unwrap_or("-")
        );
        Receipt {
            status: ReceiptStatus::Success,
            route_id: route_id.to_owned(),
            user_id: user_id.map(str::to_owned),
            rating: None,
            comment: None,
            recorded_at: (self.clock)(),
            message: "Route selection recorded".to_owned(),
        }
    }

    fn record_feedback(&self, feedback: &Feedback) -> Receipt {
        log::info!(
            "feedback received: route_id={} rating={} user_id={}",
            feedback.route_id,
            feedback.rating.get(),
            feedback.user_id.as_deref().unwrap_or("-")
        );
        if let Some(comment) = &feedback.comment {
            log::info!("feedback comment: {comment}");
        }
        Receipt {
            status: ReceiptStatus::Success,
            route_id: feedback.route_id.clone(),
            user_id: feedback.user_id.clone(),
            rating: Some(feedback.rating),
            comment: feedback.comment.clone(),
            recorded_at: (self.clock)(),
            message: "Feedback recorded".to_owned(),
        }
    }
}
