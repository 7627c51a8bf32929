//! Unit tests for selection and feedback receipts.

use super::helpers::{fixed_clock, run_argv};
use super::*;
use rstest::rstest;
use trendroute_core::{ActivityError, Rating, Receipt, ReceiptStatus};

#[rstest]
fn select_prints_a_receipt() {
    let (outcome, stdout) = run_argv(&[
        "trendroute",
        "select",
        "route_islands_001",
        "--user-id",
        "u42",
    ]);
    outcome.expect("select succeeds");
    let receipt: Receipt = serde_json::from_str(&stdout).expect("receipt JSON");
    assert_eq!(receipt.status, ReceiptStatus::Success);
    assert_eq!(receipt.route_id, "route_islands_001");
    assert_eq!(receipt.user_id.as_deref(), Some("u42"));
    assert_eq!(receipt.recorded_at, fixed_clock());
}

#[rstest]
fn feedback_echoes_rating_and_comment() {
    let (outcome, stdout) = run_argv(&[
        "trendroute",
        "feedback",
        "route_bosphorus_001",
        "--rating",
        "4",
        "--comment",
        "Great views",
    ]);
    outcome.expect("feedback succeeds");
    let receipt: Receipt = serde_json::from_str(&stdout).expect("receipt JSON");
    assert_eq!(receipt.rating.map(Rating::get), Some(4));
    assert_eq!(receipt.comment.as_deref(), Some("Great views"));
    assert_eq!(receipt.message, "Feedback recorded");
}

#[rstest]
#[case("0")]
#[case("6")]
fn feedback_rejects_out_of_range_ratings(#[case] rating: &str) {
    let (outcome, stdout) = run_argv(&["trendroute", "feedback", "r", "--rating", rating]);
    assert!(matches!(
        outcome.expect_err("rating out of range"),
        CliError::InvalidFeedback(ActivityError::RatingOutOfRange { .. })
    ));
    assert!(stdout.is_empty());
}
