//! Behaviour tests for deriving profiles from requests.

use std::cell::RefCell;

use chrono::NaiveDate;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use trendroute_core::{SuggestRequest, SuggestRequestValidationError, UserProfile};

#[derive(Debug)]
struct ProfileWorld {
    request: RefCell<SuggestRequest>,
    outcome: RefCell<Option<Result<UserProfile, SuggestRequestValidationError>>>,
}

impl ProfileWorld {
    fn outcome(&self) -> Result<UserProfile, SuggestRequestValidationError> {
        self.outcome
            .borrow()
            .clone()
            .expect("profile derivation recorded")
    }
}

fn january(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).expect("valid date")
}

#[fixture]
fn world() -> ProfileWorld {
    ProfileWorld {
        request: RefCell::new(SuggestRequest::new("a short break")),
        outcome: RefCell::new(None),
    }
}

#[given("a request from 6 January to 7 January")]
fn two_day_request(#[from(world)] world: &ProfileWorld) {
    world.request.replace(
        SuggestRequest::new("weekend").with_dates(january(6), january(7)),
    );
}

#[given("a request from 7 January to 6 January")]
fn inverted_request(#[from(world)] world: &ProfileWorld) {
    world.request.replace(
        SuggestRequest::new("weekend").with_dates(january(7), january(6)),
    );
}

#[given("a request without dates")]
fn undated_request(#[from(world)] world: &ProfileWorld) {
    world.request.replace(SuggestRequest::new("anything"));
}

#[when("I derive the user profile")]
fn derive_profile(#[from(world)] world: &ProfileWorld) {
    let outcome = UserProfile::from_request(&world.request.borrow());
    world.outcome.replace(Some(outcome));
}

#[then("the trip lasts 2 days")]
fn lasts_two_days(#[from(world)] world: &ProfileWorld) {
    let profile = world.outcome().expect("profile derived");
    assert_eq!(profile.duration_days(), 2);
}

#[then("the trip lasts 1 day")]
fn lasts_one_day(#[from(world)] world: &ProfileWorld) {
    let profile = world.outcome().expect("profile derived");
    assert_eq!(profile.duration_days(), 1);
}

#[then("the request is rejected because it ends before it starts")]
fn rejected_inverted(#[from(world)] world: &ProfileWorld) {
    let err = world.outcome().expect_err("inverted range rejected");
    assert_eq!(
        err,
        SuggestRequestValidationError::EndBeforeStart {
            start: january(7),
            end: january(6),
        }
    );
}

#[scenario(path = "tests/features/profile.feature", index = 0)]
fn two_day_range(#[from(world)] world: ProfileWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/profile.feature", index = 1)]
fn undated_range(#[from(world)] world: ProfileWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/profile.feature", index = 2)]
fn inverted_range(#[from(world)] world: ProfileWorld) {
    let _ = world;
}
