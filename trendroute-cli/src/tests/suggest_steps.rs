//! Behaviour-driven step definitions driving the suggest CLI scenarios.

use super::helpers::{Workspace, run_argv, write_utf8};
use super::*;
use chrono::NaiveDate;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use trendroute_core::{SuggestError, SuggestRequest, SuggestRequestValidationError, SuggestResponse};

#[derive(Debug)]
struct SuggestWorld {
    workspace: Workspace,
    include_request: RefCell<bool>,
    stdout: RefCell<String>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl SuggestWorld {
    fn new() -> Self {
        Self {
            workspace: Workspace::new(),
            include_request: RefCell::new(true),
            stdout: RefCell::new(String::new()),
            result: RefCell::new(None),
        }
    }

    fn request_path(&self) -> camino::Utf8PathBuf {
        self.workspace.path("request.json")
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }
}

#[fixture]
fn world() -> SuggestWorld {
    SuggestWorld::new()
}

#[given("a request for food with a budget of 1000 and two results exists on disk")]
fn food_request_exists(#[from(world)] world: &SuggestWorld) {
    let request = SuggestRequest::new("good food")
        .with_user_id("traveller")
        .with_budget(1000)
        .with_interests(["food"])
        .with_max_results(2);
    world.workspace.write_request("request.json", &request);
}

#[given("the suggest request contains invalid JSON")]
fn request_contains_invalid_json(#[from(world)] world: &SuggestWorld) {
    write_utf8(&world.request_path(), b"{ not valid json");
}

#[given("a request whose end date precedes its start date exists on disk")]
fn inverted_dates_exist(#[from(world)] world: &SuggestWorld) {
    let start = NaiveDate::from_ymd_opt(2024, 6, 7).expect("valid date");
    let end = NaiveDate::from_ymd_opt(2024, 6, 6).expect("valid date");
    let request = SuggestRequest::new("weekend").with_dates(start, end);
    world.workspace.write_request("request.json", &request);
}

#[given("I omit the suggest request path")]
fn omit_request_path(#[from(world)] world: &SuggestWorld) {
    *world.include_request.borrow_mut() = false;
}

#[when("I run the suggest command")]
fn run_suggest_command(#[from(world)] world: &SuggestWorld) {
    let request_path = world.request_path();
    let mut argv = vec!["trendroute", "suggest"];
    if *world.include_request.borrow() {
        argv.push(request_path.as_str());
    }
    let (outcome, stdout) = run_argv(&argv);
    world.stdout.replace(stdout);
    world.result.replace(Some(outcome));
}

#[then("the command succeeds and the islands route is ranked first")]
fn islands_ranked_first(#[from(world)] world: &SuggestWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    result.as_ref().expect("expected success");

    let response: SuggestResponse =
        serde_json::from_str(&world.stdout.borrow()).expect("output should be a response");
    let ids: Vec<_> = response
        .suggestions
        .iter()
        .map(|card| card.route_id.as_str())
        .collect();
    assert_eq!(ids, ["route_islands_001", "route_bosphorus_001"]);
    assert_eq!(response.user_id.as_deref(), Some("traveller"));
    assert_eq!(response.used_trends.len(), 4);
}

#[then("the command fails because the request JSON is invalid")]
fn fails_invalid_json(#[from(world)] world: &SuggestWorld) {
    match &*world.error() {
        CliError::ParseSuggestRequest { .. } => {}
        other => panic!("expected ParseSuggestRequest, found {other:?}"),
    }
}

#[then("the command fails because the dates are inverted")]
fn fails_inverted_dates(#[from(world)] world: &SuggestWorld) {
    match &*world.error() {
        CliError::InvalidSuggestRequest {
            source: SuggestError::InvalidRequest(SuggestRequestValidationError::EndBeforeStart { .. }),
            ..
        } => {}
        other => panic!("expected EndBeforeStart, found {other:?}"),
    }
}

#[then("the command fails because the request path is missing")]
fn fails_missing_request_path(#[from(world)] world: &SuggestWorld) {
    match &*world.error() {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_SUGGEST_REQUEST),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

macro_rules! register_suggest_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/suggest_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: SuggestWorld) {
            let _ = world;
        }
    };
}

register_suggest_scenario!(
    suggest_happy_path,
    "suggesting routes for a food lover with a budget"
);
register_suggest_scenario!(suggest_invalid_json, "rejecting invalid JSON input");
register_suggest_scenario!(suggest_inverted_dates, "rejecting inverted trip dates");
register_suggest_scenario!(suggest_missing_request, "rejecting missing request paths");
