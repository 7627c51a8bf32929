//! Behaviour-driven step definitions for the route lookup command.

use super::helpers::run_argv;
use super::*;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use trendroute_core::RouteDetail;

#[derive(Debug, Default)]
struct RouteWorld {
    route_id: RefCell<String>,
    stdout: RefCell<String>,
    result: RefCell<Option<Result<(), CliError>>>,
}

#[fixture]
fn world() -> RouteWorld {
    RouteWorld::default()
}

#[given("the route id route_museum_001")]
fn museum_route(#[from(world)] world: &RouteWorld) {
    world.route_id.replace("route_museum_001".to_owned());
}

#[given("the route id route_atlantis_404")]
fn unknown_route(#[from(world)] world: &RouteWorld) {
    world.route_id.replace("route_atlantis_404".to_owned());
}

#[when("I run the route command")]
fn run_route_command(#[from(world)] world: &RouteWorld) {
    let route_id = world.route_id.borrow().clone();
    let (outcome, stdout) = run_argv(&["trendroute", "route", route_id.as_str()]);
    world.stdout.replace(stdout);
    world.result.replace(Some(outcome));
}

#[then("the command prints a three-leg itinerary")]
fn prints_itinerary(#[from(world)] world: &RouteWorld) {
    let borrowed = world.result.borrow();
    borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect("expected success");
    let detail: RouteDetail =
        serde_json::from_str(&world.stdout.borrow()).expect("output should be a route detail");
    assert_eq!(detail.steps.len(), 3);
    assert_eq!(detail.final_message, "You have arrived at the museum!");
}

#[then("the command fails because the route was not found")]
fn fails_not_found(#[from(world)] world: &RouteWorld) {
    let borrowed = world.result.borrow();
    let error = borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect_err("expected error");
    match error {
        CliError::RouteNotFound { route_id } => assert_eq!(route_id, "route_atlantis_404"),
        other => panic!("expected RouteNotFound, found {other:?}"),
    }
    assert!(world.stdout.borrow().is_empty());
}

#[scenario(path = "tests/features/route_command.feature", index = 0)]
fn route_known(#[from(world)] world: RouteWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/route_command.feature", index = 1)]
fn route_unknown(#[from(world)] world: RouteWorld) {
    let _ = world;
}
