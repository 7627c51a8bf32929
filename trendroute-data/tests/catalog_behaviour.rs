//! Behaviour tests for catalog publication and detail lookup.

use std::cell::RefCell;

use camino::Utf8PathBuf;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;
use trendroute_core::{CatalogHandle, RouteDetail, RouteDetailStore};
use trendroute_data::{builtin_catalog, reload_catalog};

struct CatalogWorld {
    handle: CatalogHandle,
    lookup: RefCell<Option<Option<RouteDetail>>>,
    _tmp: TempDir,
    root: Utf8PathBuf,
}

#[fixture]
fn world() -> CatalogWorld {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 tempdir");
    CatalogWorld {
        handle: CatalogHandle::default(),
        lookup: RefCell::new(None),
        _tmp: tmp,
        root,
    }
}

#[given("the built-in catalog is published")]
fn builtin_published(#[from(world)] world: &CatalogWorld) {
    world
        .handle
        .replace(builtin_catalog().expect("embedded catalog is valid"));
}

#[when("I look up the detail for an unknown route id")]
fn lookup_unknown(#[from(world)] world: &CatalogWorld) {
    world
        .lookup
        .replace(Some(world.handle.route_detail("route_does_not_exist")));
}

#[when("I look up the detail for the museum tour")]
fn lookup_museum(#[from(world)] world: &CatalogWorld) {
    world
        .lookup
        .replace(Some(world.handle.route_detail("route_museum_001")));
}

#[when("I reload the catalog from a file with a single route")]
fn reload_single_route(#[from(world)] world: &CatalogWorld) {
    let path = world.root.join("catalog.json");
    std::fs::write(&path, r#"{"routes":[{"route_id":"solo","city":"Antalya"}]}"#)
        .expect("write catalog");
    reload_catalog(&world.handle, &path).expect("reload succeeds");
}

#[then("no route detail is found")]
fn detail_absent(#[from(world)] world: &CatalogWorld) {
    let lookup = world.lookup.borrow();
    let outcome = lookup.as_ref().expect("lookup performed");
    assert!(outcome.is_none());
}

#[then("the detail lists three legs totalling twenty minutes")]
fn museum_legs(#[from(world)] world: &CatalogWorld) {
    let lookup = world.lookup.borrow();
    let detail = lookup
        .as_ref()
        .expect("lookup performed")
        .as_ref()
        .expect("museum detail present");
    assert_eq!(detail.steps.len(), 3);
    assert_eq!(detail.total_duration_minutes, 20);
    assert_eq!(detail.step_minutes(), 20);
}

#[then("the published catalog holds one route")]
fn one_route(#[from(world)] world: &CatalogWorld) {
    let snapshot = world.handle.snapshot();
    assert_eq!(snapshot.routes.len(), 1);
    assert!(snapshot.route("solo").is_some());
}

#[scenario(path = "tests/features/catalog.feature", index = 0)]
fn unknown_route_not_found(#[from(world)] world: CatalogWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/catalog.feature", index = 1)]
fn museum_tour_detail(#[from(world)] world: CatalogWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/catalog.feature", index = 2)]
fn reload_replaces_catalog(#[from(world)] world: CatalogWorld) {
    let _ = world;
}
