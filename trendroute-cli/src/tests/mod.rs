//! Shared test harness modules for the TrendRoute CLI.

use super::*;

mod activity_unit;
mod helpers;
mod route_steps;
mod suggest_steps;
