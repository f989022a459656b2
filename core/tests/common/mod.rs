#![allow(dead_code)]

use pizzabot_core::api::{plan_route, RouteError};

pub fn directions(input: &str) -> String {
    match plan_route(input) {
        Ok(plan) => plan.directions(),
        Err(e) => panic!("expected {input:?} to plan, got error: {e}"),
    }
}

pub fn error_of(input: &str) -> RouteError {
    match plan_route(input) {
        Ok(plan) => panic!(
            "expected {input:?} to fail, got route {}",
            plan.directions()
        ),
        Err(e) => e,
    }
}

pub fn error_message(input: &str) -> String {
    error_of(input).to_string()
}

pub fn drop_markers(directions: &str) -> usize {
    directions.chars().filter(|c| *c == 'D').count()
}
