//! Pipeline entry point: raw input → validated grid and points → route.

use crate::error::RouteError;
use crate::input::InputParser;
use crate::route::generate_directions;

use super::types::RoutePlan;

/// Parses `input` and generates the delivery route for it.
///
/// Pure apart from tracing; nothing is written to stdout. The first validation
/// failure aborts the run and no partial plan is returned.
pub fn plan_route(input: &str) -> Result<RoutePlan, RouteError> {
    let plan = match InputParser::parse(input) {
        Ok(plan) => plan,
        Err(e) => {
            tracing::debug!(error = %e, code = e.error_code().as_u16(), "rejected input");
            return Err(e);
        }
    };

    let route = generate_directions(&plan.points);
    tracing::debug!(
        "planned route: grid={}x{}, points={}, instructions={}",
        plan.grid.width,
        plan.grid.height,
        plan.points.len(),
        route.len()
    );

    Ok(RoutePlan {
        grid: plan.grid,
        points: plan.points,
        route,
    })
}
