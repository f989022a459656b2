use serde::{Deserialize, Serialize};

use crate::input::{GridSize, Point};
use crate::route::Route;

/// Result of a successful planning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePlan {
    pub grid: GridSize,
    pub points: Vec<Point>,
    pub route: Route,
}

impl RoutePlan {
    pub fn directions(&self) -> String {
        self.route.to_string()
    }

    pub fn report(&self) -> RouteReport {
        RouteReport {
            grid: self.grid,
            points: self.points.clone(),
            directions: self.directions(),
            drops: self.route.drop_count(),
        }
    }
}

/// Serializable view of a `RoutePlan`, used for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteReport {
    pub grid: GridSize,
    pub points: Vec<Point>,
    pub directions: String,
    pub drops: usize,
}
