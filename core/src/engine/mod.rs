mod run;
mod types;

pub use run::plan_route;
pub use types::{RoutePlan, RouteReport};
