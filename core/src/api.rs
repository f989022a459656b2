//! Stable re-exports for consumers (`cli` and external crates).
//!
//! Prefer importing from `pizzabot_core::api` instead of reaching into internal modules.

pub use crate::config::{
    get_pizzabot_data_dir, load_default, load_from_path, AppConfig, LoggingConfig, OutputConfig,
    OutputFormat,
};
pub use crate::engine::{plan_route, RoutePlan, RouteReport};
pub use crate::error::{CliError, ErrorCode, RouteError};
pub use crate::input::{DeliveryPlan, GridSize, InputParser, Point};
pub use crate::route::{generate_directions, Direction, Instruction, Route};
