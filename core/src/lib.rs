//! pizzabot-core
//!
//! Parses a grid and delivery targets from text and generates the route an agent
//! follows from the origin, dropping a payload at each target:
//!
//! ```rust
//! let plan = pizzabot_core::plan_route("5x5 (1, 3) (4, 4)").unwrap();
//! assert_eq!(plan.directions(), "ENNNDEEEND");
//! ```

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod route;

pub use engine::{plan_route, RoutePlan, RouteReport};
pub use error::{CliError, ErrorCode, RouteError};
