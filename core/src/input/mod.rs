//! Input Processing Module
//!
//! Turns the raw command line string into a validated grid and an ordered list of
//! delivery points:
//! - `integer`: single token validation (malformed vs negative)
//! - `parser`: grid size and coordinate group parsing
//! - `types`: the value types produced by parsing

pub mod integer;
mod parser;
pub mod types;

pub use integer::parse_positive_integer;
pub use parser::{parse_coordinates, parse_grid_size, InputParser};
pub use types::{DeliveryPlan, GridSize, Point};
