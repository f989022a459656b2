//! Route generation: per-axis greedy legs from the origin through each delivery point.

mod direction;
mod generator;

pub use direction::{Direction, Instruction};
pub use generator::{generate_directions, Route};
