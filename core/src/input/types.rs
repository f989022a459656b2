use serde::{Deserialize, Serialize};

/// Inclusive grid bounds: valid x is `0..=width`, valid y is `0..=height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub width: u64,
    pub height: u64,
}

impl GridSize {
    pub fn new(width: u64, height: u64) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, x: u64, y: u64) -> bool {
        x <= self.width && y <= self.height
    }
}

/// A delivery target. Only constructed by the parser once it has been bounds checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: u64,
    pub y: u64,
}

impl Point {
    pub fn new(x: u64, y: u64) -> Self {
        Self { x, y }
    }
}

/// Parser output: the grid and every target in input order, duplicates included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryPlan {
    pub grid: GridSize,
    pub points: Vec<Point>,
}
