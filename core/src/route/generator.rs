use std::fmt;

use super::direction::{Direction, Instruction};
use crate::input::Point;

/// Ordered instructions produced by one generation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    instructions: Vec<Instruction>,
}

impl Route {
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn drop_count(&self) -> usize {
        self.instructions
            .iter()
            .filter(|i| matches!(i, Instruction::Drop))
            .count()
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    fn push_leg(&mut self, direction: Direction, steps: u64) {
        self.instructions
            .extend(std::iter::repeat(Instruction::Move(direction)).take(steps as usize));
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for instruction in &self.instructions {
            write!(f, "{instruction}")?;
        }
        Ok(())
    }
}

/// Direction and step count needed to move from `current` to `target` on one axis.
fn leg(
    current: u64,
    target: u64,
    forward: Direction,
    backward: Direction,
) -> Option<(Direction, u64)> {
    match target.cmp(&current) {
        std::cmp::Ordering::Greater => Some((forward, target - current)),
        std::cmp::Ordering::Less => Some((backward, current - target)),
        std::cmp::Ordering::Equal => None,
    }
}

/// Generates directions from the origin through every point in order.
///
/// For each point the X leg (East/West) comes before the Y leg (North/South),
/// followed by one drop. The cursor carries over between points.
pub fn generate_directions(points: &[Point]) -> Route {
    let mut route = Route::default();
    let mut cursor = Point::new(0, 0);

    for target in points {
        if let Some((direction, steps)) = leg(cursor.x, target.x, Direction::East, Direction::West)
        {
            route.push_leg(direction, steps);
        }
        if let Some((direction, steps)) =
            leg(cursor.y, target.y, Direction::North, Direction::South)
        {
            route.push_leg(direction, steps);
        }
        route.instructions.push(Instruction::Drop);
        cursor = *target;
    }

    tracing::trace!(points = points.len(), instructions = route.len(), "generated route");
    route
}
