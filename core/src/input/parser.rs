//! Input Parser
//!
//! Parses the raw input string, e.g. `5x5 (1, 3) (4, 4)`, into a grid size and an
//! ordered list of delivery points.
//!
//! # Format
//!
//! ```text
//! <width>x<height> (<x>, <y>) (<x>, <y>) ...
//! ```
//!
//! Whitespace around tokens and inside or between coordinate groups is ignored.

use crate::error::RouteError;

use super::integer::parse_positive_integer;
use super::types::{DeliveryPlan, GridSize, Point};

const GRID_SEPARATOR: char = 'x';
const GROUP_BOUNDARY: &str = ")(";

/// Input parser for pizzabot
///
/// Stateless; every call validates the whole input and returns either the complete
/// plan or the first error found.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputParser;

impl InputParser {
    /// Parses input into a grid and its delivery points
    ///
    /// # Errors
    ///
    /// Returns `RouteError` if:
    /// - fewer than two whitespace separated tokens are present
    /// - the first token is not of the form `<X>x<Y>`
    /// - any integer is malformed or negative
    /// - a coordinate group is not a pair
    /// - a point lies outside the grid
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pizzabot_core::input::{InputParser, Point};
    ///
    /// let plan = InputParser::parse("5x5 (1, 3) (4, 4)").unwrap();
    /// assert_eq!(plan.points, vec![Point::new(1, 3), Point::new(4, 4)]);
    /// ```
    pub fn parse(input: &str) -> Result<DeliveryPlan, RouteError> {
        let tokens: Vec<&str> = input.split_whitespace().collect();

        // Need at least the grid token and one coordinate group.
        let Some((grid_token, coordinate_tokens)) = tokens.split_first() else {
            return Err(RouteError::InvalidInput);
        };
        if coordinate_tokens.is_empty() {
            return Err(RouteError::InvalidInput);
        }

        let grid = parse_grid_size(grid_token)?;
        tracing::debug!(width = grid.width, height = grid.height, "parsed grid size");

        let points = parse_coordinates(coordinate_tokens, grid)?;
        Ok(DeliveryPlan { grid, points })
    }
}

/// Parses a grid token such as `5x5`.
///
/// The separator count is checked before either operand is validated, so `x1`,
/// `6x1x2` and `15` all fail with `GridFormat` rather than an integer error.
pub fn parse_grid_size(token: &str) -> Result<GridSize, RouteError> {
    let parts: Vec<&str> = token.split(GRID_SEPARATOR).collect();

    let [width, height] = parts.as_slice() else {
        return Err(RouteError::GridFormat);
    };
    if width.is_empty() || height.is_empty() {
        return Err(RouteError::GridFormat);
    }

    let width = parse_positive_integer(width)?;
    let height = parse_positive_integer(height)?;
    Ok(GridSize::new(width, height))
}

/// Parses every coordinate group in `tokens` against `grid`, preserving order.
pub fn parse_coordinates(tokens: &[&str], grid: GridSize) -> Result<Vec<Point>, RouteError> {
    // Whitespace is insignificant anywhere in the coordinate list.
    let compact = tokens.join(" ").replace(' ', "");

    let mut points = Vec::new();
    for fragment in compact.split(GROUP_BOUNDARY) {
        let point = parse_point(fragment, grid)?;
        tracing::trace!(x = point.x, y = point.y, "parsed point");
        points.push(point);
    }

    tracing::debug!(count = points.len(), "parsed coordinate groups");
    Ok(points)
}

fn parse_point(fragment: &str, grid: GridSize) -> Result<Point, RouteError> {
    let pair = split_pair(fragment);

    let [x, y] = pair.as_slice() else {
        return Err(RouteError::InvalidCoordinates {
            fragment: fragment.to_string(),
        });
    };

    let x = parse_positive_integer(x)?;
    let y = parse_positive_integer(y)?;

    if !grid.contains(x, y) {
        return Err(RouteError::OutOfBounds {
            x,
            y,
            width: grid.width,
            height: grid.height,
        });
    }

    Ok(Point::new(x, y))
}

/// Strips one `(` and one `)` from the fragment and splits it on `,`.
///
/// Only the first occurrence of each parenthesis is removed; any stray extra
/// parenthesis stays in the token and later fails integer validation.
fn split_pair(fragment: &str) -> Vec<String> {
    fragment
        .replacen('(', "", 1)
        .replacen(')', "", 1)
        .split(',')
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn grid_size_parses_both_dimensions() {
        assert_eq!(parse_grid_size("5x5").unwrap(), GridSize::new(5, 5));
        assert_eq!(parse_grid_size("1x512").unwrap(), GridSize::new(1, 512));
    }

    #[test]
    fn grid_size_rejects_wrong_separator_count_before_integers() {
        for token in ["x1", "1x", "6x1x2", "x", "15", "5X5", "axbxc"] {
            assert_eq!(
                parse_grid_size(token).unwrap_err(),
                RouteError::GridFormat,
                "token {token:?}"
            );
        }
    }

    #[test]
    fn grid_size_propagates_integer_errors() {
        assert_eq!(
            parse_grid_size("6x12.8").unwrap_err().to_string(),
            "Invalid integer string '12.8', must be a valid integer"
        );
        assert_eq!(
            parse_grid_size("-5x1").unwrap_err().to_string(),
            "Invalid integer '-5', must be a positive integer"
        );
    }

    #[test]
    fn coordinates_split_across_tokens_are_rejoined() {
        let points = parse_coordinates(&["(1,", "2)"], GridSize::new(2, 2)).unwrap();
        assert_eq!(points, vec![Point::new(1, 2)]);
    }

    #[test]
    fn coordinates_keep_order_and_duplicates() {
        let points =
            parse_coordinates(&["(4,2)", "(4,2)", "(0,1)"], GridSize::new(5, 5)).unwrap();
        assert_eq!(
            points,
            vec![Point::new(4, 2), Point::new(4, 2), Point::new(0, 1)]
        );
    }

    #[test]
    fn coordinates_reject_negative_values() {
        let err = parse_coordinates(&["(-1,", "2)"], GridSize::new(2, 2)).unwrap_err();
        assert_eq!(err, RouteError::NegativeInteger { value: -1 });
    }

    #[test]
    fn coordinate_group_must_be_a_pair() {
        for fragment in ["()", "(", "())", "(1,2,3)"] {
            let err = parse_coordinates(&[fragment], GridSize::new(5, 5)).unwrap_err();
            assert_eq!(
                err,
                RouteError::InvalidCoordinates {
                    fragment: fragment.to_string()
                }
            );
        }
    }

    #[test]
    fn stray_parenthesis_surfaces_as_integer_error() {
        let err = parse_coordinates(&["(1,2))"], GridSize::new(5, 5)).unwrap_err();
        assert_eq!(
            err,
            RouteError::MalformedInteger {
                token: "2)".to_string()
            }
        );
    }

    #[test]
    fn bounds_are_inclusive() {
        let grid = GridSize::new(3, 4);
        assert_eq!(
            parse_coordinates(&["(3,4)"], grid).unwrap(),
            vec![Point::new(3, 4)]
        );
        assert_eq!(
            parse_coordinates(&["(4,4)"], grid).unwrap_err().to_string(),
            "Point (4, 4) must be within grid dimensions 3x4"
        );
        assert_eq!(
            parse_coordinates(&["(3,5)"], grid).unwrap_err().to_string(),
            "Point (3, 5) must be within grid dimensions 3x4"
        );
    }

    #[test]
    fn parse_requires_grid_and_one_group() {
        assert_eq!(InputParser::parse("").unwrap_err(), RouteError::InvalidInput);
        assert_eq!(
            InputParser::parse("   1x1   ").unwrap_err(),
            RouteError::InvalidInput
        );
    }

    #[test]
    fn first_error_wins() {
        // Out of bounds point comes before the malformed one.
        let err = InputParser::parse("2x2 (3, 3) (a, 1)").unwrap_err();
        assert!(matches!(err, RouteError::OutOfBounds { .. }));
    }

    #[test]
    fn whitespace_inside_groups_is_ignored() {
        let loose = InputParser::parse("  5x5   (  4,   1  )(0 ,0)  ").unwrap();
        let tight = InputParser::parse("5x5 (4,1) (0,0)").unwrap();
        assert_eq!(loose, tight);
    }
}
