use std::fmt;
use std::str::FromStr;

use strata_engine::coords::{Point, Rect, Size};

use crate::error::SceneError;

/// Closed set of drawable shapes. Both use a square bounding box.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    Square,
    Circle,
}

impl ShapeKind {
    /// Whether `point` lies on the shape centered at `center` with bounding box `size`.
    ///
    /// - `Square`: inside the centered box, edges included.
    /// - `Circle`: squared distance to the center at most `(size.width / 2)²`.
    pub fn hit_test(self, center: Point, size: Size, point: Point) -> bool {
        match self {
            ShapeKind::Square => Rect::centered(center, size).contains(point),
            ShapeKind::Circle => {
                let r = u64::from((size.width / 2).unsigned_abs());
                point.distance_squared(center) <= r * r
            }
        }
    }
}

impl FromStr for ShapeKind {
    type Err = SceneError;

    /// Case-insensitive `square` / `circle`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("square") {
            Ok(ShapeKind::Square)
        } else if s.eq_ignore_ascii_case("circle") {
            Ok(ShapeKind::Circle)
        } else {
            Err(SceneError::InvalidShapeKind(s.to_string()))
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Square => f.write_str("Square"),
            ShapeKind::Circle => f.write_str("Circle"),
        }
    }
}
