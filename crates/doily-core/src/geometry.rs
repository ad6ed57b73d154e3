//! Drawing primitives and the transforms applied to them.

use kurbo::{Affine, Line, Point, Vec2};
use serde::{Deserialize, Serialize};

/// Tolerance used when comparing transformed coordinates.
pub const GEOMETRY_EPSILON: f64 = 1e-9;

/// A single piece of drawn geometry in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    /// A dot left where the pointer was pressed.
    Point(Point),
    /// A straight segment between two consecutive pointer positions.
    Segment(Line),
}

impl Primitive {
    /// Create a segment primitive.
    pub fn segment(p0: impl Into<Point>, p1: impl Into<Point>) -> Self {
        Primitive::Segment(Line::new(p0, p1))
    }

    /// Create a point primitive.
    pub fn point(p: impl Into<Point>) -> Self {
        Primitive::Point(p.into())
    }

    /// Apply an affine transform, returning a new primitive.
    pub fn transformed(&self, affine: Affine) -> Self {
        match self {
            Primitive::Point(p) => Primitive::Point(affine * *p),
            Primitive::Segment(line) => {
                Primitive::Segment(Line::new(affine * line.p0, affine * line.p1))
            }
        }
    }

    /// Length of the primitive (zero for points).
    pub fn length(&self) -> f64 {
        match self {
            Primitive::Point(_) => 0.0,
            Primitive::Segment(line) => (line.p1 - line.p0).hypot(),
        }
    }

    /// Check whether two primitives match within `tolerance`.
    pub fn approx_eq(&self, other: &Primitive, tolerance: f64) -> bool {
        let close = |a: Point, b: Point| (a - b).hypot() <= tolerance;
        match (self, other) {
            (Primitive::Point(a), Primitive::Point(b)) => close(*a, *b),
            (Primitive::Segment(a), Primitive::Segment(b)) => {
                close(a.p0, b.p0) && close(a.p1, b.p1)
            }
            _ => false,
        }
    }
}

/// Mirror about the vertical axis `x = axis_x`: `x' = 2 * axis_x - x`, `y' = y`.
pub fn reflection_about(axis_x: f64) -> Affine {
    Affine::translate(Vec2::new(axis_x, 0.0))
        * Affine::scale_non_uniform(-1.0, 1.0)
        * Affine::translate(Vec2::new(-axis_x, 0.0))
}

/// Rotation by `degrees` about `center`, positive angles turning clockwise on screen.
pub fn rotation_about(degrees: f64, center: Point) -> Affine {
    Affine::rotate_about(degrees.to_radians(), center)
}
