//! Radial guide lines separating the sectors.

use crate::geometry::rotation_about;
use crate::symmetry::SymmetryConfig;
use kurbo::{Line, Point};

/// Guide lines from the center outwards, one per sector angle.
///
/// The first line points straight up with length `radius`; the rest are its
/// rotations through the same angles the compositor uses.
pub fn sector_guides(config: &SymmetryConfig, radius: f64) -> Vec<Line> {
    let spoke = Line::new(config.center, Point::new(config.center.x, config.center.y - radius));
    config
        .order
        .angles()
        .map(|angle| {
            let rotate = rotation_about(angle, config.center);
            Line::new(rotate * spoke.p0, rotate * spoke.p1)
        })
        .collect()
}
