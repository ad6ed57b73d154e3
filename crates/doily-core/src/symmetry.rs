//! Symmetry configuration: the fixed center and the number of sectors.

use crate::error::{DoilyError, DoilyResult};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Slack allowed when comparing the accumulated angle against 360°.
///
/// Repeated addition of `360 / n` can overshoot 360 by a few ulps (n = 7,
/// for instance); the seam copy at 360° must still be drawn.
const SEAM_EPSILON: f64 = 1e-9;

/// Number of rotational copies, always within `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct SymmetryOrder(u32);

impl SymmetryOrder {
    pub const MIN: u32 = 2;
    pub const MAX: u32 = 40;
    pub const DEFAULT: u32 = 12;

    /// Validate a sector count.
    pub fn new(sectors: u32) -> DoilyResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&sectors) {
            Ok(Self(sectors))
        } else {
            Err(DoilyError::InvalidSymmetryOrder(sectors))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Angle between neighbouring sectors, in degrees.
    pub fn step_degrees(self) -> f64 {
        360.0 / f64::from(self.0)
    }

    /// Angles at which copies are drawn: 0, step, 2*step, ... up to and
    /// including 360, built by accumulating `step`.
    pub fn angles(self) -> SectorAngles {
        SectorAngles {
            next: 0.0,
            step: self.step_degrees(),
        }
    }
}

impl Default for SymmetryOrder {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<u32> for SymmetryOrder {
    type Error = DoilyError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SymmetryOrder> for u32 {
    fn from(order: SymmetryOrder) -> Self {
        order.0
    }
}

/// Iterator over sector angles in degrees, inclusive of both 0 and 360.
#[derive(Debug, Clone)]
pub struct SectorAngles {
    next: f64,
    step: f64,
}

impl Iterator for SectorAngles {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next > 360.0 + SEAM_EPSILON {
            return None;
        }
        let angle = self.next;
        self.next += self.step;
        Some(angle)
    }
}

/// Center of symmetry plus sector count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SymmetryConfig {
    /// Fixed center that copies rotate about and the mirror axis passes through.
    pub center: Point,
    /// Number of sectors.
    pub order: SymmetryOrder,
}

impl SymmetryConfig {
    pub fn new(center: Point, order: SymmetryOrder) -> Self {
        Self { center, order }
    }

    /// Return a copy using a different sector count.
    pub fn with_order(self, order: SymmetryOrder) -> Self {
        Self { order, ..self }
    }
}

impl Default for SymmetryConfig {
    fn default() -> Self {
        Self {
            center: Point::new(400.0, 400.0),
            order: SymmetryOrder::default(),
        }
    }
}
