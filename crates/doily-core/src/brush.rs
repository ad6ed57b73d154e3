//! Brush colour and settings snapshots.

use crate::error::{DoilyError, DoilyResult};
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Straight-alpha RGBA8 colour stored in brush settings and config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Default brush colour.
    pub const RED: Self = Self::new(255, 0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self::new(rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// How a drawn shape is composited onto the raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositeMode {
    /// Replace the pixels under the shape with the given colour.
    Paint(SerializableColor),
    /// Clear the pixels under the shape to full transparency.
    Erase,
}

/// Brush state captured when a stroke starts.
///
/// The live copy is owned by the drawing session; every stroke keeps its own
/// copy so replay never reads the live brush.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushSettings {
    /// Paint colour.
    pub color: SerializableColor,
    /// Stroke width in canvas pixels.
    pub width: f64,
    /// Mirror each primitive about the vertical axis through the center.
    pub reflect: bool,
    /// Clear pixels instead of painting them.
    pub erase: bool,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            color: SerializableColor::RED,
            width: Self::DEFAULT_WIDTH,
            reflect: true,
            erase: false,
        }
    }
}

impl BrushSettings {
    pub const MIN_WIDTH: f64 = 1.0;
    pub const MAX_WIDTH: f64 = 15.0;
    pub const DEFAULT_WIDTH: f64 = 3.0;

    /// Check that a brush width lies in the supported range.
    pub fn validate_width(width: f64) -> DoilyResult<f64> {
        if (Self::MIN_WIDTH..=Self::MAX_WIDTH).contains(&width) {
            Ok(width)
        } else {
            Err(DoilyError::InvalidBrushWidth(width))
        }
    }

    /// Compositing mode implied by these settings.
    pub fn composite_mode(&self) -> CompositeMode {
        if self.erase {
            CompositeMode::Erase
        } else {
            CompositeMode::Paint(self.color)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_brush() {
        let brush = BrushSettings::default();
        assert_eq!(brush.color, SerializableColor::RED);
        assert!((brush.width - 3.0).abs() < f64::EPSILON);
        assert!(brush.reflect);
        assert!(!brush.erase);
    }

    #[test]
    fn test_composite_mode() {
        let mut brush = BrushSettings::default();
        assert_eq!(brush.composite_mode(), CompositeMode::Paint(SerializableColor::RED));
        brush.erase = true;
        assert_eq!(brush.composite_mode(), CompositeMode::Erase);
    }

    #[test]
    fn test_validate_width() {
        assert!(BrushSettings::validate_width(1.0).is_ok());
        assert!(BrushSettings::validate_width(15.0).is_ok());
        assert_eq!(
            BrushSettings::validate_width(0.5),
            Err(DoilyError::InvalidBrushWidth(0.5))
        );
        assert!(BrushSettings::validate_width(16.0).is_err());
    }

    #[test]
    fn test_peniko_color_conversion() {
        let color = Color::from_rgba8(12, 34, 56, 255);
        let serializable = SerializableColor::from(color);
        assert_eq!(serializable, SerializableColor::new(12, 34, 56, 255));
    }
}
