//! Session configuration.

use crate::brush::{BrushSettings, SerializableColor};
use crate::error::{DoilyError, DoilyResult};
use crate::symmetry::{SymmetryConfig, SymmetryOrder};
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

/// Configuration for a doily drawing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoilyConfig {
    /// Canvas width in pixels.
    pub canvas_width: u32,
    /// Canvas height in pixels.
    pub canvas_height: u32,
    /// Initial number of sectors.
    pub sectors: SymmetryOrder,
    /// Initial brush.
    pub brush: BrushSettings,
    /// Draw the radial lines between sectors on the background.
    pub show_sector_lines: bool,
    /// Backdrop colour behind the drawing.
    pub background_color: SerializableColor,
    /// Colour of the sector guide lines.
    pub guide_color: SerializableColor,
    /// Maximum number of drawings kept in the gallery.
    pub gallery_capacity: usize,
    /// Gallery slots shown per page.
    pub gallery_page_size: usize,
}

impl Default for DoilyConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800,
            canvas_height: 800,
            sectors: SymmetryOrder::default(),
            brush: BrushSettings::default(),
            show_sector_lines: true,
            background_color: SerializableColor::BLACK,
            guide_color: SerializableColor::WHITE,
            gallery_capacity: 12,
            gallery_page_size: 4,
        }
    }
}

impl DoilyConfig {
    pub fn canvas_size(&self) -> Size {
        Size::new(f64::from(self.canvas_width), f64::from(self.canvas_height))
    }

    /// Center of the canvas, used as the center of symmetry.
    pub fn center(&self) -> Point {
        self.canvas_size().to_rect().center()
    }

    pub fn symmetry(&self) -> SymmetryConfig {
        SymmetryConfig::new(self.center(), self.sectors)
    }

    /// Reject values the session cannot work with.
    pub fn validate(&self) -> DoilyResult<()> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(DoilyError::Config(format!(
                "canvas must not be empty ({}x{})",
                self.canvas_width, self.canvas_height
            )));
        }
        BrushSettings::validate_width(self.brush.width)?;
        if self.gallery_capacity == 0 || self.gallery_page_size == 0 {
            return Err(DoilyError::Config(
                "gallery capacity and page size must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> DoilyResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DoilyConfig::default();
        assert_eq!(config.center(), Point::new(400.0, 400.0));
        assert_eq!(config.sectors.get(), 12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = DoilyConfig::from_json(r#"{ "sectors": 7, "canvas_width": 600 }"#).unwrap();
        assert_eq!(config.sectors.get(), 7);
        assert_eq!(config.canvas_width, 600);
        assert_eq!(config.canvas_height, 800);
        assert_eq!(config.center(), Point::new(300.0, 400.0));
        assert_eq!(config.gallery_capacity, 12);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            DoilyConfig::from_json(r#"{ "sectors": 1 }"#),
            Err(DoilyError::Config(_))
        ));
        assert!(matches!(
            DoilyConfig::from_json(r#"{ "canvas_width": 0 }"#),
            Err(DoilyError::Config(_))
        ));
        let mut config = DoilyConfig::default();
        config.brush.width = 40.0;
        assert_eq!(config.validate(), Err(DoilyError::InvalidBrushWidth(40.0)));
    }

    #[test]
    fn test_json_roundtrip() {
        let mut config = DoilyConfig::default();
        config.show_sector_lines = false;
        let json = config.to_json().unwrap();
        assert_eq!(DoilyConfig::from_json(&json).unwrap(), config);
    }
}
