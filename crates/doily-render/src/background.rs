//! Opaque backdrop with optional sector guide lines.

use crate::pixmap::to_skia_color;
use crate::renderer::{RenderError, RenderResult};
use doily_core::{DoilyConfig, SerializableColor, SymmetryConfig, sector_guides};
use tiny_skia::{Paint, PathBuilder, Pixmap, Stroke, Transform};

/// Width of the sector guide lines.
const GUIDE_WIDTH: f32 = 1.0;

/// Layer drawn behind the user's drawing.
#[derive(Debug, Clone)]
pub struct BackgroundLayer {
    pixmap: Pixmap,
    show_sector_lines: bool,
    background_color: SerializableColor,
    guide_color: SerializableColor,
}

impl BackgroundLayer {
    /// Create a background sized to the canvas. Call [`draw`](Self::draw)
    /// before the first frame.
    pub fn new(config: &DoilyConfig) -> RenderResult<Self> {
        let (width, height) = (config.canvas_width, config.canvas_height);
        let pixmap = Pixmap::new(width, height).ok_or(RenderError::InvalidSize { width, height })?;
        Ok(Self {
            pixmap,
            show_sector_lines: config.show_sector_lines,
            background_color: config.background_color,
            guide_color: config.guide_color,
        })
    }

    /// Repaint the backdrop and, if enabled, one guide line per sector angle.
    pub fn draw(&mut self, symmetry: &SymmetryConfig) {
        self.pixmap.fill(to_skia_color(self.background_color));
        if !self.show_sector_lines {
            return;
        }

        let mut paint = Paint::default();
        paint.set_color(to_skia_color(self.guide_color));
        let stroke = Stroke {
            width: GUIDE_WIDTH,
            ..Stroke::default()
        };

        // Spokes reach the top edge of the canvas.
        for guide in sector_guides(symmetry, symmetry.center.y) {
            let mut pb = PathBuilder::new();
            pb.move_to(guide.p0.x as f32, guide.p0.y as f32);
            pb.line_to(guide.p1.x as f32, guide.p1.y as f32);
            if let Some(path) = pb.finish() {
                self.pixmap
                    .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
            }
        }
    }

    /// Flip sector line visibility. The caller redraws afterwards.
    pub fn toggle_sector_lines(&mut self) {
        self.show_sector_lines = !self.show_sector_lines;
    }

    pub fn show_sector_lines(&self) -> bool {
        self.show_sector_lines
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }
}
