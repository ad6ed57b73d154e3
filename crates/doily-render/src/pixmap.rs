//! CPU raster surface backed by a tiny-skia pixmap.

use crate::renderer::{RenderError, RenderResult};
use doily_core::{
    CompositeMode, DoilyConfig, Primitive, RasterSnapshot, RasterSurface, SerializableColor,
};
use kurbo::{Rect, Size};
use tiny_skia::{BlendMode, Color, LineCap, Paint, Path, PathBuilder, Pixmap, Stroke, Transform};

/// Amount the dot diameter is shrunk relative to the brush width, so the
/// stroked outline closes into a solid dot.
const DOT_SHRINK: f64 = 0.9;

/// Anti-aliased transparent raster the user draws onto.
///
/// Painting replaces pixels (source compositing); erasing clears them.
#[derive(Debug, Clone)]
pub struct PixmapSurface {
    pixmap: Pixmap,
}

impl PixmapSurface {
    /// Create a fully transparent surface.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        let pixmap = Pixmap::new(width, height).ok_or(RenderError::InvalidSize { width, height })?;
        Ok(Self { pixmap })
    }

    /// Create a surface sized to the configured canvas.
    pub fn from_config(config: &DoilyConfig) -> RenderResult<Self> {
        Self::new(config.canvas_width, config.canvas_height)
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Copy of the current raster with straight alpha.
    pub fn snapshot(&self) -> RasterSnapshot {
        snapshot_of(&self.pixmap)
    }
}

/// Convert a premultiplied pixmap into a straight-alpha snapshot.
pub(crate) fn snapshot_of(pixmap: &Pixmap) -> RasterSnapshot {
    let mut rgba_data = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let color = px.demultiply();
        rgba_data.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
    }
    RasterSnapshot {
        rgba_data,
        width: pixmap.width(),
        height: pixmap.height(),
    }
}

pub(crate) fn to_skia_color(color: SerializableColor) -> Color {
    Color::from_rgba8(color.r, color.g, color.b, color.a)
}

/// Build the outline path stroked for a primitive.
fn primitive_path(primitive: &Primitive, stroke_width: f64) -> Option<Path> {
    match primitive {
        Primitive::Point(center) => {
            let radius = (stroke_width - DOT_SHRINK) / 2.0;
            if radius <= 0.0 {
                return None;
            }
            PathBuilder::from_circle(center.x as f32, center.y as f32, radius as f32)
        }
        Primitive::Segment(line) => {
            let mut pb = PathBuilder::new();
            pb.move_to(line.p0.x as f32, line.p0.y as f32);
            pb.line_to(line.p1.x as f32, line.p1.y as f32);
            pb.finish()
        }
    }
}

fn paint_for(mode: CompositeMode) -> Paint<'static> {
    let mut paint = Paint {
        anti_alias: true,
        ..Paint::default()
    };
    match mode {
        CompositeMode::Paint(color) => {
            paint.set_color(to_skia_color(color));
            paint.blend_mode = BlendMode::Source;
        }
        CompositeMode::Erase => {
            paint.blend_mode = BlendMode::Clear;
        }
    }
    paint
}

impl RasterSurface for PixmapSurface {
    fn size(&self) -> Size {
        Size::new(f64::from(self.pixmap.width()), f64::from(self.pixmap.height()))
    }

    fn fill(&mut self, color: SerializableColor) {
        self.pixmap.fill(to_skia_color(color));
    }

    fn draw_shape(&mut self, shape: &Primitive, stroke_width: f64, mode: CompositeMode) {
        let Some(path) = primitive_path(shape, stroke_width) else {
            log::trace!("Skipping degenerate primitive {:?}", shape);
            return;
        };
        let stroke = Stroke {
            width: stroke_width as f32,
            line_cap: LineCap::Square,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint_for(mode), &stroke, Transform::identity(), None);
    }

    fn clear_region(&mut self, rect: Rect) {
        let Some(rect) = tiny_skia::Rect::from_ltrb(
            rect.x0 as f32,
            rect.y0 as f32,
            rect.x1 as f32,
            rect.y1 as f32,
        ) else {
            return;
        };
        self.pixmap
            .fill_rect(rect, &paint_for(CompositeMode::Erase), Transform::identity(), None);
    }

    fn clear(&mut self) {
        self.pixmap.fill(Color::TRANSPARENT);
    }
}
