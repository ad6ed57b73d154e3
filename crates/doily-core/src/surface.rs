//! Raster surface abstraction consumed by the compositor.

use crate::brush::{CompositeMode, SerializableColor};
use crate::geometry::Primitive;
use kurbo::{Point, Rect, Size};

/// A 2D drawing surface with paint/erase compositing.
///
/// Implementations either rasterize (see the render crate) or record calls
/// for inspection.
pub trait RasterSurface {
    /// Surface size in pixels.
    fn size(&self) -> Size;

    /// Fill the whole surface with a colour, replacing existing pixels.
    fn fill(&mut self, color: SerializableColor);

    /// Stroke a primitive with the given width and compositing mode.
    fn draw_shape(&mut self, shape: &Primitive, stroke_width: f64, mode: CompositeMode);

    /// Reset the pixels inside `rect` to full transparency.
    fn clear_region(&mut self, rect: Rect);

    /// Reset the whole surface to full transparency.
    fn clear(&mut self) {
        let bounds = Rect::from_origin_size(Point::ZERO, self.size());
        self.clear_region(bounds);
    }
}

/// Owned copy of a raster in straight-alpha RGBA8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterSnapshot {
    /// RGBA pixel data (4 bytes per pixel).
    pub rgba_data: Vec<u8>,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

impl RasterSnapshot {
    /// A fully transparent raster.
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            rgba_data: vec![0; width as usize * height as usize * 4],
            width,
            height,
        }
    }

    /// True when every pixel is fully transparent.
    pub fn is_blank(&self) -> bool {
        self.rgba_data.chunks_exact(4).all(|px| px[3] == 0)
    }

    /// RGBA of the pixel at (x, y), if inside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.rgba_data.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// A single recorded operation on a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Fill(SerializableColor),
    Draw {
        shape: Primitive,
        stroke_width: f64,
        mode: CompositeMode,
    },
    ClearRegion(Rect),
}

/// Surface that records every call instead of rasterizing.
///
/// A clear of the full surface drops earlier draw calls, so `draws()` always
/// lists what is currently visible.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Size,
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ops: Vec::new(),
        }
    }

    /// All operations since the last full clear, oldest first.
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Draw calls since the last full clear.
    pub fn draws(&self) -> impl Iterator<Item = (&Primitive, f64, CompositeMode)> {
        self.ops.iter().filter_map(|op| match op {
            SurfaceOp::Draw {
                shape,
                stroke_width,
                mode,
            } => Some((shape, *stroke_width, *mode)),
            _ => None,
        })
    }

    pub fn draw_count(&self) -> usize {
        self.draws().count()
    }

    /// True when nothing has been drawn since the last full clear.
    pub fn is_blank(&self) -> bool {
        self.ops
            .iter()
            .all(|op| matches!(op, SurfaceOp::ClearRegion(_)))
    }

    fn covers_surface(&self, rect: Rect) -> bool {
        rect.x0 <= 0.0
            && rect.y0 <= 0.0
            && rect.x1 >= self.size.width
            && rect.y1 >= self.size.height
    }
}

impl RasterSurface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn fill(&mut self, color: SerializableColor) {
        self.ops.clear();
        self.ops.push(SurfaceOp::Fill(color));
    }

    fn draw_shape(&mut self, shape: &Primitive, stroke_width: f64, mode: CompositeMode) {
        self.ops.push(SurfaceOp::Draw {
            shape: *shape,
            stroke_width,
            mode,
        });
    }

    fn clear_region(&mut self, rect: Rect) {
        if self.covers_surface(rect) {
            self.ops.clear();
        }
        self.ops.push(SurfaceOp::ClearRegion(rect));
    }
}
