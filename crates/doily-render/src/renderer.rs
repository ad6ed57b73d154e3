//! Renderer errors and final frame composition.

use crate::background::BackgroundLayer;
use crate::pixmap::{PixmapSurface, snapshot_of};
use doily_core::RasterSnapshot;
use thiserror::Error;
use tiny_skia::{PixmapPaint, Transform};

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid surface size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("Image buffer does not match {width}x{height}")]
    InvalidImage { width: u32, height: u32 },
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Flatten the drawing over the background into the frame shown on screen.
pub fn compose(background: &BackgroundLayer, drawing: &PixmapSurface) -> RasterSnapshot {
    let mut frame = background.pixmap().clone();
    frame.draw_pixmap(
        0,
        0,
        drawing.pixmap().as_ref(),
        &PixmapPaint::default(),
        Transform::identity(),
        None,
    );
    snapshot_of(&frame)
}
