//! Doily Render Library
//!
//! CPU rasterization for the doily maker: a tiny-skia surface the
//! compositor draws onto, the black backdrop with sector guides, frame
//! composition, and gallery thumbnails.

mod background;
mod pixmap;
mod renderer;
mod thumbnail;

pub use background::BackgroundLayer;
pub use pixmap::PixmapSurface;
pub use renderer::{RenderError, RenderResult, compose};
pub use thumbnail::{THUMBNAIL_MARGIN, thumbnail, thumbnail_for_slot};
