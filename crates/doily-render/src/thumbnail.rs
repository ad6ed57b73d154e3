//! Smooth-scaled gallery thumbnails.

use crate::renderer::{RenderError, RenderResult};
use doily_core::RasterSnapshot;
use image::RgbaImage;
use image::imageops::{self, FilterType};

/// Padding left around a thumbnail inside its gallery slot.
pub const THUMBNAIL_MARGIN: u32 = 10;

/// Scale `snapshot` to a `size` x `size` square.
pub fn thumbnail(snapshot: &RasterSnapshot, size: u32) -> RenderResult<RasterSnapshot> {
    let (width, height) = (snapshot.width, snapshot.height);
    if size == 0 {
        return Err(RenderError::InvalidSize { width: size, height: size });
    }
    let source = RgbaImage::from_raw(width, height, snapshot.rgba_data.clone())
        .ok_or(RenderError::InvalidImage { width, height })?;

    let scaled = imageops::resize(&source, size, size, FilterType::Triangle);
    Ok(RasterSnapshot {
        width: scaled.width(),
        height: scaled.height(),
        rgba_data: scaled.into_raw(),
    })
}

/// Thumbnail that fits a gallery slot of the given height.
pub fn thumbnail_for_slot(
    snapshot: &RasterSnapshot,
    slot_height: u32,
) -> RenderResult<RasterSnapshot> {
    thumbnail(snapshot, slot_height.saturating_sub(THUMBNAIL_MARGIN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thumbnail_size() {
        let mut source = RasterSnapshot::blank(80, 80);
        for px in source.rgba_data.chunks_exact_mut(4) {
            px.copy_from_slice(&[0, 255, 0, 255]);
        }
        let thumb = thumbnail(&source, 20).unwrap();
        assert_eq!((thumb.width, thumb.height), (20, 20));
        assert_eq!(thumb.rgba_data.len(), 20 * 20 * 4);
        let [r, g, b, a] = thumb.pixel(10, 10).unwrap();
        assert!(r <= 1 && g >= 254 && b <= 1 && a >= 254, "{:?}", [r, g, b, a]);
    }

    #[test]
    fn test_slot_margin() {
        let source = RasterSnapshot::blank(40, 40);
        let thumb = thumbnail_for_slot(&source, 30).unwrap();
        assert_eq!(thumb.width, 20);
        assert!(thumbnail_for_slot(&source, 5).is_err());
    }

    #[test]
    fn test_mismatched_buffer() {
        let source = RasterSnapshot {
            rgba_data: vec![0; 12],
            width: 4,
            height: 4,
        };
        assert!(matches!(
            thumbnail(&source, 2),
            Err(RenderError::InvalidImage { width: 4, height: 4 })
        ));
    }
}
