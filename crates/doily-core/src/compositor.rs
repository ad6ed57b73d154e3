//! Symmetric compositor: expands one primitive into its rotated and
//! mirrored copies and draws them, and replays a whole ledger.

use crate::brush::BrushSettings;
use crate::geometry::{Primitive, reflection_about, rotation_about};
use crate::ledger::StrokeLedger;
use crate::surface::RasterSurface;
use crate::symmetry::SymmetryConfig;

/// Every transformed copy of `primitive`, in draw order.
///
/// For each sector angle the rotated original comes first, followed by the
/// rotated mirror image when `reflect` is set. Angles run from 0 to 360
/// inclusive, so the copy at 0° is drawn again at 360°.
pub fn symmetric_images(
    primitive: &Primitive,
    reflect: bool,
    config: &SymmetryConfig,
) -> Vec<Primitive> {
    let mirrored = reflect.then(|| primitive.transformed(reflection_about(config.center.x)));

    let per_angle = if reflect { 2 } else { 1 };
    let mut images = Vec::with_capacity((config.order.get() as usize + 1) * per_angle);
    for angle in config.order.angles() {
        let rotate = rotation_about(angle, config.center);
        images.push(primitive.transformed(rotate));
        if let Some(mirror) = &mirrored {
            images.push(mirror.transformed(rotate));
        }
    }
    images
}

/// Draw the full symmetric image of `primitive` using `settings`.
pub fn apply_primitive<S: RasterSurface + ?Sized>(
    primitive: &Primitive,
    settings: &BrushSettings,
    config: &SymmetryConfig,
    surface: &mut S,
) {
    let mode = settings.composite_mode();
    for image in symmetric_images(primitive, settings.reflect, config) {
        surface.draw_shape(&image, settings.width, mode);
    }
}

/// Clear `surface` and redraw every retained stroke, oldest first, each with
/// the settings it was drawn with.
pub fn replay<S: RasterSurface + ?Sized>(
    ledger: &StrokeLedger,
    config: &SymmetryConfig,
    surface: &mut S,
) {
    surface.clear();

    for stroke in ledger.strokes() {
        for primitive in stroke.primitives() {
            apply_primitive(primitive, stroke.settings(), config, surface);
        }
    }

    log::debug!(
        "Replayed {} strokes with {} sectors",
        ledger.strokes().len(),
        config.order.get()
    );
}
