//! Doily Core Library
//!
//! Platform-agnostic core of the digital doily maker: strokes are recorded
//! in a ledger with undo/redo, and every primitive is rotated (and
//! optionally mirrored) into a radially symmetric pattern on a raster
//! surface.

pub mod brush;
pub mod compositor;
pub mod config;
pub mod error;
pub mod gallery;
pub mod geometry;
pub mod guides;
pub mod input;
pub mod ledger;
pub mod session;
pub mod surface;
pub mod symmetry;

pub use brush::{BrushSettings, CompositeMode, SerializableColor};
pub use compositor::{apply_primitive, replay, symmetric_images};
pub use config::DoilyConfig;
pub use error::{DoilyError, DoilyResult};
pub use gallery::{Gallery, GalleryEntry, GalleryPager};
pub use geometry::Primitive;
pub use guides::sector_guides;
pub use input::InputEvent;
pub use ledger::{Stroke, StrokeHandle, StrokeId, StrokeLedger};
pub use session::{DrawSession, SessionState};
pub use surface::{RasterSnapshot, RasterSurface, RecordingSurface, SurfaceOp};
pub use symmetry::{SectorAngles, SymmetryConfig, SymmetryOrder};
