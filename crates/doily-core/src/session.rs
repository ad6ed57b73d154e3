//! Drawing session: turns pointer input into strokes, renders them live and
//! replays the ledger on undo, redo and sector changes.

use crate::brush::{BrushSettings, SerializableColor};
use crate::compositor::{apply_primitive, replay};
use crate::config::DoilyConfig;
use crate::error::{DoilyError, DoilyResult};
use crate::geometry::Primitive;
use crate::input::InputEvent;
use crate::ledger::{Stroke, StrokeHandle, StrokeLedger};
use crate::surface::RasterSurface;
use crate::symmetry::{SymmetryConfig, SymmetryOrder};
use kurbo::Point;

/// Whether a stroke is being drawn.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Drawing {
        handle: StrokeHandle,
        /// Last pointer position, where the next segment starts.
        last: Point,
    },
}

/// A drawing session over a raster surface.
#[derive(Debug)]
pub struct DrawSession<S: RasterSurface> {
    ledger: StrokeLedger,
    symmetry: SymmetryConfig,
    brush: BrushSettings,
    surface: S,
    state: SessionState,
}

impl<S: RasterSurface> DrawSession<S> {
    /// Create a session drawing onto `surface`.
    pub fn new(config: &DoilyConfig, mut surface: S) -> Self {
        surface.clear();
        Self {
            ledger: StrokeLedger::new(),
            symmetry: config.symmetry(),
            brush: config.brush,
            surface,
            state: SessionState::Idle,
        }
    }

    /// Dispatch a pointer event.
    pub fn handle_input(&mut self, event: InputEvent) -> DoilyResult<()> {
        match event {
            InputEvent::Press { position } => self.press(position),
            InputEvent::Drag { position } => self.drag(position),
            InputEvent::Release { .. } => self.release(),
        }
    }

    /// Start a stroke at `position` and draw its start point.
    pub fn press(&mut self, position: Point) -> DoilyResult<()> {
        let handle = self.ledger.begin_stroke(self.brush)?;
        self.state = SessionState::Drawing {
            handle,
            last: position,
        };
        self.record(handle, Primitive::Point(position))
    }

    /// Extend the open stroke with a segment to `position`.
    pub fn drag(&mut self, position: Point) -> DoilyResult<()> {
        let SessionState::Drawing { handle, last } = self.state else {
            log::warn!("Drag at {:?} without an open stroke", position);
            return Err(DoilyError::NoOpenStroke);
        };
        self.state = SessionState::Drawing {
            handle,
            last: position,
        };
        self.record(handle, Primitive::segment(last, position))
    }

    /// Commit the open stroke.
    pub fn release(&mut self) -> DoilyResult<()> {
        let SessionState::Drawing { handle, .. } = self.state else {
            log::warn!("Release without an open stroke");
            return Err(DoilyError::NoOpenStroke);
        };
        self.ledger.commit_stroke(handle)?;
        self.state = SessionState::Idle;
        Ok(())
    }

    /// Append to the open stroke and draw with the settings it started with,
    /// so brush changes mid-stroke only affect the next stroke.
    fn record(&mut self, handle: StrokeHandle, primitive: Primitive) -> DoilyResult<()> {
        self.ledger.append_primitive(handle, primitive)?;
        let settings = self
            .ledger
            .open_stroke()
            .map(Stroke::settings)
            .ok_or(DoilyError::NoOpenStroke)?;
        apply_primitive(&primitive, settings, &self.symmetry, &mut self.surface);
        Ok(())
    }

    fn ensure_idle(&self) -> DoilyResult<()> {
        match self.state {
            SessionState::Idle => Ok(()),
            SessionState::Drawing { .. } => Err(DoilyError::StrokeInProgress),
        }
    }

    /// Remove the most recent stroke and redraw.
    pub fn undo(&mut self) -> DoilyResult<()> {
        self.ensure_idle()?;
        self.ledger.undo()?;
        self.redraw();
        Ok(())
    }

    /// Restore the most recently undone stroke and redraw.
    pub fn redo(&mut self) -> DoilyResult<()> {
        self.ensure_idle()?;
        self.ledger.redo()?;
        self.redraw();
        Ok(())
    }

    /// Erase the drawing and forget all history.
    pub fn clear(&mut self) {
        self.ledger.clear();
        self.state = SessionState::Idle;
        self.surface.clear();
        log::debug!("Cleared drawing");
    }

    /// Repaint the surface from the ledger, including a stroke still being drawn.
    pub fn redraw(&mut self) {
        replay(&self.ledger, &self.symmetry, &mut self.surface);
        if let Some(open) = self.ledger.open_stroke() {
            for primitive in open.primitives() {
                apply_primitive(primitive, open.settings(), &self.symmetry, &mut self.surface);
            }
        }
    }

    /// Change the number of sectors and redraw everything under the new count.
    pub fn set_sector_count(&mut self, sectors: u32) -> DoilyResult<()> {
        let order = SymmetryOrder::new(sectors)?;
        if order == self.symmetry.order {
            return Ok(());
        }
        log::info!("Sector count {} -> {}", self.symmetry.order.get(), sectors);
        self.symmetry = self.symmetry.with_order(order);
        self.redraw();
        Ok(())
    }

    pub fn set_brush_color(&mut self, color: impl Into<SerializableColor>) {
        self.brush.color = color.into();
    }

    pub fn set_brush_width(&mut self, width: f64) -> DoilyResult<()> {
        self.brush.width = BrushSettings::validate_width(width)?;
        Ok(())
    }

    pub fn toggle_reflection(&mut self) {
        self.brush.reflect = !self.brush.reflect;
    }

    pub fn toggle_erase(&mut self) {
        self.brush.erase = !self.brush.erase;
    }

    /// Live brush applied to the next stroke.
    pub fn brush(&self) -> &BrushSettings {
        &self.brush
    }

    pub fn symmetry(&self) -> &SymmetryConfig {
        &self.symmetry
    }

    pub fn ledger(&self) -> &StrokeLedger {
        &self.ledger
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, SessionState::Drawing { .. })
    }

    pub fn can_undo(&self) -> bool {
        self.ledger.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.ledger.can_redo()
    }

    /// The raster holding the current drawing.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
