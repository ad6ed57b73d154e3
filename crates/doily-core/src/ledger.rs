//! Stroke recording with undo/redo.

use crate::brush::BrushSettings;
use crate::error::{DoilyError, DoilyResult};
use crate::geometry::Primitive;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a stroke.
pub type StrokeId = Uuid;

/// Handle to the stroke currently being drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StrokeHandle(StrokeId);

impl StrokeHandle {
    pub fn id(&self) -> StrokeId {
        self.0
    }
}

/// One continuous drag: its primitives in drawing order plus the brush
/// settings active when it started.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    id: StrokeId,
    settings: BrushSettings,
    primitives: Vec<Primitive>,
}

impl Stroke {
    fn new(settings: BrushSettings) -> Self {
        Self {
            id: Uuid::new_v4(),
            settings,
            primitives: Vec::new(),
        }
    }

    pub fn id(&self) -> StrokeId {
        self.id
    }

    /// Brush settings captured when the stroke started.
    pub fn settings(&self) -> &BrushSettings {
        &self.settings
    }

    /// Primitives in recorded order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// The dot recorded at the press position, if any.
    pub fn start_point(&self) -> Option<Point> {
        match self.primitives.first() {
            Some(Primitive::Point(p)) => Some(*p),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

/// Committed strokes split into an undo sequence (chronological) and a redo
/// sequence (most recently undone last), plus at most one open stroke.
#[derive(Debug, Clone, Default)]
pub struct StrokeLedger {
    undo_stack: Vec<Stroke>,
    redo_stack: Vec<Stroke>,
    open: Option<Stroke>,
}

impl StrokeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new stroke with a snapshot of `settings`.
    ///
    /// Starting a stroke discards the redo history.
    pub fn begin_stroke(&mut self, settings: BrushSettings) -> DoilyResult<StrokeHandle> {
        if self.open.is_some() {
            return Err(DoilyError::StrokeInProgress);
        }
        let stroke = Stroke::new(settings);
        let handle = StrokeHandle(stroke.id);
        self.redo_stack.clear();
        self.open = Some(stroke);
        Ok(handle)
    }

    /// Append a primitive to the open stroke.
    pub fn append_primitive(
        &mut self,
        handle: StrokeHandle,
        primitive: Primitive,
    ) -> DoilyResult<()> {
        let stroke = self.open_stroke_mut(handle)?;
        stroke.primitives.push(primitive);
        Ok(())
    }

    /// Move the open stroke to the end of the undo sequence.
    pub fn commit_stroke(&mut self, handle: StrokeHandle) -> DoilyResult<&Stroke> {
        self.open_stroke_mut(handle)?;
        let stroke = self.open.take().ok_or(DoilyError::NoOpenStroke)?;
        log::debug!("Committed stroke {} ({} primitives)", stroke.id, stroke.len());
        self.undo_stack.push(stroke);
        self.undo_stack.last().ok_or(DoilyError::NoOpenStroke)
    }

    fn open_stroke_mut(&mut self, handle: StrokeHandle) -> DoilyResult<&mut Stroke> {
        match self.open.as_mut() {
            Some(stroke) if stroke.id == handle.0 => Ok(stroke),
            Some(_) => Err(DoilyError::StaleHandle),
            None => Err(DoilyError::NoOpenStroke),
        }
    }

    /// The stroke currently being drawn, if any.
    pub fn open_stroke(&self) -> Option<&Stroke> {
        self.open.as_ref()
    }

    pub fn is_drawing(&self) -> bool {
        self.open.is_some()
    }

    /// Move the most recent stroke to the redo sequence.
    pub fn undo(&mut self) -> DoilyResult<&Stroke> {
        let stroke = self.undo_stack.pop().ok_or(DoilyError::EmptyHistory)?;
        log::debug!("Undo stroke {}", stroke.id);
        self.redo_stack.push(stroke);
        self.redo_stack.last().ok_or(DoilyError::EmptyHistory)
    }

    /// Move the most recently undone stroke back to the undo sequence.
    pub fn redo(&mut self) -> DoilyResult<&Stroke> {
        let stroke = self.redo_stack.pop().ok_or(DoilyError::EmptyHistory)?;
        log::debug!("Redo stroke {}", stroke.id);
        self.undo_stack.push(stroke);
        self.undo_stack.last().ok_or(DoilyError::EmptyHistory)
    }

    /// Drop every stroke, including one still being drawn.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.open = None;
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Strokes that make up the current drawing, oldest first.
    pub fn strokes(&self) -> &[Stroke] {
        &self.undo_stack
    }

    /// Undone strokes, most recently undone last.
    pub fn undone(&self) -> &[Stroke] {
        &self.redo_stack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit(ledger: &mut StrokeLedger, x: f64) -> StrokeId {
        let handle = ledger.begin_stroke(BrushSettings::default()).unwrap();
        ledger.append_primitive(handle, Primitive::point((x, 0.0))).unwrap();
        ledger.commit_stroke(handle).unwrap().id()
    }

    fn ids(strokes: &[Stroke]) -> Vec<StrokeId> {
        strokes.iter().map(Stroke::id).collect()
    }

    #[test]
    fn test_empty_ledger() {
        let mut ledger = StrokeLedger::new();
        assert!(!ledger.can_undo());
        assert!(!ledger.can_redo());
        assert_eq!(ledger.undo().unwrap_err(), DoilyError::EmptyHistory);
        assert_eq!(ledger.redo().unwrap_err(), DoilyError::EmptyHistory);
    }

    #[test]
    fn test_commit_records_settings_and_primitives() {
        let mut ledger = StrokeLedger::new();
        let settings = BrushSettings {
            width: 7.0,
            erase: true,
            ..BrushSettings::default()
        };
        let handle = ledger.begin_stroke(settings).unwrap();
        assert!(ledger.is_drawing());
        ledger.append_primitive(handle, Primitive::point((1.0, 2.0))).unwrap();
        ledger
            .append_primitive(handle, Primitive::segment((1.0, 2.0), (3.0, 4.0)))
            .unwrap();
        let stroke = ledger.commit_stroke(handle).unwrap().clone();

        assert!(!ledger.is_drawing());
        assert_eq!(stroke.settings(), &settings);
        assert_eq!(stroke.len(), 2);
        assert_eq!(stroke.start_point(), Some(Point::new(1.0, 2.0)));
        assert_eq!(ledger.strokes(), &[stroke]);
    }

    #[test]
    fn test_append_without_open_stroke() {
        let mut ledger = StrokeLedger::new();
        let handle = ledger.begin_stroke(BrushSettings::default()).unwrap();
        ledger.commit_stroke(handle).unwrap();
        assert_eq!(
            ledger.append_primitive(handle, Primitive::point((0.0, 0.0))),
            Err(DoilyError::NoOpenStroke)
        );
        assert_eq!(ledger.commit_stroke(handle).unwrap_err(), DoilyError::NoOpenStroke);
    }

    #[test]
    fn test_begin_while_drawing() {
        let mut ledger = StrokeLedger::new();
        let first = ledger.begin_stroke(BrushSettings::default()).unwrap();
        assert_eq!(
            ledger.begin_stroke(BrushSettings::default()).unwrap_err(),
            DoilyError::StrokeInProgress
        );
        // The original stroke is still open and usable.
        assert!(ledger.append_primitive(first, Primitive::point((0.0, 0.0))).is_ok());
    }

    #[test]
    fn test_undo_redo_sequence() {
        let mut ledger = StrokeLedger::new();
        let a = commit(&mut ledger, 1.0);
        let b = commit(&mut ledger, 2.0);
        let c = commit(&mut ledger, 3.0);

        assert_eq!(ledger.undo().unwrap().id(), c);
        assert_eq!(ids(ledger.strokes()), vec![a, b]);
        assert_eq!(ids(ledger.undone()), vec![c]);

        assert_eq!(ledger.undo().unwrap().id(), b);
        assert_eq!(ids(ledger.strokes()), vec![a]);
        assert_eq!(ids(ledger.undone()), vec![c, b]);

        assert_eq!(ledger.redo().unwrap().id(), b);
        assert_eq!(ids(ledger.strokes()), vec![a, b]);
        assert_eq!(ids(ledger.undone()), vec![c]);
    }

    #[test]
    fn test_undo_then_redo_restores_content() {
        let mut ledger = StrokeLedger::new();
        commit(&mut ledger, 1.0);
        commit(&mut ledger, 2.0);
        let before = ledger.strokes().to_vec();

        ledger.undo().unwrap();
        ledger.redo().unwrap();
        assert_eq!(ledger.strokes(), before.as_slice());
        assert!(!ledger.can_redo());
    }

    #[test]
    fn test_new_stroke_clears_redo() {
        let mut ledger = StrokeLedger::new();
        commit(&mut ledger, 1.0);
        ledger.undo().unwrap();
        assert!(ledger.can_redo());

        ledger.begin_stroke(BrushSettings::default()).unwrap();
        assert!(!ledger.can_redo());
    }

    #[test]
    fn test_stale_handle() {
        let mut ledger = StrokeLedger::new();
        let old = ledger.begin_stroke(BrushSettings::default()).unwrap();
        ledger.commit_stroke(old).unwrap();
        ledger.begin_stroke(BrushSettings::default()).unwrap();
        assert_eq!(
            ledger.append_primitive(old, Primitive::point((0.0, 0.0))),
            Err(DoilyError::StaleHandle)
        );
    }

    #[test]
    fn test_clear() {
        let mut ledger = StrokeLedger::new();
        commit(&mut ledger, 1.0);
        commit(&mut ledger, 2.0);
        ledger.undo().unwrap();
        ledger.clear();
        assert!(!ledger.can_undo());
        assert!(!ledger.can_redo());
        assert!(ledger.strokes().is_empty());
    }
}
