//! Error types for the doily core.

use crate::brush::BrushSettings;
use crate::symmetry::SymmetryOrder;
use thiserror::Error;

/// Errors raised by the ledger, symmetry configuration, session and gallery.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DoilyError {
    /// Undo or redo was requested with nothing to undo or redo.
    #[error("Nothing to undo or redo")]
    EmptyHistory,
    /// A primitive was appended or a stroke committed while no stroke is open.
    #[error("No stroke is open")]
    NoOpenStroke,
    /// A stroke was started while another one is still open.
    #[error("A stroke is already in progress")]
    StrokeInProgress,
    /// The handle does not refer to the currently open stroke.
    #[error("Stroke handle does not match the open stroke")]
    StaleHandle,
    /// Sector count outside the supported range.
    #[error(
        "Invalid symmetry order {0}: must be between {min} and {max}",
        min = SymmetryOrder::MIN,
        max = SymmetryOrder::MAX
    )]
    InvalidSymmetryOrder(u32),
    /// Brush width outside the supported range.
    #[error(
        "Invalid brush width {0}: must be between {min} and {max}",
        min = BrushSettings::MIN_WIDTH,
        max = BrushSettings::MAX_WIDTH
    )]
    InvalidBrushWidth(f64),
    /// The gallery already holds its maximum number of drawings.
    #[error("Gallery is full ({capacity} drawings), delete a drawing first")]
    GalleryFull { capacity: usize },
    /// No drawing is stored at the given gallery slot.
    #[error("Gallery slot {0} is empty")]
    GallerySlotEmpty(usize),
    /// Configuration could not be parsed or failed validation.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type for doily core operations.
pub type DoilyResult<T> = Result<T, DoilyError>;

impl From<serde_json::Error> for DoilyError {
    fn from(err: serde_json::Error) -> Self {
        DoilyError::Config(err.to_string())
    }
}
