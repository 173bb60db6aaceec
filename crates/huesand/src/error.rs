//! Error kinds raised by grid construction, queries and placement.

use thiserror::Error;

/// `InvalidDimensions` is fatal: the grid never comes into existence.
/// The other two are recoverable and are absorbed by the input adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cannot build a grid from {width}x{height} px with cell size {cell_size}")]
    InvalidDimensions {
        width: u32,
        height: u32,
        cell_size: u32,
    },
    #[error("cell ({col}, {row}) is outside the {cols}x{rows} grid")]
    OutOfBounds {
        col: i32,
        row: i32,
        cols: usize,
        rows: usize,
    },
    #[error("cell ({col}, {row}) already holds a particle")]
    CellOccupied { col: usize, row: usize },
}

impl GridError {
    /// True for errors the frame loop is expected to swallow.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::InvalidDimensions { .. })
    }
}
