//! Read-only view of the game state consumed by rendering and hit-testing.

use crate::{
    coords::{AxialCoords, StorageCoords},
    tile::Tile,
};

/// A storage index with no corresponding board cell was queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("no board cell at row {row}, column {col}")]
pub struct OffBoardError {
    /// Queried row.
    pub row: i32,
    /// Queried column.
    pub col: i32,
}

impl From<StorageCoords> for OffBoardError {
    fn from(pos: StorageCoords) -> Self {
        Self {
            row: pos.row,
            col: pos.col,
        }
    }
}

/// Game state as seen by the board view.
///
/// The view never mutates the model; it only queries it once per cell per
/// frame, so implementations may change freely between frames.
pub trait BoardModel {
    /// Number of cells from the centre to an edge, inclusive of the centre.
    fn side_len(&self) -> u16;

    /// Returns the tile stored at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`OffBoardError`] if `pos` is not a board cell.
    fn tile_at(&self, pos: StorageCoords) -> Result<Tile, OffBoardError>;

    /// Optional hint value shown for an empty cell while hints are enabled.
    fn hint_at(&self, coords: AxialCoords) -> Option<u32> {
        let _ = coords;
        None
    }
}

impl<M: BoardModel + ?Sized> BoardModel for &M {
    fn side_len(&self) -> u16 {
        (**self).side_len()
    }

    fn tile_at(&self, pos: StorageCoords) -> Result<Tile, OffBoardError> {
        (**self).tile_at(pos)
    }

    fn hint_at(&self, coords: AxialCoords) -> Option<u32> {
        (**self).hint_at(coords)
    }
}
