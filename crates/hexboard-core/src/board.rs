//! In-memory board model.
//!
//! [`HexBoard`] stores one [`Tile`] per storage index and answers the
//! [`BoardModel`] queries. It knows nothing about game rules beyond occupancy.

use crate::{
    coords::{self, AxialCoords, StorageCoords},
    model::{BoardModel, OffBoardError},
    tile::Tile,
};

/// A hexagonal board backed by its bounding storage square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexBoard {
    side_len: u16,
    tiles: Vec<Tile>,
}

impl HexBoard {
    /// Creates an empty board.
    ///
    /// # Panics
    ///
    /// Panics if `side_len` is zero.
    #[must_use]
    pub fn new(side_len: u16) -> Self {
        assert!(side_len > 0, "board side length must be at least 1");
        let len = usize::try_from(coords::board_len(side_len)).unwrap_or_default();
        Self {
            side_len,
            tiles: vec![Tile::Empty; len * len],
        }
    }

    /// Creates a board in the opening position: the six cells around the
    /// centre alternate between the two players, starting with
    /// [`Tile::PlayerA`] to the east. A side-1 board has no such cells and
    /// starts empty.
    ///
    /// # Panics
    ///
    /// Panics if `side_len` is zero.
    #[must_use]
    pub fn new_game(side_len: u16) -> Self {
        let mut board = Self::new(side_len);
        let players = Tile::PLAYERS.into_iter().cycle();
        for (coords, tile) in AxialCoords::ORIGIN.neighbours().into_iter().zip(players) {
            if let Some(index) = board.index_of(coords) {
                board.tiles[index] = tile;
            }
        }
        board
    }

    fn index_of(&self, coords: AxialCoords) -> Option<usize> {
        let pos = coords.to_storage(self.side_len)?;
        self.storage_index(pos)
    }

    fn storage_index(&self, pos: StorageCoords) -> Option<usize> {
        coords::to_axial(pos, self.side_len)?;
        let len = coords::board_len(self.side_len);
        usize::try_from(pos.row * len + pos.col).ok()
    }

    /// Returns the tile at `coords`, or `None` if it is off the board.
    #[must_use]
    pub fn tile(&self, coords: AxialCoords) -> Option<Tile> {
        self.index_of(coords).map(|i| self.tiles[i])
    }

    /// Stores `tile` at `coords`.
    ///
    /// # Errors
    ///
    /// Returns [`OffBoardError`] if `coords` is not on this board. The error
    /// reports the storage index the coordinate would occupy.
    pub fn set_tile(&mut self, coords: AxialCoords, tile: Tile) -> Result<(), OffBoardError> {
        let index = self.index_of(coords).ok_or_else(|| self.off_board(coords))?;
        self.tiles[index] = tile;
        Ok(())
    }

    fn off_board(&self, coords: AxialCoords) -> OffBoardError {
        let radius = i32::from(self.side_len) - 1;
        OffBoardError {
            row: coords.r() + radius,
            col: coords.q() + radius + coords.r().div_euclid(2),
        }
    }

    /// Number of cells holding `tile`.
    #[must_use]
    pub fn count(&self, tile: Tile) -> usize {
        coords::valid_cells(self.side_len)
            .filter(|&c| self.tile(c) == Some(tile))
            .count()
    }

    /// On-board neighbours of `coords`.
    pub fn neighbours(&self, coords: AxialCoords) -> impl Iterator<Item = AxialCoords> + '_ {
        coords
            .neighbours()
            .into_iter()
            .filter(|&c| self.index_of(c).is_some())
    }

    /// Returns `true` if every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.count(Tile::Empty) == 0
    }
}

impl BoardModel for HexBoard {
    fn side_len(&self) -> u16 {
        self.side_len
    }

    fn tile_at(&self, pos: StorageCoords) -> Result<Tile, OffBoardError> {
        self.storage_index(pos)
            .map(|i| self.tiles[i])
            .ok_or_else(|| pos.into())
    }

    /// Number of occupied neighbours of an empty cell.
    fn hint_at(&self, coords: AxialCoords) -> Option<u32> {
        if self.tile(coords)? != Tile::Empty {
            return None;
        }
        let occupied = self
            .neighbours(coords)
            .filter(|&c| self.tile(c).is_some_and(Tile::is_occupied))
            .count();
        u32::try_from(occupied).ok()
    }
}
