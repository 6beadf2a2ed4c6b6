//! Occupancy of a single board cell.

/// What occupies a cell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Tile {
    /// No piece.
    #[default]
    Empty,
    /// A piece of the first player (drawn black).
    PlayerA,
    /// A piece of the second player (drawn white).
    PlayerB,
}

impl Tile {
    /// Both player tiles, in turn order.
    pub const PLAYERS: [Self; 2] = [Self::PlayerA, Self::PlayerB];

    /// Returns the other player's tile. `Empty` maps to itself.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::PlayerA => Self::PlayerB,
            Self::PlayerB => Self::PlayerA,
        }
    }

    /// Returns `true` for either player's tile.
    #[must_use]
    pub const fn is_occupied(self) -> bool {
        !matches!(self, Self::Empty)
    }
}
