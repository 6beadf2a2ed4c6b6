//! Fixed geometry of a board: side length plus the hex size used for drawing and hit-testing.

use crate::{
    coords::{self, AxialCoords, StorageCoords},
    geometry::Point,
    viewport::ViewportTransform,
};

/// Error returned when constructing a [`BoardLayout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LayoutError {
    /// The board would contain no cells.
    #[display("board side length must be at least 1")]
    EmptyBoard,
}

/// Geometry of one board.
///
/// Every drawing and hit-testing path goes through the same layout so the
/// rendered hex centres and the clickable centres can never disagree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    side_len: u16,
    hex_size: f64,
}

impl BoardLayout {
    /// Distance from a hex centre to its corners, in logical units.
    pub const DEFAULT_HEX_SIZE: f64 = 5.0;
    /// Ratio of the drawn hexagon to the full hex size; the rest is a gutter
    /// showing the background between cells.
    pub const CELL_FILL_RATIO: f64 = 0.97;
    /// Ratio of a piece radius to the hex size.
    pub const PIECE_RADIUS_RATIO: f64 = 0.5;
    /// Logical canvas units reserved per storage row/column.
    pub const LOGICAL_UNITS_PER_CELL: f64 = 10.0;

    /// Creates a layout with the default hex size.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::EmptyBoard`] if `side_len` is zero.
    pub fn new(side_len: u16) -> Result<Self, LayoutError> {
        if side_len == 0 {
            return Err(LayoutError::EmptyBoard);
        }
        Ok(Self {
            side_len,
            hex_size: Self::DEFAULT_HEX_SIZE,
        })
    }

    /// Number of cells from the centre to an edge, inclusive of the centre.
    #[must_use]
    pub fn side_len(&self) -> u16 {
        self.side_len
    }

    /// Hex size in logical units.
    #[must_use]
    pub fn hex_size(&self) -> f64 {
        self.hex_size
    }

    /// Side of the bounding storage square, `2·side_len − 1`.
    #[must_use]
    pub fn board_len(&self) -> i32 {
        coords::board_len(self.side_len)
    }

    /// Side of the square logical canvas.
    #[must_use]
    pub fn logical_side(&self) -> f64 {
        f64::from(self.board_len()) * Self::LOGICAL_UNITS_PER_CELL
    }

    /// Returns the viewport transform for this board's logical canvas.
    #[must_use]
    pub fn viewport(&self) -> ViewportTransform {
        ViewportTransform::new(self.logical_side())
    }

    /// Circumradius of the drawn hexagon.
    #[must_use]
    pub fn cell_radius(&self) -> f64 {
        self.hex_size * Self::CELL_FILL_RATIO
    }

    /// Radius of a drawn piece.
    #[must_use]
    pub fn piece_radius(&self) -> f64 {
        self.hex_size * Self::PIECE_RADIUS_RATIO
    }

    /// See [`coords::to_axial`].
    #[must_use]
    pub fn to_axial(&self, pos: StorageCoords) -> Option<AxialCoords> {
        coords::to_axial(pos, self.side_len)
    }

    /// See [`coords::axial_to_pixel`].
    #[must_use]
    pub fn center_of(&self, coords: AxialCoords) -> Point {
        coords::axial_to_pixel(coords, self.hex_size)
    }

    /// See [`coords::nearest_hex`].
    #[must_use]
    pub fn hit_test(&self, logical: Point) -> Option<AxialCoords> {
        coords::nearest_hex(logical, self.side_len, self.hex_size)
    }

    /// Returns `true` if `coords` is a cell of this board.
    #[must_use]
    pub fn contains(&self, coords: AxialCoords) -> bool {
        coords.ring() < i32::from(self.side_len)
    }

    /// See [`coords::storage_coords`].
    #[must_use]
    pub fn storage_coords(&self) -> coords::StorageIter {
        coords::storage_coords(self.side_len)
    }

    /// See [`coords::valid_cells`].
    pub fn valid_cells(&self) -> impl Iterator<Item = AxialCoords> + Clone + use<> {
        coords::valid_cells(self.side_len)
    }

    /// Corners of the drawn hexagon around `center`, in logical units.
    ///
    /// Pointy-top: the first corner is straight up, then clockwise.
    #[must_use]
    pub fn cell_corners(&self, center: Point) -> [Point; 6] {
        let radius = self.cell_radius();
        std::array::from_fn(|i| {
            #[expect(clippy::cast_precision_loss)]
            let angle = (60.0 * i as f64 - 90.0).to_radians();
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
    }
}
