//! Coordinate systems of the hex board and the conversions between them.
//!
//! Three spaces are involved:
//!
//! - **Storage** ([`StorageCoords`]): `(row, col)` into the bounding square of
//!   side `2·side_len − 1` that over-covers the hexagon. Rows are odd-r offset
//!   rows centred on the middle row.
//! - **Axial** ([`AxialCoords`]): `(q, r)` hex addressing with the board centre
//!   at `(0, 0)`. A board with side length `N` holds exactly the cells with
//!   `max(|q|, |r|, |q + r|) <= N − 1`.
//! - **Logical** ([`Point`]): the pointy-top pixel layout of hex centres before
//!   any viewport scaling.
//!
//! # Examples
//!
//! ```
//! use hexboard_core::{AxialCoords, Point, StorageCoords, coords};
//!
//! // The middle of a side-3 board is the axial origin.
//! let centre = coords::to_axial(StorageCoords::new(2, 2), 3).unwrap();
//! assert_eq!(centre, AxialCoords::ORIGIN);
//!
//! // Corners of the bounding square are not on the board.
//! assert!(coords::to_axial(StorageCoords::new(0, 0), 3).is_none());
//!
//! // Hit-testing the logical origin finds the centre cell.
//! assert_eq!(coords::nearest_hex(Point::ORIGIN, 3, 5.0), Some(AxialCoords::ORIGIN));
//! ```

use std::iter::FusedIterator;

use crate::geometry::Point;

/// Index into the bounding square grid.
///
/// Not every storage index names a board cell; see [`to_axial`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("[{row}, {col}]")]
pub struct StorageCoords {
    /// Row index (0-based, top to bottom).
    pub row: i32,
    /// Column index (0-based, left to right).
    pub col: i32,
}

impl StorageCoords {
    /// Creates a storage index.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// Axial hex coordinates `(q, r)`.
///
/// Values are produced by the mapper functions in this module (or derived
/// from an existing value), so a coordinate always comes from valid hex
/// algebra. Whether it lies on a particular board is a separate question
/// answered by [`AxialCoords::ring`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("({q}, {r})")]
pub struct AxialCoords {
    q: i32,
    r: i32,
}

/// Axial offsets of the six neighbours, starting east and going counter-clockwise.
const NEIGHBOUR_OFFSETS: [(i32, i32); 6] = [(1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1)];

impl AxialCoords {
    /// The board centre.
    pub const ORIGIN: Self = Self { q: 0, r: 0 };

    pub(crate) const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The `q` (column-like) component.
    #[must_use]
    pub const fn q(self) -> i32 {
        self.q
    }

    /// The `r` (row) component.
    #[must_use]
    pub const fn r(self) -> i32 {
        self.r
    }

    /// Hex distance from the board centre.
    #[must_use]
    pub fn ring(self) -> i32 {
        self.q.abs().max(self.r.abs()).max((self.q + self.r).abs())
    }

    /// The six adjacent coordinates, whether or not they are on any board.
    #[must_use]
    pub fn neighbours(self) -> [Self; 6] {
        NEIGHBOUR_OFFSETS.map(|(dq, dr)| Self::new(self.q + dq, self.r + dr))
    }

    /// Converts back into the storage index this coordinate occupies on a
    /// board of side `side_len`, or `None` if it is off that board.
    #[must_use]
    pub fn to_storage(self, side_len: u16) -> Option<StorageCoords> {
        let radius = i32::from(side_len) - 1;
        if self.ring() > radius {
            return None;
        }
        let row = self.r + radius;
        let col = self.q + radius + self.r.div_euclid(2);
        Some(StorageCoords::new(row, col))
    }
}

/// Returns the length of a side of the bounding square, `2·side_len − 1`.
///
/// Returns 0 for `side_len == 0`.
#[must_use]
pub fn board_len(side_len: u16) -> i32 {
    (2 * i32::from(side_len) - 1).max(0)
}

/// Converts a storage index into axial coordinates.
///
/// Returns `None` when the index falls outside the hexagon of radius
/// `side_len − 1` (including indices outside the bounding square). Results are
/// never clamped onto the board.
#[must_use]
pub fn to_axial(pos: StorageCoords, side_len: u16) -> Option<AxialCoords> {
    let radius = i32::from(side_len) - 1;
    let r = pos.row - radius;
    let q = pos.col - radius - r.div_euclid(2);
    let coords = AxialCoords::new(q, r);
    (coords.ring() <= radius).then_some(coords)
}

/// Returns the logical centre of a hex.
///
/// `x = q·√3·size + r·√3·size/2`, `y = r·1.5·size`.
#[must_use]
pub fn axial_to_pixel(coords: AxialCoords, hex_size: f64) -> Point {
    let sqrt3 = 3.0_f64.sqrt();
    let q = f64::from(coords.q);
    let r = f64::from(coords.r);
    Point::new(
        q * sqrt3 * hex_size + r * sqrt3 * hex_size / 2.0,
        r * 3.0 * hex_size / 2.0,
    )
}

/// Finds the board cell whose centre lies strictly within `hex_size` of `point`.
///
/// All valid cells are scanned in row-major storage order. If several centres
/// qualify, the last one encountered wins.
#[must_use]
pub fn nearest_hex(point: Point, side_len: u16, hex_size: f64) -> Option<AxialCoords> {
    valid_cells(side_len)
        .filter(|&coords| point.distance(axial_to_pixel(coords, hex_size)) < hex_size)
        .last()
}

/// Returns an iterator over every index of the bounding square in row-major order.
#[must_use]
pub fn storage_coords(side_len: u16) -> StorageIter {
    StorageIter {
        len: board_len(side_len),
        next: 0,
    }
}

/// Returns an iterator over the axial coordinates of every board cell, in
/// row-major storage order.
pub fn valid_cells(side_len: u16) -> impl Iterator<Item = AxialCoords> + Clone {
    storage_coords(side_len).filter_map(move |pos| to_axial(pos, side_len))
}

/// Number of cells on a board with side `side_len`: `3N² − 3N + 1`.
#[must_use]
pub fn cell_count(side_len: u16) -> usize {
    let n = usize::from(side_len);
    if n == 0 { 0 } else { 3 * n * n - 3 * n + 1 }
}

/// Row-major iterator over the bounding square.
#[derive(Debug, Clone)]
pub struct StorageIter {
    len: i32,
    next: i32,
}

impl Iterator for StorageIter {
    type Item = StorageCoords;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.len * self.len {
            return None;
        }
        let pos = StorageCoords::new(self.next / self.len, self.next % self.len);
        self.next += 1;
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.len * self.len - self.next).unwrap_or(0);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for StorageIter {}
impl FusedIterator for StorageIter {}
