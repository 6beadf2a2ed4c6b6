//! Planar primitives shared by the mapper and the viewport transform.
//!
//! All values are `f64`. Logical space and physical (pixel) space use the same
//! [`Point`] type; which space a point lives in is determined by the
//! [`Affine2`] that produced it.

/// A point in either logical or physical space.
#[derive(Debug, Clone, Copy, PartialEq, Default, derive_more::Display)]
#[display("({x}, {y})")]
pub struct Point {
    /// Horizontal component, growing to the right.
    pub x: f64,
    /// Vertical component, growing downwards.
    pub y: f64,
}

impl Point {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Returns the midpoint between `self` and `other`.
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Width and height of a rectangular area.
#[derive(Debug, Clone, Copy, PartialEq, Default, derive_more::Display)]
#[display("{width}x{height}")]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// Creates a new size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Creates a square size.
    #[must_use]
    pub const fn square(side: f64) -> Self {
        Self::new(side, side)
    }

    /// Returns `true` if either side is zero, negative, or not finite.
    ///
    /// A degenerate size has no invertible mapping into logical space.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }

    /// Returns the centre of a rectangle of this size anchored at the origin.
    #[must_use]
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// An axis-aligned affine transform: per-axis scale followed by translation.
///
/// `apply(p) = (p.x * scale_x + translate_x, p.y * scale_y + translate_y)`.
///
/// Transforms are built from primitive steps and chained with [`Affine2::then`],
/// which reads in application order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine2 {
    scale_x: f64,
    scale_y: f64,
    translate_x: f64,
    translate_y: f64,
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine2 {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        scale_x: 1.0,
        scale_y: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    /// A pure translation by `(dx, dy)`.
    #[must_use]
    pub const fn translation(dx: f64, dy: f64) -> Self {
        Self {
            translate_x: dx,
            translate_y: dy,
            ..Self::IDENTITY
        }
    }

    /// A pure scale by `(sx, sy)` around the origin.
    #[must_use]
    pub const fn scaling(sx: f64, sy: f64) -> Self {
        Self {
            scale_x: sx,
            scale_y: sy,
            ..Self::IDENTITY
        }
    }

    /// Returns the transform that applies `self` first and `next` second.
    #[must_use]
    pub fn then(self, next: Self) -> Self {
        Self {
            scale_x: self.scale_x * next.scale_x,
            scale_y: self.scale_y * next.scale_y,
            translate_x: self.translate_x * next.scale_x + next.translate_x,
            translate_y: self.translate_y * next.scale_y + next.translate_y,
        }
    }

    /// Maps a point through the transform.
    #[must_use]
    pub fn apply(self, p: Point) -> Point {
        Point::new(
            p.x * self.scale_x + self.translate_x,
            p.y * self.scale_y + self.translate_y,
        )
    }

    /// Maps a length along each axis (translation is ignored).
    #[must_use]
    pub fn apply_extent(self, extent: Size) -> Size {
        Size::new(extent.width * self.scale_x, extent.height * self.scale_y)
    }

    /// Per-axis scale factors.
    #[must_use]
    pub fn scale(self) -> (f64, f64) {
        (self.scale_x, self.scale_y)
    }
}
