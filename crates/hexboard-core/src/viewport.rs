//! Mapping between the fixed logical canvas and the resizable physical canvas.
//!
//! The logical canvas is a square of side `logical_side` centred on the
//! origin. The physical canvas is whatever the host currently reports. Both
//! transforms are rebuilt from the physical size on every call; nothing is
//! cached across resizes.

use crate::geometry::{Affine2, Point, Size};

/// Builds logical↔physical transforms for a fixed logical canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTransform {
    logical_side: f64,
}

impl ViewportTransform {
    /// Creates a viewport for a square logical canvas.
    #[must_use]
    pub const fn new(logical_side: f64) -> Self {
        Self { logical_side }
    }

    /// Preferred logical size of the canvas.
    #[must_use]
    pub fn logical_size(&self) -> Size {
        Size::square(self.logical_side)
    }

    /// Logical → physical: scale by `physical / logical`, then move the
    /// logical origin to the physical centre.
    #[must_use]
    pub fn logical_to_physical(&self, physical: Size) -> Affine2 {
        Affine2::scaling(
            physical.width / self.logical_side,
            physical.height / self.logical_side,
        )
        .then(Affine2::translation(
            physical.width / 2.0,
            physical.height / 2.0,
        ))
    }

    /// Physical → logical: the exact inverse of [`Self::logical_to_physical`].
    ///
    /// The centre offset is removed in the physical (pre-scale) frame before
    /// scaling down.
    ///
    /// The result is meaningless for a [degenerate](Size::is_degenerate) size;
    /// callers check that first.
    #[must_use]
    pub fn physical_to_logical(&self, physical: Size) -> Affine2 {
        Affine2::translation(-physical.width / 2.0, -physical.height / 2.0).then(
            Affine2::scaling(
                self.logical_side / physical.width,
                self.logical_side / physical.height,
            ),
        )
    }

    /// Maps a physical point into logical space, or `None` if `physical` is degenerate.
    #[must_use]
    pub fn to_logical(&self, point: Point, physical: Size) -> Option<Point> {
        (!physical.is_degenerate()).then(|| self.physical_to_logical(physical).apply(point))
    }
}
