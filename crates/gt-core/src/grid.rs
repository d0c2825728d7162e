//! Integer maze coordinates.
//!
//! Coordinates are 1-based: a maze of width `max_x` and height `max_y`
//! occupies `[1, max_x] × [1, max_y]`.  Points outside that rectangle are
//! legal values (targeting math overshoots routinely) but never name a node.

use std::ops::{Add, Mul, Sub};

/// A point on the integer maze grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The point shifted by `(dx, dy)`.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

impl Add for GridPoint {
    type Output = GridPoint;
    #[inline]
    fn add(self, rhs: GridPoint) -> GridPoint {
        GridPoint::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for GridPoint {
    type Output = GridPoint;
    #[inline]
    fn sub(self, rhs: GridPoint) -> GridPoint {
        GridPoint::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for GridPoint {
    type Output = GridPoint;
    #[inline]
    fn mul(self, k: i32) -> GridPoint {
        GridPoint::new(self.x * k, self.y * k)
    }
}

impl std::fmt::Display for GridPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Bounds ────────────────────────────────────────────────────────────────────

/// Inclusive coordinate rectangle `[1, max_x] × [1, max_y]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub max_x: i32,
    pub max_y: i32,
}

impl Bounds {
    #[inline]
    pub const fn new(max_x: i32, max_y: i32) -> Self {
        Self { max_x, max_y }
    }

    #[inline]
    pub fn contains(self, p: GridPoint) -> bool {
        p.x >= 1 && p.x <= self.max_x && p.y >= 1 && p.y <= self.max_y
    }

    /// Component-wise clamp into the rectangle.
    #[inline]
    pub fn clamp(self, p: GridPoint) -> GridPoint {
        GridPoint::new(p.x.clamp(1, self.max_x.max(1)), p.y.clamp(1, self.max_y.max(1)))
    }
}
