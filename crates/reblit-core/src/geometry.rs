#![forbid(unsafe_code)]

//! Integer geometry for damage tracking and scroll planning.
//!
//! Rectangles are stored as edges (`x0, y0, x1, y1`) rather than
//! origin+extent because every consumer here clips, merges, and compares
//! edges. Constructors normalize malformed input by swapping edges, so a
//! `Rect` always satisfies `x0 <= x1 && y0 <= y1` and no operation can fail.
//!
//! Degenerate (zero-area) rectangles are representable on purpose: clipping
//! produces them routinely and callers drop them with [`Rect::is_empty`].

use std::fmt;
use std::ops::AddAssign;

/// A point in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// The origin.
    pub const ZERO: Point = Point { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A non-negative extent in pixels.
///
/// Negative inputs are clamped to zero at construction; a zero-area size is
/// valid (an empty viewport accepts events and does nothing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub w: i32,
    pub h: i32,
}

impl Size {
    /// The empty extent.
    pub const ZERO: Size = Size { w: 0, h: 0 };

    #[inline]
    pub const fn new(w: i32, h: i32) -> Self {
        Self {
            w: if w > 0 { w } else { 0 },
            h: if h > 0 { h } else { 0 },
        }
    }

    /// True when either dimension is zero.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.w == 0 || self.h == 0
    }
}

/// A signed scroll delta.
///
/// Deltas accumulate additively between coordination passes: two wheel
/// events of +30 before a tick behave as one request of +60. Accumulation
/// saturates at the `i32` extremes; every consumer clamps to a scroll
/// range orders of magnitude smaller, so saturation is indistinguishable
/// from exact arithmetic downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Delta {
    pub dx: i32,
    pub dy: i32,
}

impl Delta {
    /// The zero delta (idle scroll state).
    pub const ZERO: Delta = Delta { dx: 0, dy: 0 };

    #[inline]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

impl AddAssign for Delta {
    #[inline]
    fn add_assign(&mut self, rhs: Delta) {
        self.dx = self.dx.saturating_add(rhs.dx);
        self.dy = self.dy.saturating_add(rhs.dy);
    }
}

/// Axis-aligned integer rectangle stored as edges.
///
/// Invariant: `x0 <= x1` and `y0 <= y1`. The edges are half-open — a pixel
/// `(px, py)` is inside when `x0 <= px < x1` and `y0 <= py < y1` — so
/// `width() * height()` is the exact pixel count and adjacent rectangles
/// sharing an edge do not intersect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const EMPTY: Rect = Rect {
        x0: 0,
        y0: 0,
        x1: 0,
        y1: 0,
    };

    /// Create a rectangle from edges, swapping any that arrive reversed.
    #[inline]
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let (x0, x1) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let (y0, y1) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        Self { x0, y0, x1, y1 }
    }

    /// Create a rectangle from an origin and extent. Negative extents clamp
    /// to zero.
    #[inline]
    pub const fn from_size(x: i32, y: i32, w: i32, h: i32) -> Self {
        let w = if w > 0 { w } else { 0 };
        let h = if h > 0 { h } else { 0 };
        Self {
            x0: x,
            y0: y,
            x1: x + w,
            y1: y + h,
        }
    }

    /// The rectangle covering `size` at the origin.
    #[inline]
    pub const fn sized(size: Size) -> Self {
        Self::from_size(0, 0, size.w, size.h)
    }

    #[inline]
    pub const fn width(self) -> i32 {
        self.x1 - self.x0
    }

    #[inline]
    pub const fn height(self) -> i32 {
        self.y1 - self.y0
    }

    /// True when the rectangle covers no pixels.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.x0 >= self.x1 || self.y0 >= self.y1
    }

    /// True when the rectangles share at least one pixel.
    ///
    /// Empty rectangles intersect nothing, including themselves.
    #[inline]
    pub const fn intersects(self, other: Rect) -> bool {
        self.x0 < other.x1 && other.x0 < self.x1 && self.y0 < other.y1 && other.y0 < self.y1
    }

    /// Bounding box of both rectangles.
    ///
    /// Union with an empty rectangle yields the other operand unchanged, so
    /// a merge loop can start from `Rect::EMPTY`.
    #[inline]
    pub const fn union(self, other: Rect) -> Rect {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        Rect {
            x0: if self.x0 < other.x0 { self.x0 } else { other.x0 },
            y0: if self.y0 < other.y0 { self.y0 } else { other.y0 },
            x1: if self.x1 > other.x1 { self.x1 } else { other.x1 },
            y1: if self.y1 > other.y1 { self.y1 } else { other.y1 },
        }
    }

    /// Overlapping region, or [`Rect::EMPTY`] when disjoint.
    #[inline]
    pub const fn intersection(self, other: Rect) -> Rect {
        let x0 = if self.x0 > other.x0 { self.x0 } else { other.x0 };
        let y0 = if self.y0 > other.y0 { self.y0 } else { other.y0 };
        let x1 = if self.x1 < other.x1 { self.x1 } else { other.x1 };
        let y1 = if self.y1 < other.y1 { self.y1 } else { other.y1 };
        if x0 >= x1 || y0 >= y1 {
            Rect::EMPTY
        } else {
            Rect { x0, y0, x1, y1 }
        }
    }

    /// True when `other` lies entirely within `self`.
    ///
    /// Every rectangle contains the empty rectangle.
    #[inline]
    pub const fn contains(self, other: Rect) -> bool {
        if other.is_empty() {
            return true;
        }
        self.x0 <= other.x0 && self.y0 <= other.y0 && other.x1 <= self.x1 && other.y1 <= self.y1
    }

    /// True when the pixel at `(x, y)` is inside the rectangle.
    #[inline]
    pub const fn contains_point(self, x: i32, y: i32) -> bool {
        self.x0 <= x && x < self.x1 && self.y0 <= y && y < self.y1
    }

    /// The rectangle shifted by `(dx, dy)`.
    #[inline]
    pub const fn translate(self, dx: i32, dy: i32) -> Rect {
        Rect {
            x0: self.x0 + dx,
            y0: self.y0 + dy,
            x1: self.x1 + dx,
            y1: self.y1 + dy,
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})-({}, {})", self.x0, self.y0, self.x1, self.y1)
    }
}
