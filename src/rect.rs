//! Axis-aligned rectangles used as image bounds.
//!
//! Bounds are half-open: `Rect::new(0, 0, 4, 3)` covers `x` in `0..4` and `y`
//! in `0..3`, so it holds 12 points and `(4, 3)` is outside.

/// A rectangle defined by its min corner `(x1, y1)` (inclusive) and max
/// corner `(x2, y2)` (exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect<T: Copy> {
    pub x1: T,
    pub y1: T,
    pub x2: T,
    pub y2: T,
}

impl<T: Copy + PartialOrd> Rect<T> {
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Normalize so that x1 <= x2 and y1 <= y2, swapping if needed.
    pub fn normalize(&mut self) -> &Self {
        if self.x1 > self.x2 {
            core::mem::swap(&mut self.x1, &mut self.x2);
        }
        if self.y1 > self.y2 {
            core::mem::swap(&mut self.y1, &mut self.y2);
        }
        self
    }

    /// Returns `true` if the rectangle contains no points.
    pub fn is_empty(&self) -> bool {
        !(self.x1 < self.x2 && self.y1 < self.y2)
    }

    /// Returns `true` if the point (x, y) is inside the rectangle.
    pub fn contains(&self, x: T, y: T) -> bool {
        x >= self.x1 && x < self.x2 && y >= self.y1 && y < self.y2
    }

    /// The largest rectangle contained by both `self` and `r`.
    ///
    /// The result may be empty; check with [`Rect::is_empty`].
    pub fn intersect(&self, r: &Self) -> Self {
        let mut out = *self;
        if out.x2 > r.x2 {
            out.x2 = r.x2;
        }
        if out.y2 > r.y2 {
            out.y2 = r.y2;
        }
        if out.x1 < r.x1 {
            out.x1 = r.x1;
        }
        if out.y1 < r.y1 {
            out.y1 = r.y1;
        }
        out
    }
}

impl Rect<i32> {
    /// Horizontal extent, zero when empty.
    ///
    /// Full-range rectangles are wider than `i32::MAX`, so extents are `u32`.
    pub fn width(&self) -> u32 {
        if self.x2 > self.x1 {
            self.x2.abs_diff(self.x1)
        } else {
            0
        }
    }

    /// Vertical extent, zero when empty.
    pub fn height(&self) -> u32 {
        if self.y2 > self.y1 {
            self.y2.abs_diff(self.y1)
        } else {
            0
        }
    }
}

/// Rectangle with `i32` coordinates.
pub type RectI = Rect<i32>;
