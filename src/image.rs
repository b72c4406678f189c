//! Images: finite rectangular grids of colors.
//!
//! [`Image`] is the read side every consumer depends on; it is generic over a
//! single color model through its associated type, so access is statically
//! dispatched. [`ImageMut`] adds point writes. [`ImageBuffer`] is the in-memory
//! implementation, storing pixels row-major in a `Vec`.
//!
//! Out-of-bounds access never panics: reads return the model's zero value
//! (transparent for RGBA, black for gray) and writes are ignored.

use crate::color::Color;
use crate::convert::FromColor;
use crate::rect::RectI;

// ============================================================================
// Image traits
// ============================================================================

/// A finite rectangular grid of colors.
pub trait Image {
    type Color: Color + Copy + Default;

    /// The domain for which [`Image::at`] returns stored colors.
    /// It does not necessarily contain the point (0, 0).
    fn bounds(&self) -> RectI;

    /// The color of the pixel at (x, y).
    ///
    /// `at(bounds.x1, bounds.y1)` is the upper-left pixel and
    /// `at(bounds.x2 - 1, bounds.y2 - 1)` the lower-right one.
    fn at(&self, x: i32, y: i32) -> Self::Color;
}

/// An image whose pixels can be overwritten.
pub trait ImageMut: Image {
    /// Overwrite the pixel at (x, y). Points outside the bounds are ignored.
    fn set(&mut self, x: i32, y: i32, c: Self::Color);
}

// ============================================================================
// ImageBuffer
// ============================================================================

/// An in-memory image of one color model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer<C> {
    bounds: RectI,
    pixels: Vec<C>,
}

impl<C: Color + Copy + Default> ImageBuffer<C> {
    /// Create an image covering `bounds`, filled with the zero color.
    ///
    /// Inverted bounds are normalized. Empty bounds of any extent allocate
    /// nothing; like any `Vec`, a pixel count beyond addressable memory
    /// fails to allocate.
    pub fn new(mut bounds: RectI) -> Self {
        bounds.normalize();
        let len = (bounds.width() as usize)
            .checked_mul(bounds.height() as usize)
            .unwrap_or(usize::MAX);
        Self {
            bounds,
            pixels: vec![C::default(); len],
        }
    }

    /// Create a `width` x `height` image with its origin at (0, 0).
    ///
    /// Sizes above `i32::MAX` are clamped to `i32::MAX`, the largest extent
    /// reachable from a zero origin.
    pub fn with_size(width: u32, height: u32) -> Self {
        let w = i32::try_from(width).unwrap_or(i32::MAX);
        let h = i32::try_from(height).unwrap_or(i32::MAX);
        Self::new(RectI::new(0, 0, w, h))
    }

    /// Create an image by evaluating `f` at every point of `bounds`, row by row.
    pub fn from_fn<F>(bounds: RectI, mut f: F) -> Self
    where
        F: FnMut(i32, i32) -> C,
    {
        let mut img = Self::new(bounds);
        let b = img.bounds;
        let mut i = 0;
        for y in b.y1..b.y2 {
            for x in b.x1..b.x2 {
                img.pixels[i] = f(x, y);
                i += 1;
            }
        }
        img
    }

    /// Convert every pixel of `src` into this model.
    pub fn convert<I>(src: &I) -> Self
    where
        I: Image + ?Sized,
        C: FromColor,
    {
        Self::from_fn(src.bounds(), |x, y| C::from_color(&src.at(x, y)))
    }

    pub fn width(&self) -> u32 {
        self.bounds.width()
    }

    pub fn height(&self) -> u32 {
        self.bounds.height()
    }

    /// Row-major pixel storage.
    pub fn pixels(&self) -> &[C] {
        &self.pixels
    }

    /// Iterate over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[C]> {
        self.pixels.chunks(self.width().max(1) as usize)
    }

    /// The color at (x, y), or `None` outside the bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<C> {
        self.offset(x, y).map(|i| self.pixels[i])
    }

    /// Set every pixel to `c`.
    pub fn fill(&mut self, c: C) {
        self.pixels.fill(c);
    }

    /// Copy out the part of this image inside `r`.
    ///
    /// The result keeps the original coordinates and may be empty.
    pub fn sub_image(&self, r: &RectI) -> Self {
        let bounds = self.bounds.intersect(r);
        if bounds.is_empty() {
            return Self::new(RectI::default());
        }
        Self::from_fn(bounds, |x, y| self.at(x, y))
    }

    #[inline]
    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if !self.bounds.contains(x, y) {
            return None;
        }
        let dx = (i64::from(x) - i64::from(self.bounds.x1)) as usize;
        let dy = (i64::from(y) - i64::from(self.bounds.y1)) as usize;
        Some(dy * self.width() as usize + dx)
    }
}

impl<C: Color + Copy + Default> Image for ImageBuffer<C> {
    type Color = C;

    fn bounds(&self) -> RectI {
        self.bounds
    }

    fn at(&self, x: i32, y: i32) -> C {
        self.get(x, y).unwrap_or_default()
    }
}

impl<C: Color + Copy + Default> ImageMut for ImageBuffer<C> {
    fn set(&mut self, x: i32, y: i32, c: C) {
        match self.offset(x, y) {
            Some(i) => self.pixels[i] = c,
            None => {
                tracing::trace!(x, y, bounds = ?self.bounds, "ignoring write outside image bounds");
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gray::{Gray16, Gray8};
    use crate::rgba::{Rgba32, Rgba8};

    /// Mean premultiplied alpha, written against the trait only.
    fn mean_alpha<I: Image>(img: &I) -> u32 {
        let b = img.bounds();
        let mut sum = 0u64;
        let mut n = 0u64;
        for y in b.y1..b.y2 {
            for x in b.x1..b.x2 {
                sum += u64::from(img.at(x, y).rgba().3);
                n += 1;
            }
        }
        if n == 0 {
            0
        } else {
            (sum / n) as u32
        }
    }

    #[test]
    fn test_new() {
        let img: ImageBuffer<Rgba32> = ImageBuffer::with_size(4, 3);
        assert_eq!(img.width(), 4);
        assert_eq!(img.height(), 3);
        assert_eq!(img.pixels().len(), 12);
        assert_eq!(img.bounds(), RectI::new(0, 0, 4, 3));
        assert!(img.pixels().iter().all(|c| *c == Rgba32::default()));
    }

    #[test]
    fn test_new_normalizes_bounds() {
        let img: ImageBuffer<Gray8> = ImageBuffer::new(RectI::new(4, 3, 0, 0));
        assert_eq!(img.bounds(), RectI::new(0, 0, 4, 3));
    }

    #[test]
    fn test_full_range_empty_bounds() {
        let mut img: ImageBuffer<Gray8> = ImageBuffer::new(RectI::new(i32::MIN, 0, i32::MAX, 0));
        assert_eq!(img.width(), u32::MAX);
        assert_eq!(img.height(), 0);
        assert!(img.pixels().is_empty());
        assert_eq!(img.rows().count(), 0);
        assert_eq!(img.at(0, 0), Gray8::BLACK);
        img.set(0, 0, Gray8::WHITE);
        assert!(img.pixels().is_empty());

        let wide: ImageBuffer<Gray8> =
            ImageBuffer::new(RectI::new(-2_000_000_000, 0, 2_000_000_000, 0));
        assert_eq!(wide.width(), 4_000_000_000);
    }

    #[test]
    fn test_with_size_clamps() {
        let img: ImageBuffer<Gray8> = ImageBuffer::with_size(u32::MAX, 0);
        assert_eq!(img.bounds(), RectI::new(0, 0, i32::MAX, 0));
        assert!(img.pixels().is_empty());
    }

    #[test]
    fn test_set_and_at() {
        let mut img = ImageBuffer::with_size(10, 10);
        let red = Rgba32::new(0xff, 0, 0, 0xff);
        img.set(5, 7, red);
        assert_eq!(img.at(5, 7), red);
        assert_eq!(img.get(5, 7), Some(red));
        assert_eq!(img.pixels()[7 * 10 + 5], red);
        assert_eq!(img.at(7, 5), Rgba32::default());
    }

    #[test]
    fn test_out_of_bounds() {
        let mut img = ImageBuffer::with_size(2, 2);
        img.fill(Gray8::WHITE);
        assert_eq!(img.get(2, 0), None);
        assert_eq!(img.at(-1, 0), Gray8::BLACK);
        img.set(2, 2, Gray8(0x10));
        assert!(img.pixels().iter().all(|c| *c == Gray8::WHITE));
    }

    #[test]
    fn test_negative_origin() {
        let img = ImageBuffer::from_fn(RectI::new(-2, -1, 2, 1), |x, y| {
            Gray16(((x + 2) * 10 + (y + 1)) as u16)
        });
        assert_eq!(img.width(), 4);
        assert_eq!(img.height(), 2);
        assert_eq!(img.at(-2, -1), Gray16(0));
        assert_eq!(img.at(1, 0), Gray16(31));
        assert_eq!(img.get(2, 0), None);
    }

    #[test]
    fn test_rows() {
        let img = ImageBuffer::from_fn(RectI::new(0, 0, 3, 2), |x, y| Gray8((y * 3 + x) as u8));
        let rows: Vec<&[Gray8]> = img.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], &[Gray8(3), Gray8(4), Gray8(5)]);

        let empty: ImageBuffer<Gray8> = ImageBuffer::with_size(0, 5);
        assert_eq!(empty.rows().count(), 0);
    }

    #[test]
    fn test_sub_image() {
        let img = ImageBuffer::from_fn(RectI::new(0, 0, 4, 4), |x, y| Gray8((y * 4 + x) as u8));
        let sub = img.sub_image(&RectI::new(2, 1, 10, 3));
        assert_eq!(sub.bounds(), RectI::new(2, 1, 4, 3));
        assert_eq!(sub.at(2, 1), Gray8(6));
        assert_eq!(sub.at(3, 2), Gray8(11));

        let outside = img.sub_image(&RectI::new(10, 10, 20, 20));
        assert!(outside.bounds().is_empty());
        assert!(outside.pixels().is_empty());
    }

    #[test]
    fn test_convert() {
        let src = ImageBuffer::from_fn(RectI::new(0, 0, 2, 1), |x, _| {
            if x == 0 {
                Rgba32::new(0xff, 0xff, 0xff, 0xff)
            } else {
                Rgba32::new(0xff, 0xff, 0xff, 0)
            }
        });
        let gray: ImageBuffer<Gray8> = ImageBuffer::convert(&src);
        assert_eq!(gray.bounds(), src.bounds());
        assert_eq!(gray.at(0, 0), Gray8::WHITE);
        assert_eq!(gray.at(1, 0), Gray8::BLACK);

        let packed: ImageBuffer<Rgba8> = ImageBuffer::convert(&src);
        assert_eq!(packed.at(0, 0), Rgba8(0xff));
        assert_eq!(packed.at(1, 0), Rgba8(0x00));
    }

    #[test]
    fn test_generic_consumer() {
        let mut img = ImageBuffer::with_size(2, 1);
        assert_eq!(mean_alpha(&img), 0);
        img.set(0, 0, Rgba8(0xff));
        img.set(1, 0, Rgba8(0xff));
        assert_eq!(mean_alpha(&img), 0xffff);

        let gray: ImageBuffer<Gray8> = ImageBuffer::with_size(3, 3);
        assert_eq!(mean_alpha(&gray), 0xffff);
    }
}
