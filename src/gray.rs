//! Grayscale color models.
//!
//! A gray color stores a single intensity which is used for red, green and
//! blue. There is no alpha channel: every gray color is fully opaque, and the
//! hex code carries a synthetic all-`f` alpha field of the same width.
//!
//! - [`Gray8`] and [`Gray16`] expand to the canonical 16 bits exactly.
//! - [`Gray32`] and [`Gray64`] keep only their top 16 bits. This is a
//!   truncation, not a rounding conversion.

use core::str::FromStr;

use crate::color::{expand, top16_of_u32, top16_of_u64, Color, CHANNEL_MAX};
use crate::hex::{parse_gray, HexError};

// ============================================================================
// Gray8
// ============================================================================

/// An 8-bit grayscale color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Gray8(pub u8);

impl Gray8 {
    pub const BLACK: Self = Self(0);
    pub const WHITE: Self = Self(u8::MAX);

    /// Parse the code produced by [`Color::hex`], e.g. `"9b9b9bff"`.
    pub fn from_hex(s: &str) -> Result<Self, HexError> {
        parse_gray(s, 2).map(|v| Self(v as u8))
    }
}

impl Color for Gray8 {
    fn rgba(&self) -> (u32, u32, u32, u32) {
        let y = expand(self.0 as u32, 8);
        (y, y, y, CHANNEL_MAX)
    }

    fn hex(&self) -> String {
        format!("{0:02x}{0:02x}{0:02x}ff", self.0)
    }
}

impl FromStr for Gray8 {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<u8> for Gray8 {
    fn from(v: u8) -> Self {
        Self(v)
    }
}

// ============================================================================
// Gray16
// ============================================================================

/// A 16-bit grayscale color. Already at canonical width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Gray16(pub u16);

impl Gray16 {
    pub const BLACK: Self = Self(0);
    pub const WHITE: Self = Self(u16::MAX);

    pub fn from_hex(s: &str) -> Result<Self, HexError> {
        parse_gray(s, 4).map(|v| Self(v as u16))
    }
}

impl Color for Gray16 {
    fn rgba(&self) -> (u32, u32, u32, u32) {
        let y = self.0 as u32;
        (y, y, y, CHANNEL_MAX)
    }

    fn hex(&self) -> String {
        format!("{0:04x}{0:04x}{0:04x}ffff", self.0)
    }
}

impl FromStr for Gray16 {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<u16> for Gray16 {
    fn from(v: u16) -> Self {
        Self(v)
    }
}

// ============================================================================
// Gray32
// ============================================================================

/// A 32-bit grayscale color.
///
/// Converts to the canonical form through its top 16 bits; the low 16 bits
/// only show up in the hex code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Gray32(pub u32);

impl Gray32 {
    pub const BLACK: Self = Self(0);
    pub const WHITE: Self = Self(u32::MAX);

    pub fn from_hex(s: &str) -> Result<Self, HexError> {
        parse_gray(s, 8).map(|v| Self(v as u32))
    }
}

impl Color for Gray32 {
    fn rgba(&self) -> (u32, u32, u32, u32) {
        let y = top16_of_u32(self.0);
        (y, y, y, CHANNEL_MAX)
    }

    fn hex(&self) -> String {
        format!("{0:08x}{0:08x}{0:08x}ffffffff", self.0)
    }
}

impl FromStr for Gray32 {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<u32> for Gray32 {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

// ============================================================================
// Gray64
// ============================================================================

/// A 64-bit grayscale color. Converts through its top 16 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Gray64(pub u64);

impl Gray64 {
    pub const BLACK: Self = Self(0);
    pub const WHITE: Self = Self(u64::MAX);

    pub fn from_hex(s: &str) -> Result<Self, HexError> {
        parse_gray(s, 16).map(Self)
    }
}

impl Color for Gray64 {
    fn rgba(&self) -> (u32, u32, u32, u32) {
        let y = top16_of_u64(self.0);
        (y, y, y, CHANNEL_MAX)
    }

    fn hex(&self) -> String {
        format!("{0:016x}{0:016x}{0:016x}ffffffffffffffff", self.0)
    }
}

impl FromStr for Gray64 {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<u64> for Gray64 {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        assert_eq!(core::mem::size_of::<Gray8>(), 1);
        assert_eq!(core::mem::size_of::<Gray16>(), 2);
        assert_eq!(core::mem::size_of::<Gray32>(), 4);
        assert_eq!(core::mem::size_of::<Gray64>(), 8);
    }

    #[test]
    fn test_gray8_rgba() {
        assert_eq!(Gray8(0x00).rgba(), (0, 0, 0, 0xffff));
        assert_eq!(Gray8(0xff).rgba(), (0xffff, 0xffff, 0xffff, 0xffff));
        assert_eq!(Gray8(0x9b).rgba(), (0x9b9b, 0x9b9b, 0x9b9b, 0xffff));
    }

    #[test]
    fn test_gray8_hex() {
        assert_eq!(Gray8(0x00).hex(), "000000ff");
        assert_eq!(Gray8(0xff).hex(), "ffffffff");
        assert_eq!(Gray8(0x9b).hex(), "9b9b9bff");
    }

    #[test]
    fn test_gray16_rgba() {
        assert_eq!(Gray16(0x0000).rgba(), (0, 0, 0, 0xffff));
        assert_eq!(Gray16(0xffff).rgba(), (0xffff, 0xffff, 0xffff, 0xffff));
        assert_eq!(Gray16(0xa5af).rgba(), (0xa5af, 0xa5af, 0xa5af, 0xffff));
    }

    #[test]
    fn test_gray16_hex() {
        assert_eq!(Gray16(0x0000).hex(), "000000000000ffff");
        assert_eq!(Gray16(0xffff).hex(), "ffffffffffffffff");
        assert_eq!(Gray16(0xa5af).hex(), "a5afa5afa5afffff");
    }

    #[test]
    fn test_gray32_rgba_truncates() {
        assert_eq!(Gray32(0).rgba(), (0, 0, 0, 0xffff));
        assert_eq!(Gray32(u32::MAX).rgba(), (0xffff, 0xffff, 0xffff, 0xffff));
        assert_eq!(Gray32(0xa5af_ffff).rgba(), (0xa5af, 0xa5af, 0xa5af, 0xffff));
        // Low bits never round up.
        assert_eq!(Gray32(0x0000_ffff).rgba(), (0, 0, 0, 0xffff));
    }

    #[test]
    fn test_gray32_hex() {
        assert_eq!(Gray32(0xa5af_0f0f).hex(), "a5af0f0fa5af0f0fa5af0f0fffffffff");
        assert_eq!(Gray32(0).hex().len(), 32);
    }

    #[test]
    fn test_gray64_rgba_truncates() {
        assert_eq!(Gray64(0).rgba(), (0, 0, 0, 0xffff));
        assert_eq!(Gray64(u64::MAX).rgba(), (0xffff, 0xffff, 0xffff, 0xffff));
        assert_eq!(
            Gray64(0xa5af_0000_ffff_ffff).rgba(),
            (0xa5af, 0xa5af, 0xa5af, 0xffff)
        );
    }

    #[test]
    fn test_gray64_hex() {
        assert_eq!(
            Gray64(0xa5af_0000_0000_0001).hex(),
            "a5af000000000001a5af000000000001a5af000000000001ffffffffffffffff"
        );
    }

    #[test]
    fn test_gray8_exhaustive() {
        for v in 0..=u8::MAX {
            let c = Gray8(v);
            let (r, g, b, a) = c.rgba();
            assert_eq!(a, 0xffff);
            assert_eq!((r, g), (b, b));
            assert_eq!(r >> 8, v as u32);
            assert_eq!(r & 0xff, v as u32);
            assert_eq!(Gray8::from_hex(&c.hex()), Ok(c));
        }
    }

    #[test]
    fn test_gray16_exhaustive_roundtrip() {
        for v in 0..=u16::MAX {
            let c = Gray16(v);
            assert_eq!(c.rgba(), (v as u32, v as u32, v as u32, 0xffff));
            assert_eq!(c.hex().parse::<Gray16>(), Ok(c));
        }
    }

    #[test]
    fn test_wide_hex_roundtrip() {
        for v in [0, 1, 0xa5af_0f0f, u32::MAX] {
            assert_eq!(Gray32(v).hex().parse::<Gray32>(), Ok(Gray32(v)));
        }
        for v in [0, 1, 0xa5af_0000_ffff_0001, u64::MAX] {
            assert_eq!(Gray64(v).hex().parse::<Gray64>(), Ok(Gray64(v)));
        }
    }

    #[test]
    fn test_from_hex_rejects_non_gray() {
        assert_eq!(
            Gray8::from_hex("9b9b9c ff"),
            Err(HexError::InvalidLength {
                expected: 8,
                found: 9
            })
        );
        assert_eq!(Gray8::from_hex("9b9b9cff"), Err(HexError::MismatchedGray));
        assert_eq!(
            Gray16::from_hex("000000000000fff0"),
            Err(HexError::TranslucentGray)
        );
    }

    #[test]
    fn test_constants() {
        assert_eq!(Gray8::WHITE.hex(), "ffffffff");
        assert_eq!(Gray16::BLACK.rgba(), (0, 0, 0, 0xffff));
        assert_eq!(Gray32::WHITE.rgba(), (0xffff, 0xffff, 0xffff, 0xffff));
        assert_eq!(Gray64::default(), Gray64::BLACK);
    }
}
