//! Additive RGBA color models.
//!
//! None of these types is alpha-premultiplied: the stored channels are
//! independent of the stored alpha. Premultiplication happens in
//! [`Color::rgba`], which
//!
//! - for 2, 4, 8 and 16 bits per channel computes
//!   `expand(c) * a / (2^bits - 1)` (see [`premultiply`]), so transparent
//!   colors become `(0, 0, 0, 0)` and opaque ones keep their fully expanded
//!   channels;
//! - for 32 and 64 bits per channel narrows every channel to its top 16 bits
//!   first and then premultiplies at 16 bits.
//!
//! [`Rgba8`] and [`Rgba16`] pack their four channels into one word with red
//! in the most significant bits. The wider types are plain records.

use core::str::FromStr;

use crate::color::{expand, premultiply, top16_of_u32, top16_of_u64, Color};
use crate::hex::{parse_fields, HexError};

// ============================================================================
// Rgba8 (2 bits per channel)
// ============================================================================

/// An 8-bit RGBA color, 2 bits per channel, packed as `rrggbbaa`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Rgba8(pub u8);

impl Rgba8 {
    /// Bits stored per channel.
    pub const CHANNEL_BITS: u32 = 2;
    const MASK: u8 = 0x03;

    /// Pack four 2-bit channels. Higher bits of each argument are dropped.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(
            ((r & Self::MASK) << 6)
                | ((g & Self::MASK) << 4)
                | ((b & Self::MASK) << 2)
                | (a & Self::MASK),
        )
    }

    /// Red channel, `0..=3`.
    pub const fn r(self) -> u8 {
        self.0 >> 6
    }

    /// Green channel, `0..=3`.
    pub const fn g(self) -> u8 {
        (self.0 >> 4) & Self::MASK
    }

    /// Blue channel, `0..=3`.
    pub const fn b(self) -> u8 {
        (self.0 >> 2) & Self::MASK
    }

    /// Alpha channel, `0..=3`.
    pub const fn a(self) -> u8 {
        self.0 & Self::MASK
    }

    /// Parse the packed code produced by [`Color::hex`], e.g. `"9b"`.
    pub fn from_hex(s: &str) -> Result<Self, HexError> {
        let [v] = parse_fields::<1>(s, 2)?;
        Ok(Self(v as u8))
    }
}

impl Color for Rgba8 {
    fn rgba(&self) -> (u32, u32, u32, u32) {
        let a = self.a() as u32;
        (
            premultiply(self.r() as u32, a, Self::CHANNEL_BITS),
            premultiply(self.g() as u32, a, Self::CHANNEL_BITS),
            premultiply(self.b() as u32, a, Self::CHANNEL_BITS),
            expand(a, Self::CHANNEL_BITS),
        )
    }

    fn hex(&self) -> String {
        format!("{:02x}", self.0)
    }
}

impl FromStr for Rgba8 {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<u8> for Rgba8 {
    fn from(v: u8) -> Self {
        Self(v)
    }
}

// ============================================================================
// Rgba16 (4 bits per channel)
// ============================================================================

/// A 16-bit RGBA color, 4 bits per channel, packed as `rrrrgggg bbbbaaaa`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Rgba16(pub u16);

impl Rgba16 {
    /// Bits stored per channel.
    pub const CHANNEL_BITS: u32 = 4;
    const MASK: u16 = 0x0f;

    /// Pack four 4-bit channels. Higher bits of each argument are dropped.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(
            ((r as u16 & Self::MASK) << 12)
                | ((g as u16 & Self::MASK) << 8)
                | ((b as u16 & Self::MASK) << 4)
                | (a as u16 & Self::MASK),
        )
    }

    /// Red channel, `0..=15`.
    pub const fn r(self) -> u8 {
        (self.0 >> 12) as u8
    }

    /// Green channel, `0..=15`.
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & Self::MASK) as u8
    }

    /// Blue channel, `0..=15`.
    pub const fn b(self) -> u8 {
        ((self.0 >> 4) & Self::MASK) as u8
    }

    /// Alpha channel, `0..=15`.
    pub const fn a(self) -> u8 {
        (self.0 & Self::MASK) as u8
    }

    /// Parse the packed code produced by [`Color::hex`], e.g. `"a5af"`.
    pub fn from_hex(s: &str) -> Result<Self, HexError> {
        let [v] = parse_fields::<1>(s, 4)?;
        Ok(Self(v as u16))
    }
}

impl Color for Rgba16 {
    fn rgba(&self) -> (u32, u32, u32, u32) {
        let a = self.a() as u32;
        (
            premultiply(self.r() as u32, a, Self::CHANNEL_BITS),
            premultiply(self.g() as u32, a, Self::CHANNEL_BITS),
            premultiply(self.b() as u32, a, Self::CHANNEL_BITS),
            expand(a, Self::CHANNEL_BITS),
        )
    }

    fn hex(&self) -> String {
        format!("{:04x}", self.0)
    }
}

impl FromStr for Rgba16 {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<u16> for Rgba16 {
    fn from(v: u16) -> Self {
        Self(v)
    }
}

// ============================================================================
// Rgba32 (8 bits per channel)
// ============================================================================

/// A 32-bit RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba32 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba32 {
    /// Bits stored per channel.
    pub const CHANNEL_BITS: u32 = 8;

    /// Build a color from straight (non-premultiplied) channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse the code produced by [`Color::hex`], one fixed-width field per channel.
    pub fn from_hex(s: &str) -> Result<Self, HexError> {
        let [r, g, b, a] = parse_fields::<4>(s, 2)?;
        Ok(Self::new(r as u8, g as u8, b as u8, a as u8))
    }
}

impl Color for Rgba32 {
    fn rgba(&self) -> (u32, u32, u32, u32) {
        let a = self.a as u32;
        (
            premultiply(self.r as u32, a, Self::CHANNEL_BITS),
            premultiply(self.g as u32, a, Self::CHANNEL_BITS),
            premultiply(self.b as u32, a, Self::CHANNEL_BITS),
            expand(a, Self::CHANNEL_BITS),
        )
    }

    fn hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Rgba32 {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u8; 4]> for Rgba32 {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Rgba32> for [u8; 4] {
    fn from(c: Rgba32) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

// ============================================================================
// Rgba64 (16 bits per channel)
// ============================================================================

/// A 64-bit RGBA color, 16 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba64 {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

impl Rgba64 {
    /// Bits stored per channel.
    pub const CHANNEL_BITS: u32 = 16;

    /// Build a color from straight (non-premultiplied) channels.
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    /// Parse the code produced by [`Color::hex`], one fixed-width field per channel.
    pub fn from_hex(s: &str) -> Result<Self, HexError> {
        let [r, g, b, a] = parse_fields::<4>(s, 4)?;
        Ok(Self::new(r as u16, g as u16, b as u16, a as u16))
    }
}

impl Color for Rgba64 {
    fn rgba(&self) -> (u32, u32, u32, u32) {
        let a = self.a as u32;
        (
            premultiply(self.r as u32, a, Self::CHANNEL_BITS),
            premultiply(self.g as u32, a, Self::CHANNEL_BITS),
            premultiply(self.b as u32, a, Self::CHANNEL_BITS),
            a,
        )
    }

    fn hex(&self) -> String {
        format!("{:04x}{:04x}{:04x}{:04x}", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Rgba64 {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u16; 4]> for Rgba64 {
    fn from([r, g, b, a]: [u16; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Rgba64> for [u16; 4] {
    fn from(c: Rgba64) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

// ============================================================================
// Rgba128 (32 bits per channel)
// ============================================================================

/// A 128-bit RGBA color, 32 bits per channel.
///
/// Converts through the top 16 bits of each channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba128 {
    pub r: u32,
    pub g: u32,
    pub b: u32,
    pub a: u32,
}

impl Rgba128 {
    /// Bits stored per channel.
    pub const CHANNEL_BITS: u32 = 32;

    /// Build a color from straight (non-premultiplied) channels.
    pub const fn new(r: u32, g: u32, b: u32, a: u32) -> Self {
        Self { r, g, b, a }
    }

    /// Parse the code produced by [`Color::hex`], one fixed-width field per channel.
    pub fn from_hex(s: &str) -> Result<Self, HexError> {
        let [r, g, b, a] = parse_fields::<4>(s, 8)?;
        Ok(Self::new(r as u32, g as u32, b as u32, a as u32))
    }
}

impl Color for Rgba128 {
    fn rgba(&self) -> (u32, u32, u32, u32) {
        let a = top16_of_u32(self.a);
        (
            premultiply(top16_of_u32(self.r), a, 16),
            premultiply(top16_of_u32(self.g), a, 16),
            premultiply(top16_of_u32(self.b), a, 16),
            a,
        )
    }

    fn hex(&self) -> String {
        format!("{:08x}{:08x}{:08x}{:08x}", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Rgba128 {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u32; 4]> for Rgba128 {
    fn from([r, g, b, a]: [u32; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Rgba128> for [u32; 4] {
    fn from(c: Rgba128) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

// ============================================================================
// Rgba256 (64 bits per channel)
// ============================================================================

/// A 256-bit RGBA color, 64 bits per channel.
///
/// Converts through the top 16 bits of each channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba256 {
    pub r: u64,
    pub g: u64,
    pub b: u64,
    pub a: u64,
}

impl Rgba256 {
    /// Bits stored per channel.
    pub const CHANNEL_BITS: u32 = 64;

    /// Build a color from straight (non-premultiplied) channels.
    pub const fn new(r: u64, g: u64, b: u64, a: u64) -> Self {
        Self { r, g, b, a }
    }

    /// Parse the code produced by [`Color::hex`], one fixed-width field per channel.
    pub fn from_hex(s: &str) -> Result<Self, HexError> {
        let [r, g, b, a] = parse_fields::<4>(s, 16)?;
        Ok(Self::new(r, g, b, a))
    }
}

impl Color for Rgba256 {
    fn rgba(&self) -> (u32, u32, u32, u32) {
        let a = top16_of_u64(self.a);
        (
            premultiply(top16_of_u64(self.r), a, 16),
            premultiply(top16_of_u64(self.g), a, 16),
            premultiply(top16_of_u64(self.b), a, 16),
            a,
        )
    }

    fn hex(&self) -> String {
        format!("{:016x}{:016x}{:016x}{:016x}", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Rgba256 {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u64; 4]> for Rgba256 {
    fn from([r, g, b, a]: [u64; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Rgba256> for [u64; 4] {
    fn from(c: Rgba256) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

// ============================================================================
// Tests
// ============================================================================
