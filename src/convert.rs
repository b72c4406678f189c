//! Conversion between color models.
//!
//! Every model can be built from any [`Color`] through its canonical
//! premultiplied form:
//!
//! - gray models take the BT.709 luminance of the premultiplied channels,
//!   which is the color composited over black;
//! - RGBA models demultiply, then narrow to their channel width by keeping
//!   the top bits, or widen by bit replication.

use crate::color::{Color, CHANNEL_MAX};
use crate::gray::{Gray16, Gray32, Gray64, Gray8};
use crate::rgba::{Rgba128, Rgba16, Rgba256, Rgba32, Rgba64, Rgba8};

/// Replicates a 16-bit value across 32 bits.
const WIDEN_32: u32 = 0x0001_0001;
/// Replicates a 16-bit value across 64 bits.
const WIDEN_64: u64 = 0x0001_0001_0001_0001;

/// A color model that can represent any other color, possibly lossily.
pub trait FromColor: Sized {
    fn from_color<C: Color + ?Sized>(c: &C) -> Self;
}

/// Luminance of 16-bit channels (ITU-R BT.709 with integer coefficients).
///
/// The weights sum to 65537, so white maps to exactly `0xffff`.
#[inline]
pub fn luminance(r: u32, g: u32, b: u32) -> u32 {
    (13933 * r + 46872 * g + 4732 * b) >> 16
}

/// Undo premultiplication of canonical channels.
///
/// Zero alpha yields all zeros. Channels that exceed alpha are clamped.
#[inline]
pub fn demultiply(r: u32, g: u32, b: u32, a: u32) -> (u32, u32, u32, u32) {
    match a {
        0 => (0, 0, 0, 0),
        CHANNEL_MAX => (r, g, b, a),
        _ => (
            r.min(a) * CHANNEL_MAX / a,
            g.min(a) * CHANNEL_MAX / a,
            b.min(a) * CHANNEL_MAX / a,
            a,
        ),
    }
}

/// Keep the top `bits` of a 16-bit channel.
#[inline]
const fn narrow(v: u32, bits: u32) -> u32 {
    v >> (16 - bits)
}

fn straight<C: Color + ?Sized>(c: &C) -> (u32, u32, u32, u32) {
    let (r, g, b, a) = c.rgba();
    demultiply(r, g, b, a)
}

fn gray<C: Color + ?Sized>(c: &C) -> u32 {
    let (r, g, b, _) = c.rgba();
    luminance(r, g, b)
}

// ============================================================================
// Gray models
// ============================================================================

impl FromColor for Gray8 {
    fn from_color<C: Color + ?Sized>(c: &C) -> Self {
        Self(narrow(gray(c), 8) as u8)
    }
}

impl FromColor for Gray16 {
    fn from_color<C: Color + ?Sized>(c: &C) -> Self {
        Self(gray(c) as u16)
    }
}

impl FromColor for Gray32 {
    fn from_color<C: Color + ?Sized>(c: &C) -> Self {
        Self(gray(c) * WIDEN_32)
    }
}

impl FromColor for Gray64 {
    fn from_color<C: Color + ?Sized>(c: &C) -> Self {
        Self(u64::from(gray(c)) * WIDEN_64)
    }
}

// ============================================================================
// RGBA models
// ============================================================================

impl FromColor for Rgba8 {
    fn from_color<C: Color + ?Sized>(c: &C) -> Self {
        let (r, g, b, a) = straight(c);
        let bits = Rgba8::CHANNEL_BITS;
        Rgba8::new(
            narrow(r, bits) as u8,
            narrow(g, bits) as u8,
            narrow(b, bits) as u8,
            narrow(a, bits) as u8,
        )
    }
}

impl FromColor for Rgba16 {
    fn from_color<C: Color + ?Sized>(c: &C) -> Self {
        let (r, g, b, a) = straight(c);
        let bits = Rgba16::CHANNEL_BITS;
        Rgba16::new(
            narrow(r, bits) as u8,
            narrow(g, bits) as u8,
            narrow(b, bits) as u8,
            narrow(a, bits) as u8,
        )
    }
}

impl FromColor for Rgba32 {
    fn from_color<C: Color + ?Sized>(c: &C) -> Self {
        let (r, g, b, a) = straight(c);
        Rgba32::new(
            narrow(r, 8) as u8,
            narrow(g, 8) as u8,
            narrow(b, 8) as u8,
            narrow(a, 8) as u8,
        )
    }
}

impl FromColor for Rgba64 {
    fn from_color<C: Color + ?Sized>(c: &C) -> Self {
        let (r, g, b, a) = straight(c);
        Rgba64::new(r as u16, g as u16, b as u16, a as u16)
    }
}

impl FromColor for Rgba128 {
    fn from_color<C: Color + ?Sized>(c: &C) -> Self {
        let (r, g, b, a) = straight(c);
        Rgba128::new(r * WIDEN_32, g * WIDEN_32, b * WIDEN_32, a * WIDEN_32)
    }
}

impl FromColor for Rgba256 {
    fn from_color<C: Color + ?Sized>(c: &C) -> Self {
        let (r, g, b, a) = straight(c);
        Rgba256::new(
            u64::from(r) * WIDEN_64,
            u64::from(g) * WIDEN_64,
            u64::from(b) * WIDEN_64,
            u64::from(a) * WIDEN_64,
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
