//! The `Color` capability and the bit-depth arithmetic shared by every model.
//!
//! Every color in this crate, whatever its storage width, converts to one
//! canonical form: four alpha-premultiplied channels in `0..=0xffff`, returned
//! as `u32` so that multiplying by another 16-bit factor cannot overflow.
//!
//! Narrow channels reach 16 bits by bit replication (`0b10` becomes
//! `0xaaaa`, `0x9b` becomes `0x9b9b`), never by zero-filling, so full scale
//! always maps to `0xffff`. Channels wider than 16 bits keep their top 16
//! bits.

// ============================================================================
// Constants
// ============================================================================

/// Full scale of a canonical channel.
pub const CHANNEL_MAX: u32 = 0xffff;

/// Width in bits of a canonical channel.
pub const CHANNEL_BITS: u32 = 16;

// ============================================================================
// Color capability
// ============================================================================

/// A color represented by a specific color model.
///
/// Implementations are plain value types; both operations are pure.
pub trait Color {
    /// Returns the alpha-premultiplied red, green, blue and alpha channels.
    ///
    /// Each value lies in `[0, 0xffff]` and every color channel `c` satisfies
    /// `c <= a`.
    fn rgba(&self) -> (u32, u32, u32, u32);

    /// Returns the lowercase hexadecimal code of the raw stored channels,
    /// in R, G, B, A order, without prefix or separators.
    fn hex(&self) -> String;
}

impl<C: Color + ?Sized> Color for &C {
    fn rgba(&self) -> (u32, u32, u32, u32) {
        (**self).rgba()
    }

    fn hex(&self) -> String {
        (**self).hex()
    }
}

// ============================================================================
// Bit-depth arithmetic
// ============================================================================

/// Largest raw value of a `bits`-wide channel.
#[inline]
pub const fn channel_mask(bits: u32) -> u32 {
    (1 << bits) - 1
}

/// Widen a `bits`-wide channel (`bits` dividing 16) to 16 bits by replicating
/// its pattern.
///
/// The multiplier `0xffff / (2^bits - 1)` tiles the pattern: `0x5555` for
/// 2 bits, `0x1111` for 4, `0x0101` for 8 and `1` for 16.
#[inline]
pub const fn expand(v: u32, bits: u32) -> u32 {
    v * (CHANNEL_MAX / channel_mask(bits))
}

/// Premultiply a `bits`-wide channel by a `bits`-wide alpha, into 16-bit range.
///
/// Computes `expand(c) * a / (2^bits - 1)` with floor division, which equals
/// `c * expand(a) / (2^bits - 1)`. Since `c <= 2^bits - 1` the result never
/// exceeds `expand(a)`. The largest intermediate is `0xffff * 0xffff`.
#[inline]
pub const fn premultiply(c: u32, a: u32, bits: u32) -> u32 {
    expand(c, bits) * a / channel_mask(bits)
}

/// Top 16 bits of a 32-bit channel.
#[inline]
pub const fn top16_of_u32(v: u32) -> u32 {
    v >> 16
}

/// Top 16 bits of a 64-bit channel.
#[inline]
pub const fn top16_of_u64(v: u64) -> u32 {
    (v >> 48) as u32
}

// ============================================================================
// Tests
// ============================================================================
