//! Hex parsing, the inverse of [`Color::hex`](crate::color::Color::hex).
//!
//! Input must have exactly the digit count the encoder produces. Upper- and
//! lowercase digits are accepted, as is a single leading `#`. Signs and
//! whitespace are rejected.

use thiserror::Error;

/// Errors returned when parsing a hex color code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    #[error("expected {expected} hex digits, found {found}")]
    InvalidLength { expected: usize, found: usize },
    #[error("invalid hex digit {digit:?} at offset {offset}")]
    InvalidDigit { digit: char, offset: usize },
    #[error("gray color has differing red, green and blue fields")]
    MismatchedGray,
    #[error("gray color must be fully opaque")]
    TranslucentGray,
}

/// Parse `s` as `N` consecutive fields of `width` hex digits each.
///
/// `width` is at most 16, so every field fits a `u64`.
pub(crate) fn parse_fields<const N: usize>(s: &str, width: usize) -> Result<[u64; N], HexError> {
    decode_fields(s, width).map_err(|err| {
        tracing::debug!(input = s, error = %err, "rejected hex color");
        err
    })
}

/// Parse a grayscale code: three equal value fields and an all-`f` alpha field.
pub(crate) fn parse_gray(s: &str, width: usize) -> Result<u64, HexError> {
    let [r, g, b, a] = parse_fields::<4>(s, width)?;
    let opaque = u64::MAX >> (64 - 4 * width);
    let err = if r != g || g != b {
        HexError::MismatchedGray
    } else if a != opaque {
        HexError::TranslucentGray
    } else {
        return Ok(r);
    };
    tracing::debug!(input = s, error = %err, "rejected hex color");
    Err(err)
}

fn decode_fields<const N: usize>(s: &str, width: usize) -> Result<[u64; N], HexError> {
    let skip = usize::from(s.starts_with('#'));
    let digits = &s[skip..];
    let expected = N * width;
    let found = digits.chars().count();
    if found != expected {
        return Err(HexError::InvalidLength { expected, found });
    }

    let mut fields = [0u64; N];
    for (i, (offset, ch)) in digits.char_indices().enumerate() {
        let nibble = ch.to_digit(16).ok_or(HexError::InvalidDigit {
            digit: ch,
            offset: skip + offset,
        })?;
        let field = &mut fields[i / width];
        *field = (*field << 4) | u64::from(nibble);
    }
    Ok(fields)
}
