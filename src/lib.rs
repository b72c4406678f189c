//! # pxl
//!
//! Fixed-width color models for 2-D images.
//!
//! Each model stores its channels at a fixed bit depth and converts to one
//! canonical form: alpha-premultiplied red, green, blue and alpha in
//! `0..=0xffff`. Each model also renders its raw stored channels as a
//! fixed-width lowercase hex code.
//!
//! | Model | Storage | Channels |
//! |-------|---------|----------|
//! | [`Gray8`], [`Gray16`], [`Gray32`], [`Gray64`] | 8–64 bits | intensity, always opaque |
//! | [`Rgba8`], [`Rgba16`] | 8, 16 bits | packed 2 / 4 bits per channel |
//! | [`Rgba32`], [`Rgba64`], [`Rgba128`], [`Rgba256`] | 32–256 bits | 8–64 bits per channel |
//!
//! ```
//! use pxl::{Color, Gray8, Rgba8};
//!
//! assert_eq!(Gray8(0x9b).rgba(), (0x9b9b, 0x9b9b, 0x9b9b, 0xffff));
//! assert_eq!(Gray8(0x9b).hex(), "9b9b9bff");
//!
//! // rrggbbaa = 10 01 10 11
//! assert_eq!(Rgba8(0x9b).rgba(), (0xaaaa, 0x5555, 0xaaaa, 0xffff));
//! assert_eq!("9b".parse::<Rgba8>(), Ok(Rgba8(0x9b)));
//! ```
//!
//! ## Conversion rules
//!
//! - Channels narrower than 16 bits are widened by bit replication, so full
//!   scale maps to `0xffff` (`0xff` becomes `0xffff`, not `0xff00`).
//! - Channels wider than 16 bits keep their top 16 bits (truncation).
//! - Premultiplication uses floor division by the channel's native full
//!   scale, which keeps every color channel at or below alpha.
//!
//! No color-space transforms (sRGB, linear light) are applied anywhere.
//!
//! ## Images
//!
//! [`Image`] and [`ImageMut`] describe rectangular grids of one model;
//! [`ImageBuffer`] is the in-memory implementation, and
//! [`ImageBuffer::convert`] moves an image between models via [`FromColor`].
//!
//! ## Features
//!
//! - `serde`: serialize every model as its hex code.

pub mod color;
pub mod convert;
pub mod gray;
pub mod hex;
pub mod image;
pub mod rect;
pub mod rgba;

#[cfg(feature = "serde")]
mod serde_impl;

pub use color::{Color, CHANNEL_MAX};
pub use convert::FromColor;
pub use gray::{Gray16, Gray32, Gray64, Gray8};
pub use hex::HexError;
pub use image::{Image, ImageBuffer, ImageMut};
pub use rect::{Rect, RectI};
pub use rgba::{Rgba128, Rgba16, Rgba256, Rgba32, Rgba64, Rgba8};
