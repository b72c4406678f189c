//! Serde support (`serde` feature).
//!
//! Every color model serializes as its hex code, the same string
//! [`Color::hex`] returns, and deserializes through its `FromStr` impl.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::color::Color;
use crate::gray::{Gray16, Gray32, Gray64, Gray8};
use crate::rgba::{Rgba128, Rgba16, Rgba256, Rgba32, Rgba64, Rgba8};

macro_rules! impl_hex_serde {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.serialize_str(&self.hex())
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    let s = String::deserialize(deserializer)?;
                    s.parse().map_err(de::Error::custom)
                }
            }
        )*
    };
}

impl_hex_serde!(
    Gray8, Gray16, Gray32, Gray64, Rgba8, Rgba16, Rgba32, Rgba64, Rgba128, Rgba256,
);
