use serde::{Deserialize, Deserializer, Serializer};

pub mod as_hex {
    use alloc::string::{String, ToString};

    use super::{Deserialize, Deserializer, Serializer};
    use crate::Color;

    /// Serialize a color as its `#rrggbb` (or `#rrggbbaa`) string.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<S>(color: &Color, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&color.to_string())
    }

    /// Deserialize a color from a `#rrggbb` or `#rrggbbaa` string.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The underlying deserializer fails
    /// - The string is not a well-formed hex color
    pub fn deserialize<'de, D>(d: D) -> Result<Color, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(d)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
