use crate::error::{ChartError, Result};
use serde::{Deserialize, Serialize};

/// RGBA color written as a hex string in chart parameters.
///
/// Opaque colors use the six-digit `RRGGBB` form, translucent ones the
/// eight-digit `RRGGBBAA` form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChartColor(#[serde(with = "hex_color")] Rgba);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct Rgba {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl ChartColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(Rgba { r, g, b, a })
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const WHITE: ChartColor = ChartColor::rgb(255, 255, 255);
    pub const BLACK: ChartColor = ChartColor::rgb(0, 0, 0);
    pub const RED: ChartColor = ChartColor::rgb(255, 0, 0);
    pub const GREEN: ChartColor = ChartColor::rgb(0, 255, 0);
    pub const BLUE: ChartColor = ChartColor::rgb(0, 0, 255);

    pub fn red(&self) -> u8 {
        self.0.r
    }

    pub fn green(&self) -> u8 {
        self.0.g
    }

    pub fn blue(&self) -> u8 {
        self.0.b
    }

    pub fn alpha(&self) -> u8 {
        self.0.a
    }

    pub fn hex(&self) -> String {
        hex_color::to_hex(&self.0)
    }

    /// Parses `RRGGBB` or `RRGGBBAA`, with or without a leading `#`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        hex_color::parse_hex_str(hex).map(Self)
    }
}

// Serde helpers for Rgba <-> hex string
mod hex_color {
    use super::*;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(color: &Rgba, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&to_hex(color))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<Rgba, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_hex_str(&s).map_err(serde::de::Error::custom)
    }

    pub fn to_hex(c: &Rgba) -> String {
        if c.a == 255 {
            format!("{:02X}{:02X}{:02X}", c.r, c.g, c.b)
        } else {
            format!("{:02X}{:02X}{:02X}{:02X}", c.r, c.g, c.b, c.a)
        }
    }

    pub fn parse_hex_str(hex: &str) -> Result<Rgba> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
            return Err(ChartError::InvalidArgument(format!(
                "color must be RRGGBB or RRGGBBAA, got {hex:?}"
            )));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| {
                ChartError::InvalidArgument(format!("invalid hex digits in color {hex:?}"))
            })
        };
        let a = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Rgba {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_forms() {
        assert_eq!(ChartColor::RED.hex(), "FF0000");
        assert_eq!(ChartColor::new(0x01, 0x02, 0x03, 0x04).hex(), "01020304");
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(ChartColor::from_hex("#0000ff").unwrap(), ChartColor::BLUE);
        assert_eq!(
            ChartColor::from_hex("FF000080").unwrap(),
            ChartColor::new(255, 0, 0, 0x80)
        );
        assert!(ChartColor::from_hex("FF00").is_err());
        assert!(ChartColor::from_hex("GG0000").is_err());
    }
}
