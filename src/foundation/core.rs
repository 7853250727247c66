use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{PixelatorError, PixelatorResult};

/// Opaque RGB8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Pure yellow, the default background.
    pub const YELLOW: Self = Self::new(255, 255, 0);

    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an `[r, g, b]` array.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Parse `#RRGGBB` / `RRGGBB` or one of the supported color names.
    pub fn parse(s: &str) -> PixelatorResult<Self> {
        let s = s.trim();
        if let Some(named) = named_color(s) {
            return Ok(named);
        }
        parse_hex(s).map_err(PixelatorError::config)
    }
}

impl FromStr for Rgb8 {
    type Err = PixelatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl<'de> Deserialize<'de> for Rgb8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Obj { r: u8, g: u8, b: u8 },
            Arr(Vec<u8>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Text(s) => Rgb8::parse(&s).map_err(serde::de::Error::custom),
            Repr::Obj { r, g, b } => Ok(Rgb8::new(r, g, b)),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Rgb8::new(*r, *g, *b)),
                _ => Err(serde::de::Error::custom(
                    "rgb array must have exactly 3 elements ([r,g,b])",
                )),
            },
        }
    }
}

fn named_color(name: &str) -> Option<Rgb8> {
    let c = match name.to_ascii_lowercase().as_str() {
        "black" => Rgb8::BLACK,
        "white" => Rgb8::WHITE,
        "red" => Rgb8::new(255, 0, 0),
        "green" => Rgb8::new(0, 255, 0),
        "blue" => Rgb8::new(0, 0, 255),
        "yellow" => Rgb8::YELLOW,
        "cyan" => Rgb8::new(0, 255, 255),
        "magenta" => Rgb8::new(255, 0, 255),
        "orange" => Rgb8::new(255, 165, 0),
        "purple" => Rgb8::new(160, 32, 240),
        "gray" | "grey" => Rgb8::new(190, 190, 190),
        _ => return None,
    };
    Some(c)
}

fn parse_hex(s: &str) -> Result<Rgb8, String> {
    let hex = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if hex.len() != 6 || !hex.is_ascii() {
        return Err(format!(
            "unknown color \"{s}\" (expected #RRGGBB or a color name)"
        ));
    }
    Ok(Rgb8::new(
        hex_byte(&hex[0..2])?,
        hex_byte(&hex[2..4])?,
        hex_byte(&hex[4..6])?,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
