//! Display colors
//!
//! Colors travel through config as CSS strings (`#rrggbb`, `rgba(r, g, b, a)`
//! or a small set of names) and are handed back to the canvas in the same form.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::EngineError;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in 0.0..=1.0
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS form accepted by `CanvasRenderingContext2d` style setters
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }

    pub fn parse(s: &str) -> Result<Self, EngineError> {
        let trimmed = s.trim();
        let invalid = || EngineError::InvalidColor(s.to_string());

        match trimmed {
            "white" => return Ok(Color::WHITE),
            "black" => return Ok(Color::BLACK),
            _ => {}
        }

        if let Some(hex) = trimmed.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(invalid());
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
            return Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?));
        }

        let inner = trimmed
            .strip_prefix("rgba(")
            .or_else(|| trimmed.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(invalid)?;
        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() != 3 && parts.len() != 4 {
            return Err(invalid());
        }
        let channel = |p: &str| p.parse::<u8>().map_err(|_| invalid());
        let a = match parts.get(3) {
            Some(p) => p.parse::<f32>().map_err(|_| invalid())?,
            None => 1.0,
        };
        if !(0.0..=1.0).contains(&a) {
            return Err(invalid());
        }
        Ok(Color::rgba(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?, a))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl TryFrom<String> for Color {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_css()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_and_rgba() {
        assert_eq!(Color::parse("#5076ab").unwrap(), Color::rgb(0x50, 0x76, 0xab));
        assert_eq!(
            Color::parse("rgba(75, 123, 179, 0.1)").unwrap(),
            Color::rgba(75, 123, 179, 0.1)
        );
        assert_eq!(Color::parse("white").unwrap(), Color::WHITE);
    }

    #[test]
    fn css_output_matches_canvas_form() {
        assert_eq!(Color::rgb(0xb7, 0x5c, 0x5a).to_css(), "#b75c5a");
        assert_eq!(Color::rgba(0, 0, 0, 0.7).to_css(), "rgba(0, 0, 0, 0.7)");
    }

    #[test]
    fn rejects_garbage() {
        assert!(Color::parse("#12345").is_err());
        assert!(Color::parse("rgba(1, 2)").is_err());
        assert!(Color::parse("rgba(1, 2, 3, 4)").is_err());
        assert!(Color::parse("chartreuse").is_err());
    }
}
