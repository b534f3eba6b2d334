//! Colors in the form the 2D canvas understands.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorParseError;

/// An sRGB color with straight alpha in `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }
}

/// Greens of the hero section, brightest first.
pub const DEFAULT_PALETTE: [Rgba; 6] = [
    Rgba::opaque(0x22, 0xC5, 0x5E), // accent
    Rgba::opaque(0x16, 0xA3, 0x4A),
    Rgba::opaque(0x15, 0x80, 0x3D),
    Rgba::opaque(0x16, 0x65, 0x34),
    Rgba::opaque(0x14, 0x53, 0x2D),
    Rgba::opaque(0x0D, 0x33, 0x20),
];

pub const DEFAULT_BACKGROUND: Rgba = Rgba::opaque(0x0A, 0x0A, 0x0A);

pub const DEFAULT_OUTLINE: Rgba = Rgba::opaque(255, 255, 255).with_alpha(0.05);

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
        }
    }
}

impl FromStr for Rgba {
    type Err = ColorParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let s = input.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(input, hex);
        }
        let lower = s.to_ascii_lowercase();
        if let Some(body) = lower.strip_prefix("rgba(").and_then(|b| b.strip_suffix(')')) {
            return parse_components(input, body, true);
        }
        if let Some(body) = lower.strip_prefix("rgb(").and_then(|b| b.strip_suffix(')')) {
            return parse_components(input, body, false);
        }
        Err(ColorParseError::new(input, "expected #hex, rgb() or rgba()"))
    }
}

fn parse_hex(input: &str, hex: &str) -> Result<Rgba, ColorParseError> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorParseError::new(input, "non-hex digit"));
    }
    let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| ColorParseError::new(input, "non-hex digit"));
    match hex.len() {
        6 => Ok(Rgba::opaque(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        // #RGB expands each nibble, e.g. #F80 == #FF8800
        3 => {
            let r = channel(&hex[0..1])?;
            let g = channel(&hex[1..2])?;
            let b = channel(&hex[2..3])?;
            Ok(Rgba::opaque(r * 17, g * 17, b * 17))
        }
        _ => Err(ColorParseError::new(input, "hex colors need 3 or 6 digits")),
    }
}

fn parse_components(input: &str, body: &str, with_alpha: bool) -> Result<Rgba, ColorParseError> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return Err(ColorParseError::new(input, "wrong number of components"));
    }
    let channel = |part: &str| part.parse::<u8>().map_err(|_| ColorParseError::new(input, "channel must be 0-255"));
    let mut color = Rgba::opaque(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?);
    if with_alpha {
        let a: f64 = parts[3]
            .parse()
            .map_err(|_| ColorParseError::new(input, "alpha must be a number"))?;
        if !(0.0..=1.0).contains(&a) {
            return Err(ColorParseError::new(input, "alpha must lie in [0, 1]"));
        }
        color.a = a;
    }
    Ok(color)
}

/// Parses a comma-separated list of hex colors, e.g. `#22C55E,#0D3320`.
///
/// `rgb()`/`rgba()` entries contain commas themselves and are not accepted here.
pub fn parse_palette(input: &str) -> Result<Vec<Rgba>, ColorParseError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::parse)
        .collect()
}
