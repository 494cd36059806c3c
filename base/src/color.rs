//! Colors of series lines and markers.
//!
//! Colors are accepted in the following forms:
//!  - gray level as a number between 0.0 (black) and 1.0 (white), e.g. `"0.5"`
//!  - single letter codes `b`, `g`, `r`, `c`, `m`, `y`, `k`, `w`
//!  - HTML color names, e.g. `"aliceblue"` (case insensitive)
//!  - HTML hex, e.g. `"#ff8000"` or `"#f80"`
//!  - CSS functional notation `rgb(..)` / `rgba(..)`
//!  - RGB or RGBA components between 0.0 and 1.0 with [`Color::from_components`]
use std::str::FromStr;
use std::{error, fmt};

mod named;

pub use named::*;

/// An 8 bits per channel RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl Default for Color {
    fn default() -> Self {
        BLACK
    }
}

impl Color {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    pub const fn from_rgb_f32(r: f32, g: f32, b: f32) -> Self {
        Color::from_rgba_f32(r, g, b, 1.0)
    }

    pub const fn from_rgba_f32(r: f32, g: f32, b: f32, a: f32) -> Self {
        Color {
            r: unit_to_u8(r),
            g: unit_to_u8(g),
            b: unit_to_u8(b),
            a: unit_to_u8(a),
        }
    }

    /// Build a gray color from a level between 0.0 (black) and 1.0 (white)
    pub fn from_gray(level: f32) -> Result<Self, ParseError> {
        if !(0.0..=1.0).contains(&level) {
            return Err(ParseError::InvalidGray);
        }
        let v = unit_to_u8(level);
        Ok(Color::from_rgb(v, v, v))
    }

    /// Build a color from 3 (RGB) or 4 (RGBA) components, each between 0.0 and 1.0
    pub fn from_components(comps: &[f32]) -> Result<Self, ParseError> {
        if comps.iter().any(|c| !(0.0..=1.0).contains(c)) {
            return Err(ParseError::InvalidComponent);
        }
        match *comps {
            [r, g, b] => Ok(Color::from_rgb_f32(r, g, b)),
            [r, g, b, a] => Ok(Color::from_rgba_f32(r, g, b, a)),
            _ => Err(ParseError::InvalidFormat),
        }
    }

    /// Parse an HTML hex color (`#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`)
    pub fn from_html(hex: &str) -> Result<Self, ParseError> {
        let Some(digits) = hex.strip_prefix('#') else {
            return Err(ParseError::InvalidHex);
        };
        let nibbles = digits
            .bytes()
            .map(hex_to_u8)
            .collect::<Option<Vec<u8>>>()
            .ok_or(ParseError::InvalidHex)?;
        match nibbles[..] {
            [r, g, b] => Ok(Color::from_rgb(r << 4 | r, g << 4 | g, b << 4 | b)),
            [r, g, b, a] => Ok(Color::from_rgba(
                r << 4 | r,
                g << 4 | g,
                b << 4 | b,
                a << 4 | a,
            )),
            [r1, r0, g1, g0, b1, b0] => Ok(Color::from_rgb(r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0)),
            [r1, r0, g1, g0, b1, b0, a1, a0] => Ok(Color::from_rgba(
                r1 << 4 | r0,
                g1 << 4 | g0,
                b1 << 4 | b0,
                a1 << 4 | a0,
            )),
            _ => Err(ParseError::InvalidHex),
        }
    }

    pub const fn rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub const fn rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const fn rgba_f32(&self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    pub const fn alpha(&self) -> u8 {
        self.a
    }

    pub const fn opacity(&self) -> Option<f32> {
        if self.a == 255 {
            None
        } else {
            Some(self.a as f32 / 255.0)
        }
    }

    pub fn html(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Color { a, ..self }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "{}", self.html())
        } else {
            write!(f, "{}{:02x}", self.html(), self.a)
        }
    }
}

const fn unit_to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

const fn hex_to_u8(hex: u8) -> Option<u8> {
    match hex {
        b'0'..=b'9' => Some(hex - b'0'),
        b'a'..=b'f' => Some(hex - b'a' + 10),
        b'A'..=b'F' => Some(hex - b'A' + 10),
        _ => None,
    }
}

/// Color parse error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    InvalidFormat,
    InvalidComponent,
    InvalidAlphaComponent,
    InvalidGray,
    InvalidHex,
    UnknownName,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidFormat => write!(f, "invalid color format"),
            ParseError::InvalidComponent => write!(f, "invalid color component"),
            ParseError::InvalidAlphaComponent => write!(f, "invalid alpha component"),
            ParseError::InvalidGray => write!(f, "gray level must be between 0.0 and 1.0"),
            ParseError::InvalidHex => write!(f, "invalid hex color"),
            ParseError::UnknownName => write!(f, "unknown color name"),
        }
    }
}

impl error::Error for ParseError {}

fn parse_component_0_255(s: &str) -> Result<u8, ParseError> {
    let s = s.trim();
    if let Some(pct) = s.strip_suffix('%') {
        let val = pct
            .trim()
            .parse::<f32>()
            .map_err(|_| ParseError::InvalidComponent)?;
        if !(0.0..=100.0).contains(&val) {
            return Err(ParseError::InvalidComponent);
        }
        Ok(unit_to_u8(val / 100.0))
    } else {
        let v: i32 = s.parse().map_err(|_| ParseError::InvalidComponent)?;
        u8::try_from(v).map_err(|_| ParseError::InvalidComponent)
    }
}

fn parse_alpha(s: &str) -> Result<u8, ParseError> {
    let s = s.trim();
    if let Some(pct) = s.strip_suffix('%') {
        let val = pct
            .trim()
            .parse::<f32>()
            .map_err(|_| ParseError::InvalidAlphaComponent)?;
        if !(0.0..=100.0).contains(&val) {
            return Err(ParseError::InvalidAlphaComponent);
        }
        Ok(unit_to_u8(val / 100.0))
    } else {
        let f = s
            .parse::<f32>()
            .map_err(|_| ParseError::InvalidAlphaComponent)?;
        if !(0.0..=1.0).contains(&f) {
            return Err(ParseError::InvalidAlphaComponent);
        }
        Ok(unit_to_u8(f))
    }
}

fn parse_function<'a>(raw: &'a str, name: &str) -> Option<Vec<&'a str>> {
    let head = raw.get(..name.len() + 1)?;
    if !head.eq_ignore_ascii_case(&format!("{name}(")) {
        return None;
    }
    let inner = raw[name.len() + 1..].strip_suffix(')')?;
    Some(inner.split(',').collect())
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(ParseError::InvalidFormat);
        }

        if raw.starts_with('#') {
            return Color::from_html(raw);
        }

        if let Some(parts) = parse_function(raw, "rgba") {
            let [r, g, b, a] = parts[..] else {
                return Err(ParseError::InvalidFormat);
            };
            return Ok(Color::from_rgba(
                parse_component_0_255(r)?,
                parse_component_0_255(g)?,
                parse_component_0_255(b)?,
                parse_alpha(a)?,
            ));
        }

        if let Some(parts) = parse_function(raw, "rgb") {
            let [r, g, b] = parts[..] else {
                return Err(ParseError::InvalidFormat);
            };
            return Ok(Color::from_rgb(
                parse_component_0_255(r)?,
                parse_component_0_255(g)?,
                parse_component_0_255(b)?,
            ));
        }

        // gray level
        if let Ok(level) = raw.parse::<f32>() {
            return Color::from_gray(level);
        }

        let mut chars = raw.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return lookup_code(c.to_ascii_lowercase()).ok_or(ParseError::UnknownName);
        }

        lookup_name(raw).ok_or(ParseError::UnknownName)
    }
}
