use crate::foundation::core::Rgba8Premul;
use crate::foundation::math::unit_to_u8;
use serde::{Deserialize, Serialize};

/// Straight-alpha RGBA8 color.
///
/// Serialized as `#RRGGBB` (or `#RRGGBBAA` when not opaque). Deserialization also accepts the
/// short `#RGB` form and `[r, g, b]` / `[r, g, b, a]` byte arrays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a CSS-style hex color.
    pub fn parse_hex(s: &str) -> Result<Self, String> {
        parse_hex(s)
    }

    /// Same color with alpha replaced by `alpha` in `[0, 1]`.
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            a: unit_to_u8(alpha),
            ..self
        }
    }

    /// Same color with alpha scaled by `alpha` in `[0, 1]`.
    pub fn fade(self, alpha: f64) -> Self {
        self.with_alpha(f64::from(self.a) / 255.0 * alpha)
    }

    /// Per-channel linear blend, truncating like integer pixel writes do.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mix = |a: u8, b: u8| -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).floor().clamp(0.0, 255.0) as u8
        };
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    pub fn to_rgba8_premul(self) -> Rgba8Premul {
        Rgba8Premul::from_straight_rgba(self.r, self.g, self.b, self.a)
    }

    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Arr(Vec<u8>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Self::rgb(*r, *g, *b)),
                [r, g, b, a] => Ok(Self::rgba(*r, *g, *b, *a)),
                _ => Err(serde::de::Error::custom(
                    "color array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

fn parse_hex(s: &str) -> Result<Color, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);
    if !s.is_ascii() {
        return Err(format!("invalid hex color \"{s}\""));
    }

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    match s.len() {
        3 => {
            let nib = |i: usize| -> Result<u8, String> {
                let v = hex_byte(&s[i..i + 1])?;
                Ok(v * 17)
            };
            Ok(Color::rgb(nib(0)?, nib(1)?, nib(2)?))
        }
        6 => Ok(Color::rgb(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        )),
        8 => Ok(Color::rgba(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        )),
        _ => Err("hex color must be #RGB, #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned()),
    }
}

/// Sample a palette at `t` in `[0, 1]`, blending adjacent entries.
///
/// Returns `None` for an empty palette.
pub fn palette_at(colors: &[Color], t: f64) -> Option<Color> {
    let (first, rest) = colors.split_first()?;
    if rest.is_empty() {
        return Some(*first);
    }
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let pos = t * (colors.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = (lo + 1).min(colors.len() - 1);
    Some(colors[lo].lerp(colors[hi], pos - lo as f64))
}

/// Index into a palette with wrap-around. Returns `None` for an empty palette.
pub fn palette_cycle(colors: &[Color], i: usize) -> Option<Color> {
    if colors.is_empty() {
        None
    } else {
        Some(colors[i % colors.len()])
    }
}

/// Built-in 8-color palettes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamedPalette {
    Amiga,
    C64,
    Atari,
    Neon,
    Sunset,
    Ocean,
    Retro,
    Matrix,
    Fire,
    Cyber,
}

impl NamedPalette {
    pub const ALL: [Self; 10] = [
        Self::Amiga,
        Self::C64,
        Self::Atari,
        Self::Neon,
        Self::Sunset,
        Self::Ocean,
        Self::Retro,
        Self::Matrix,
        Self::Fire,
        Self::Cyber,
    ];

    pub fn colors(self) -> Vec<Color> {
        let hex: [u32; 8] = match self {
            Self::Amiga => [
                0x000000, 0xFF0000, 0x00FF00, 0xFFFF00, 0x0000FF, 0xFF00FF, 0x00FFFF, 0xFFFFFF,
            ],
            Self::C64 => [
                0x000000, 0xFFFFFF, 0x880000, 0xAAFFEE, 0xCC44CC, 0x00CC55, 0x0000AA, 0xEEEE77,
            ],
            Self::Atari => [
                0x000000, 0x444444, 0x888888, 0xBBBBBB, 0xFFFFFF, 0xFF0000, 0x00FF00, 0x0000FF,
            ],
            Self::Neon => [
                0xFF00FF, 0x00FFFF, 0xFFFF00, 0xFF0080, 0x80FF00, 0x0080FF, 0xFF8000, 0x8000FF,
            ],
            Self::Sunset => [
                0xFF6B6B, 0xFFE66D, 0xFF8E53, 0xFF6B9D, 0xC44569, 0xF8B500, 0xFF6347, 0xFFD700,
            ],
            Self::Ocean => [
                0x0077B6, 0x00B4D8, 0x90E0EF, 0xCAF0F8, 0x023E8A, 0x0096C7, 0x48CAE4, 0xADE8F4,
            ],
            Self::Retro => [
                0x2E294E, 0x541388, 0xF72585, 0x7209B7, 0x3A0CA3, 0x4361EE, 0x4CC9F0, 0xF72585,
            ],
            Self::Matrix => [
                0x003B00, 0x008F11, 0x00FF41, 0x00FF00, 0x33FF33, 0x66FF66, 0x99FF99, 0xCCFFCC,
            ],
            Self::Fire => [
                0xFF0000, 0xFF3300, 0xFF6600, 0xFF9900, 0xFFCC00, 0xFFFF00, 0xFFFF33, 0xFFFFFF,
            ],
            Self::Cyber => [
                0x0D0221, 0x0F084B, 0x26408B, 0x3D6CB9, 0x86BBD8, 0xFF00FF, 0x00FFFF, 0xFFFF00,
            ],
        };
        hex.iter()
            .map(|&v| Color::rgb((v >> 16) as u8, (v >> 8) as u8, v as u8))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/color.rs"]
mod tests;
