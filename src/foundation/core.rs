use crate::foundation::error::{CracktroError, CracktroResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Largest edge accepted for a drawing surface.
///
/// `vello_cpu` addresses pixmaps with `u16` coordinates.
pub const MAX_CANVAS_EDGE: u32 = u16::MAX as u32;

/// Drawing surface dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create validated dimensions (non-zero, rasterizable).
    pub fn new(width: u32, height: u32) -> CracktroResult<Self> {
        if width == 0 || height == 0 {
            return Err(CracktroError::validation(format!(
                "canvas must be non-empty, got {width}x{height}"
            )));
        }
        if width > MAX_CANVAS_EDGE || height > MAX_CANVAS_EDGE {
            return Err(CracktroError::validation(format!(
                "canvas {width}x{height} exceeds {MAX_CANVAS_EDGE} px per edge"
            )));
        }
        Ok(Self { width, height })
    }

    /// Width as `f64`, for simulation math.
    pub fn w(self) -> f64 {
        f64::from(self.width)
    }

    /// Height as `f64`, for simulation math.
    pub fn h(self) -> f64 {
        f64::from(self.height)
    }

    /// Surface centre.
    pub fn center(self) -> Point {
        Point::new(self.w() / 2.0, self.h() / 2.0)
    }

    /// Number of pixels.
    pub fn pixel_count(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Length of a tightly packed RGBA8 buffer of this size.
    pub fn byte_len(self) -> usize {
        self.pixel_count() * 4
    }
}

/// Premultiplied RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgba8Premul {
    /// Red channel premultiplied by alpha.
    pub r: u8,
    /// Green channel premultiplied by alpha.
    pub g: u8,
    /// Blue channel premultiplied by alpha.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8Premul {
    /// Fully transparent black.
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Convert straight-alpha RGBA8 into premultiplied RGBA8.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    /// Channels in memory order.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Undo premultiplication. Transparent pixels map to transparent black.
    pub fn to_straight(self) -> [u8; 4] {
        if self.a == 0 {
            return [0, 0, 0, 0];
        }
        let a = u32::from(self.a);
        let un = |c: u8| -> u8 { ((u32::from(c) * 255 + a / 2) / a).min(255) as u8 };
        [un(self.r), un(self.g), un(self.b), self.a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
