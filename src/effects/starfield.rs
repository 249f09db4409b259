//! 3D starfield flying toward the viewer.

use kurbo::Point;
use rand::Rng;

use super::{PaintCx, Renderer, key};
use crate::assets::color::Color;
use crate::foundation::core::Canvas;
use crate::foundation::rng::FrameRng;
use crate::render::layer::Layer;
use crate::scene::model::StarfieldParams;

/// Depth a star is (re)spawned at.
pub const FAR_PLANE: f64 = 1000.0;
/// Projection focal length.
const FOCAL: f64 = 500.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    /// Offset from the centre, in pixels at the focal plane.
    pub x: f64,
    pub y: f64,
    /// Depth in `(0, FAR_PLANE]`.
    pub z: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StarfieldState {
    pub stars: Vec<Star>,
}

pub(crate) struct Starfield;

fn spawn_xy(canvas: Canvas, rng: &mut FrameRng) -> (f64, f64) {
    (
        rng.random::<f64>() * canvas.w() - canvas.w() / 2.0,
        rng.random::<f64>() * canvas.h() - canvas.h() / 2.0,
    )
}

impl Renderer for Starfield {
    type Params = StarfieldParams;
    type State = StarfieldState;

    fn structural_key(params: &StarfieldParams, canvas: Canvas) -> u64 {
        key(canvas, |h| h.write_u32(params.star_count))
    }

    fn reseed(params: &StarfieldParams, canvas: Canvas, rng: &mut FrameRng) -> StarfieldState {
        let stars = (0..params.star_count)
            .map(|_| {
                let (x, y) = spawn_xy(canvas, rng);
                // `random` is in [0, 1), so depth lands in (0, FAR_PLANE].
                let z = FAR_PLANE * (1.0 - rng.random::<f64>());
                Star { x, y, z }
            })
            .collect();
        StarfieldState { stars }
    }

    fn step(
        mut state: StarfieldState,
        params: &StarfieldParams,
        canvas: Canvas,
        dt: f64,
        rng: &mut FrameRng,
    ) -> StarfieldState {
        for star in &mut state.stars {
            star.z -= params.speed * 5.0 * dt;
            if star.z <= 0.0 {
                let (x, y) = spawn_xy(canvas, rng);
                *star = Star { x, y, z: FAR_PLANE };
            }
        }
        state
    }

    fn paint(
        state: &mut StarfieldState,
        params: &StarfieldParams,
        layer: &mut Layer<'_>,
        _cx: &mut PaintCx<'_>,
    ) {
        let canvas = layer.canvas();
        layer.fill_all(Color::BLACK.with_alpha(0.1));
        let center = canvas.center();
        for star in &state.stars {
            if star.z <= 0.0 {
                continue;
            }
            let x = star.x / star.z * FOCAL + center.x;
            let y = star.y / star.z * FOCAL + center.y;
            if !(0.0..=canvas.w()).contains(&x) || !(0.0..=canvas.h()).contains(&y) {
                continue;
            }
            let nearness = 1.0 - star.z / FAR_PLANE;
            let size = (nearness * params.max_size * params.depth).max(0.1);
            let brightness = nearness.max(0.2);
            layer.fill_circle(Point::new(x, y), size, params.star_color.fade(brightness));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/starfield.rs"]
mod tests;
