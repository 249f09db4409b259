//! Rotating, breathing zoom over a tiled pattern.

use super::{PaintCx, Renderer};
use crate::assets::color::Color;
use crate::foundation::core::Canvas;
use crate::foundation::math::fmod;
use crate::foundation::rng::FrameRng;
use crate::render::field::Field;
use crate::render::layer::Layer;
use crate::scene::model::{RotoPattern, RotoZoomParams};

const FALLBACK_ON: Color = Color::rgb(0xFF, 0x00, 0xFF);
const FALLBACK_OFF: Color = Color::BLACK;

#[derive(Clone, Debug, PartialEq)]
pub struct RotoZoomState {
    pub time: f64,
}

pub(crate) struct RotoZoom;

pub(crate) struct RotoField {
    pub(crate) center: (f64, f64),
    pub(crate) cos: f64,
    pub(crate) sin: f64,
    pub(crate) scale: f64,
    pub(crate) pattern: RotoPattern,
    pub(crate) on: Color,
    pub(crate) off: Color,
}

impl RotoField {
    pub(crate) fn new(params: &RotoZoomParams, canvas: Canvas, time: f64) -> Self {
        let rotation = time * params.rotation_speed;
        let zoom = 1.0 + (time * params.zoom_speed).sin() * 0.5;
        Self {
            center: (canvas.w() / 2.0, canvas.h() / 2.0),
            cos: rotation.cos(),
            sin: rotation.sin(),
            scale: params.scale * zoom,
            pattern: params.pattern,
            on: params.colors.first().copied().unwrap_or(FALLBACK_ON),
            off: params.colors.get(1).copied().unwrap_or(FALLBACK_OFF),
        }
    }

    /// Whether texture coordinate `tx`, `ty` falls on the "on" color.
    pub(crate) fn lit(&self, tx: f64, ty: f64) -> bool {
        match self.pattern {
            RotoPattern::Checkerboard => {
                ((tx / 20.0).floor() + (ty / 20.0).floor()).rem_euclid(2.0) == 0.0
            }
            RotoPattern::Stripes => (tx / 15.0).floor().rem_euclid(2.0) == 0.0,
            RotoPattern::Dots => {
                let dx = fmod(tx, 30.0);
                let dy = fmod(ty, 30.0);
                dx * dx + dy * dy < 100.0
            }
            RotoPattern::Custom => (tx / 10.0).sin() * (ty / 10.0).cos() > 0.0,
        }
    }
}

impl Field for RotoField {
    fn sample(&self, x: u32, y: u32) -> Color {
        let dx = f64::from(x) - self.center.0;
        let dy = f64::from(y) - self.center.1;
        let tx = (dx * self.cos - dy * self.sin) / self.scale;
        let ty = (dx * self.sin + dy * self.cos) / self.scale;
        if self.lit(tx, ty) { self.on } else { self.off }
    }
}

impl Renderer for RotoZoom {
    type Params = RotoZoomParams;
    type State = RotoZoomState;

    fn reseed(_params: &RotoZoomParams, _canvas: Canvas, _rng: &mut FrameRng) -> RotoZoomState {
        RotoZoomState { time: 0.0 }
    }

    fn step(
        mut state: RotoZoomState,
        _params: &RotoZoomParams,
        _canvas: Canvas,
        dt: f64,
        _rng: &mut FrameRng,
    ) -> RotoZoomState {
        state.time += 0.02 * dt;
        state
    }

    fn paint(
        state: &mut RotoZoomState,
        params: &RotoZoomParams,
        layer: &mut Layer<'_>,
        cx: &mut PaintCx<'_>,
    ) {
        let field = RotoField::new(params, layer.canvas(), state.time);
        cx.fields.paint(layer, &field);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/rotozoom.rs"]
mod tests;
