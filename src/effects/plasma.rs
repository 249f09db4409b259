//! Four-term sine plasma mapped through a palette.

use super::{PaintCx, Renderer};
use crate::assets::color::Color;
use crate::foundation::core::Canvas;
use crate::foundation::rng::FrameRng;
use crate::foundation::math::unit_to_u8;
use crate::render::field::Field;
use crate::render::layer::Layer;
use crate::scene::model::PlasmaParams;

#[derive(Clone, Debug, PartialEq)]
pub struct PlasmaState {
    pub time: f64,
}

pub(crate) struct Plasma;

/// Fragment function shared by both field backends.
pub(crate) struct PlasmaField<'a> {
    pub(crate) time: f64,
    pub(crate) scale: f64,
    pub(crate) colors: &'a [Color],
    pub(crate) alpha: u8,
}

impl PlasmaField<'_> {
    /// Field value in `[0, 1]`.
    pub(crate) fn value(&self, x: f64, y: f64) -> f64 {
        let s = 10.0 * self.scale;
        let t = self.time;
        let v = (x / s + t).sin()
            + (y / s + t).sin()
            + ((x + y) / s + t).sin()
            + ((x * x + y * y).sqrt() / s + t).sin();
        (v + 4.0) / 8.0
    }
}

impl Field for PlasmaField<'_> {
    fn sample(&self, x: u32, y: u32) -> Color {
        let n = self.colors.len();
        if n == 0 {
            return Color::rgba(0, 0, 0, 0);
        }
        let pos = self.value(f64::from(x), f64::from(y)) * (n - 1) as f64;
        let lower = (pos.floor().max(0.0) as usize).min(n - 1);
        let upper = (lower + 1).min(n - 1);
        let t = pos - lower as f64;
        let c = self.colors[lower].lerp(self.colors[upper], t);
        Color { a: self.alpha, ..c }
    }
}

impl Renderer for Plasma {
    type Params = PlasmaParams;
    type State = PlasmaState;

    fn reseed(_params: &PlasmaParams, _canvas: Canvas, _rng: &mut FrameRng) -> PlasmaState {
        PlasmaState { time: 0.0 }
    }

    fn step(
        mut state: PlasmaState,
        params: &PlasmaParams,
        _canvas: Canvas,
        dt: f64,
        _rng: &mut FrameRng,
    ) -> PlasmaState {
        state.time += params.speed * 0.02 * dt;
        state
    }

    fn paint(
        state: &mut PlasmaState,
        params: &PlasmaParams,
        layer: &mut Layer<'_>,
        cx: &mut PaintCx<'_>,
    ) {
        if params.colors.is_empty() {
            layer.clear();
            return;
        }
        let field = PlasmaField {
            time: state.time,
            scale: params.scale,
            colors: &params.colors,
            alpha: unit_to_u8(params.intensity),
        };
        cx.fields.paint(layer, &field);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/plasma.rs"]
mod tests;
