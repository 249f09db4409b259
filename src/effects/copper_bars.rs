//! Full-width copper list: thin bands cycling through the palette.

use kurbo::Rect;

use super::{PaintCx, Renderer, positive};
use crate::foundation::core::Canvas;
use crate::foundation::rng::FrameRng;
use crate::render::layer::Layer;
use crate::scene::model::CopperBarsParams;

#[derive(Clone, Debug, PartialEq)]
pub struct CopperBarsState {
    pub time: f64,
}

pub(crate) struct CopperBars;

impl Renderer for CopperBars {
    type Params = CopperBarsParams;
    type State = CopperBarsState;

    fn reseed(_params: &CopperBarsParams, _canvas: Canvas, _rng: &mut FrameRng) -> CopperBarsState {
        CopperBarsState { time: 0.0 }
    }

    fn step(
        mut state: CopperBarsState,
        params: &CopperBarsParams,
        _canvas: Canvas,
        dt: f64,
        _rng: &mut FrameRng,
    ) -> CopperBarsState {
        state.time += params.speed * 0.03 * dt;
        state
    }

    // Bands span the full width, so `wave_amplitude` (a horizontal sway) has no visible effect.
    fn paint(
        state: &mut CopperBarsState,
        params: &CopperBarsParams,
        layer: &mut Layer<'_>,
        _cx: &mut PaintCx<'_>,
    ) {
        layer.clear();
        let canvas = layer.canvas();
        let n_colors = params.colors.len();
        if n_colors == 0 || !positive(params.bar_height) {
            return;
        }
        // At most one band per pixel row.
        let bar_height = params.bar_height.max(1.0);
        let bar_count = (canvas.h() / bar_height).floor() as usize;
        for i in 0..bar_count {
            let y = i as f64 * bar_height;
            let progress = (i as f64 / bar_count as f64 + state.time * 0.1).rem_euclid(1.0);
            let scaled = progress * n_colors as f64;
            let index = (scaled.floor() as usize).min(n_colors - 1);
            let next = (index + 1) % n_colors;
            let t = scaled.rem_euclid(1.0);

            let band = Rect::new(0.0, y, canvas.w(), y + bar_height);
            layer.fill_rect(band, params.colors[index].fade(1.0 - t * 0.5));
            layer.fill_rect(band, params.colors[next].fade(t * 0.5));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/copper_bars.rs"]
mod tests;
