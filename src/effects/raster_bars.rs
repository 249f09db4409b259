//! Sine-swinging horizontal bars with a mirrored vertical gradient.

use kurbo::{Point, Rect};

use super::{PaintCx, Renderer};
use crate::assets::color::palette_cycle;
use crate::foundation::core::Canvas;
use crate::foundation::rng::FrameRng;
use crate::render::layer::Layer;
use crate::scene::model::RasterBarsParams;

#[derive(Clone, Debug, PartialEq)]
pub struct RasterBarsState {
    pub time: f64,
}

pub(crate) struct RasterBars;

impl Renderer for RasterBars {
    type Params = RasterBarsParams;
    type State = RasterBarsState;

    fn reseed(_params: &RasterBarsParams, _canvas: Canvas, _rng: &mut FrameRng) -> RasterBarsState {
        RasterBarsState { time: 0.0 }
    }

    fn step(
        mut state: RasterBarsState,
        params: &RasterBarsParams,
        _canvas: Canvas,
        dt: f64,
        _rng: &mut FrameRng,
    ) -> RasterBarsState {
        state.time += params.speed * 0.05 * dt;
        state
    }

    fn paint(
        state: &mut RasterBarsState,
        params: &RasterBarsParams,
        layer: &mut Layer<'_>,
        _cx: &mut PaintCx<'_>,
    ) {
        layer.clear();
        let canvas = layer.canvas();
        let count = params.bar_count as usize;
        for i in 0..count {
            let (Some(edge), Some(core)) = (
                palette_cycle(&params.colors, i),
                palette_cycle(&params.colors, i + 1),
            ) else {
                return;
            };
            let fi = i as f64;
            let base_y = canvas.h() / 2.0 + (fi - count as f64 / 2.0) * params.spacing;
            let y = base_y + (state.time + fi * 0.5).sin() * params.amplitude;
            layer.fill_rect_gradient(
                Rect::new(0.0, y, canvas.w(), y + params.bar_height),
                Point::new(0.0, y),
                Point::new(0.0, y + params.bar_height),
                &[(0.0, edge), (0.5, core), (1.0, edge)],
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/raster_bars.rs"]
mod tests;
