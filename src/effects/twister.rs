//! Vertical bars whose width and offset twist down the screen.

use std::f64::consts::TAU;

use kurbo::{BezPath, Point};

use super::{PaintCx, Renderer};
use crate::foundation::core::Canvas;
use crate::foundation::rng::FrameRng;
use crate::render::layer::{Layer, gradient_at};
use crate::scene::model::TwisterParams;

#[derive(Clone, Debug, PartialEq)]
pub struct TwisterState {
    pub time: f64,
}

pub(crate) struct Twister;

/// Centre x and width of `bar` at segment `seg`.
pub(crate) fn segment(params: &TwisterParams, canvas: Canvas, time: f64, bar: u32, seg: u32) -> (f64, f64) {
    let bars = f64::from(params.bar_count);
    let bar_width = canvas.w() / bars;
    let bar_phase = f64::from(bar) / bars * TAU;
    let seg_phase = f64::from(seg) / f64::from(params.segments) * TAU * 2.0;
    let t = time * params.speed;
    let x = canvas.w() / 2.0
        + (t + seg_phase + bar_phase).sin() * params.amplitude
        + (f64::from(bar) - bars / 2.0) * bar_width;
    let width = bar_width * (0.5 + 0.5 * (seg_phase + t).cos());
    (x, width)
}

impl Renderer for Twister {
    type Params = TwisterParams;
    type State = TwisterState;

    fn reseed(_params: &TwisterParams, _canvas: Canvas, _rng: &mut FrameRng) -> TwisterState {
        TwisterState { time: 0.0 }
    }

    fn step(
        mut state: TwisterState,
        _params: &TwisterParams,
        _canvas: Canvas,
        dt: f64,
        _rng: &mut FrameRng,
    ) -> TwisterState {
        state.time += 0.03 * dt;
        state
    }

    fn paint(state: &mut TwisterState, params: &TwisterParams, layer: &mut Layer<'_>, _cx: &mut PaintCx<'_>) {
        layer.clear();
        let n = params.colors.len();
        if params.bar_count == 0 || params.segments == 0 || n == 0 {
            return;
        }
        let canvas = layer.canvas();
        let row_y = |seg: u32| f64::from(seg) / f64::from(params.segments) * canvas.h();

        for bar in 0..params.bar_count {
            let mut path = BezPath::new();
            for seg in 0..=params.segments {
                let (x, w) = segment(params, canvas, state.time, bar, seg);
                let p = Point::new(x - w / 2.0, row_y(seg));
                if seg == 0 {
                    path.move_to(p);
                } else {
                    path.line_to(p);
                }
            }
            for seg in (0..=params.segments).rev() {
                let (x, w) = segment(params, canvas, state.time, bar, seg);
                path.line_to((x + w / 2.0, row_y(seg)));
            }
            path.close_path();

            let index = bar as usize % n;
            let edge = params.colors[index];
            let stops = [
                (0.0, edge),
                (0.5, params.colors[(index + 1) % n]),
                (1.0, edge),
            ];
            let height = canvas.h().max(1.0);
            layer.fill_path_shaded(&path, |_, y| gradient_at(&stops, y / height));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/twister.rs"]
mod tests;
