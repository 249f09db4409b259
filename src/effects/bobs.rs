//! Shaded balls tracing a closed path, optionally leaving trails.

use std::f64::consts::TAU;

use kurbo::Point;

use super::{PaintCx, Renderer, positive};
use crate::assets::color::{Color, palette_cycle};
use crate::foundation::core::Canvas;
use crate::foundation::rng::FrameRng;
use crate::render::layer::Layer;
use crate::scene::model::{BobPattern, BobsParams};

#[derive(Clone, Debug, PartialEq)]
pub struct BobsState {
    pub time: f64,
}

pub(crate) struct Bobs;

/// Centre of bob `i` at `time`.
pub(crate) fn bob_position(params: &BobsParams, canvas: Canvas, time: f64, i: u32) -> Point {
    let count = f64::from(params.bob_count.max(1));
    let (w, h) = (canvas.w(), canvas.h());
    let c = canvas.center();
    let phase = f64::from(i) / count * TAU + time * params.speed;
    match params.pattern {
        BobPattern::Circle => Point::new(c.x + phase.cos() * w * 0.35, c.y + phase.sin() * h * 0.35),
        BobPattern::Wave => Point::new(
            f64::from(i) / count * w,
            c.y + (phase + f64::from(i) * 0.3).sin() * h * 0.3,
        ),
        BobPattern::Lissajous => Point::new(
            c.x + (phase * 3.0).sin() * w * 0.35,
            c.y + (phase * 2.0).sin() * h * 0.35,
        ),
        BobPattern::Spiral => {
            let r = ((phase * 0.5).sin() + 1.0) * 0.5 * w.min(h) * 0.4;
            Point::new(c.x + (phase * 2.0).cos() * r, c.y + (phase * 2.0).sin() * r)
        }
    }
}

impl Renderer for Bobs {
    type Params = BobsParams;
    type State = BobsState;

    fn reseed(_params: &BobsParams, _canvas: Canvas, _rng: &mut FrameRng) -> BobsState {
        BobsState { time: 0.0 }
    }

    fn step(mut state: BobsState, _params: &BobsParams, _canvas: Canvas, dt: f64, _rng: &mut FrameRng) -> BobsState {
        state.time += 0.05 * dt;
        state
    }

    fn paint(state: &mut BobsState, params: &BobsParams, layer: &mut Layer<'_>, _cx: &mut PaintCx<'_>) {
        if positive(params.trail_length) {
            let fade = (1.0 - params.trail_length / 100.0).clamp(0.0, 1.0);
            layer.fill_all(Color::BLACK.with_alpha(fade));
        } else {
            layer.clear();
        }
        let canvas = layer.canvas();
        let size = params.size;
        if !positive(size) {
            return;
        }

        for i in 0..params.bob_count {
            let Some(color) = palette_cycle(&params.colors, i as usize) else {
                return;
            };
            let p = bob_position(params, canvas, state.time, i);
            if params.glow_enabled {
                layer.fill_radial(p, size * 2.0, &[(0.0, color), (1.0, color.with_alpha(0.0))]);
            }
            layer.fill_circle(p, size, color);
            let highlight = Point::new(p.x - size * 0.3, p.y - size * 0.3);
            layer.fill_circle(highlight, size * 0.3, Color::WHITE.with_alpha(0.5));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/bobs.rs"]
mod tests;
