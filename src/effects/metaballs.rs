//! Metaballs: a thresholded inverse-square field from drifting point sources.

use rand::Rng;

use super::{PaintCx, Renderer, key};
use crate::assets::color::Color;
use crate::foundation::core::Canvas;
use crate::foundation::rng::FrameRng;
use crate::render::layer::Layer;
use crate::scene::model::MetaballsParams;

/// Field is sampled once per `CELL x CELL` block.
const CELL: u32 = 2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ball {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MetaballsState {
    pub balls: Vec<Ball>,
}

impl MetaballsState {
    /// Summed field strength at `x`, `y`.
    pub fn field(&self, x: f64, y: f64) -> f64 {
        self.balls
            .iter()
            .map(|b| {
                let dx = x - b.x;
                let dy = y - b.y;
                b.radius * b.radius / (dx * dx + dy * dy + 1.0)
            })
            .sum()
    }
}

pub(crate) struct Metaballs;

impl Renderer for Metaballs {
    type Params = MetaballsParams;
    type State = MetaballsState;

    fn structural_key(params: &MetaballsParams, canvas: Canvas) -> u64 {
        key(canvas, |h| {
            h.write_u32(params.ball_count);
            h.write_f64(params.size);
        })
    }

    fn reseed(params: &MetaballsParams, canvas: Canvas, rng: &mut FrameRng) -> MetaballsState {
        let balls = (0..params.ball_count)
            .map(|_| Ball {
                x: rng.random::<f64>() * canvas.w(),
                y: rng.random::<f64>() * canvas.h(),
                vx: (rng.random::<f64>() - 0.5) * 4.0,
                vy: (rng.random::<f64>() - 0.5) * 4.0,
                radius: params.size * (0.5 + rng.random::<f64>() * 0.5),
            })
            .collect();
        MetaballsState { balls }
    }

    fn step(
        mut state: MetaballsState,
        params: &MetaballsParams,
        canvas: Canvas,
        dt: f64,
        _rng: &mut FrameRng,
    ) -> MetaballsState {
        for ball in &mut state.balls {
            ball.x += ball.vx * params.speed * dt;
            ball.y += ball.vy * params.speed * dt;
            if ball.x < 0.0 || ball.x > canvas.w() {
                ball.vx = -ball.vx;
            }
            if ball.y < 0.0 || ball.y > canvas.h() {
                ball.vy = -ball.vy;
            }
            ball.x = ball.x.clamp(0.0, canvas.w());
            ball.y = ball.y.clamp(0.0, canvas.h());
        }
        state
    }

    fn paint(
        state: &mut MetaballsState,
        params: &MetaballsParams,
        layer: &mut Layer<'_>,
        _cx: &mut PaintCx<'_>,
    ) {
        layer.clear();
        let n = params.colors.len();
        if n == 0 {
            return;
        }
        let canvas = layer.canvas();
        for py in (0..canvas.height).step_by(CELL as usize) {
            for px in (0..canvas.width).step_by(CELL as usize) {
                let sum = state.field(f64::from(px), f64::from(py));
                let excess = sum - params.threshold;
                if excess.is_nan() || excess <= 0.0 {
                    continue;
                }
                let index = ((excess * (n - 1) as f64).floor().max(0.0) as usize).min(n - 1);
                let alpha = (excess * 100.0).min(255.0) as u8;
                let color = Color {
                    a: alpha,
                    ..params.colors[index]
                };
                for sy in py..(py + CELL).min(canvas.height) {
                    for sx in px..(px + CELL).min(canvas.width) {
                        layer.put_pixel(i64::from(sx), i64::from(sy), color);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/metaballs.rs"]
mod tests;
