//! Shaded balls arranged in a 3D formation, rotated and depth sorted.

use std::f64::consts::{PI, TAU};

use glam::{DMat3, DVec3};
use kurbo::Point;

use super::{PaintCx, Renderer, key};
use crate::assets::color::{Color, palette_cycle};
use crate::foundation::core::Canvas;
use crate::foundation::rng::FrameRng;
use crate::render::layer::Layer;
use crate::scene::model::{Formation, VectorBallsParams};

#[derive(Clone, Debug, PartialEq)]
pub struct VectorBallsState {
    /// Rest positions in model space; ball `i` takes palette slot `i`.
    pub balls: Vec<DVec3>,
    pub time: f64,
}

pub(crate) struct VectorBalls;

/// Rest positions for `count` balls.
pub fn formation(formation: Formation, count: u32) -> Vec<DVec3> {
    let count_f = f64::from(count);
    match formation {
        Formation::Cube => {
            let n = count_f.cbrt().ceil() as u32;
            let half = f64::from(n) / 2.0;
            let cell = |v: u32| (f64::from(v) - half) * 50.0;
            (0..n)
                .flat_map(|x| (0..n).flat_map(move |y| (0..n).map(move |z| (x, y, z))))
                .take(count as usize)
                .map(|(x, y, z)| DVec3::new(cell(x), cell(y), cell(z)))
                .collect()
        }
        Formation::Sphere => {
            let golden = PI * (3.0 - 5f64.sqrt());
            (0..count)
                .map(|i| {
                    let y = if count > 1 {
                        1.0 - f64::from(i) / (count_f - 1.0) * 2.0
                    } else {
                        0.0
                    };
                    let r = (1.0 - y * y).sqrt();
                    let theta = golden * f64::from(i);
                    DVec3::new(theta.cos() * r, y, theta.sin() * r) * 100.0
                })
                .collect()
        }
        Formation::Torus => (0..count)
            .map(|i| {
                let u = f64::from(i) / count_f * TAU;
                let v = f64::from(i) * 7.0 / count_f * TAU;
                let ring = 80.0 + 30.0 * v.cos();
                DVec3::new(ring * u.cos(), 30.0 * v.sin(), ring * u.sin())
            })
            .collect(),
        Formation::Wave => {
            let grid = count_f.sqrt().ceil().max(1.0) as u32;
            let half = f64::from(grid) / 2.0;
            (0..count)
                .map(|i| {
                    let gx = f64::from(i % grid);
                    let gz = f64::from(i / grid);
                    DVec3::new((gx - half) * 40.0, 0.0, (gz - half) * 40.0)
                })
                .collect()
        }
    }
}

/// A ball after rotation and projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedBall {
    pub center: Point,
    /// Rotated depth; larger is farther from the viewer.
    pub depth: f64,
    pub scale: f64,
    pub slot: usize,
}

/// Rotate and project every ball, returned in painting order (farthest first). Balls at or
/// behind the camera plane are dropped.
pub fn project(state: &VectorBallsState, params: &VectorBallsParams, canvas: Canvas) -> Vec<ProjectedBall> {
    let t = state.time;
    let rot = DMat3::from_rotation_z(t * params.rotation_z * 0.01)
        * DMat3::from_rotation_y(t * params.rotation_y * 0.01)
        * DMat3::from_rotation_x(t * params.rotation_x * 0.01);
    let wave = t * params.speed * 0.1;
    let c = canvas.center();

    let mut out: Vec<ProjectedBall> = state
        .balls
        .iter()
        .enumerate()
        .filter_map(|(slot, &rest)| {
            let mut p = rest;
            if params.formation == Formation::Wave {
                p.y = (p.x * 0.05 + wave).sin() * 30.0 + (p.z * 0.05 + wave).sin() * 30.0;
            }
            let r = rot * p;
            let scale = params.perspective / (params.perspective + r.z);
            (scale.is_finite() && scale > 0.0).then(|| ProjectedBall {
                center: Point::new(c.x + r.x * scale, c.y + r.y * scale),
                depth: r.z,
                scale,
                slot,
            })
        })
        .collect();
    out.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    out
}

impl Renderer for VectorBalls {
    type Params = VectorBallsParams;
    type State = VectorBallsState;

    fn structural_key(params: &VectorBallsParams, canvas: Canvas) -> u64 {
        key(canvas, |h| {
            h.write_u32(params.ball_count);
            h.write_u8(params.formation as u8);
        })
    }

    fn reseed(params: &VectorBallsParams, _canvas: Canvas, _rng: &mut FrameRng) -> VectorBallsState {
        VectorBallsState {
            balls: formation(params.formation, params.ball_count),
            time: 0.0,
        }
    }

    fn step(
        mut state: VectorBallsState,
        params: &VectorBallsParams,
        _canvas: Canvas,
        dt: f64,
        _rng: &mut FrameRng,
    ) -> VectorBallsState {
        state.time += params.speed * 0.5 * dt;
        state
    }

    fn paint(
        state: &mut VectorBallsState,
        params: &VectorBallsParams,
        layer: &mut Layer<'_>,
        _cx: &mut PaintCx<'_>,
    ) {
        layer.clear();
        if params.colors.is_empty() {
            return;
        }
        let canvas = layer.canvas();
        for ball in project(state, params, canvas) {
            let Some(color) = palette_cycle(&params.colors, ball.slot) else {
                continue;
            };
            let radius = (params.size * ball.scale).max(1.0);
            let focal = Point::new(ball.center.x - radius * 0.3, ball.center.y - radius * 0.3);
            layer.fill_circle_focal(
                ball.center,
                radius,
                focal,
                &[(0.0, Color::WHITE), (0.3, color), (1.0, Color::BLACK)],
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/vector_balls.rs"]
mod tests;
