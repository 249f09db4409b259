//! Two overlapping line patterns, one drifting, producing interference fringes.

use kurbo::{Affine, BezPath, Circle, Shape as _};

use super::{PaintCx, Renderer, positive};
use crate::assets::color::Color;
use crate::foundation::core::Canvas;
use crate::foundation::rng::FrameRng;
use crate::render::layer::Layer;
use crate::scene::model::{MoireParams, MoirePattern};

/// Patterns never get denser than one line per pixel.
const MIN_SPACING: f64 = 1.0;
const LINE_WIDTH: f64 = 1.0;

#[derive(Clone, Debug, PartialEq)]
pub struct MoireState {
    pub time: f64,
}

pub(crate) struct Moire;

/// `start, start + step, ...` while below `end`.
fn steps(start: f64, end: f64, step: f64) -> impl Iterator<Item = f64> {
    let mut v = start;
    std::iter::from_fn(move || {
        (v < end).then(|| {
            let out = v;
            v += step;
            out
        })
    })
}

fn rings(path: &mut BezPath, cx: f64, cy: f64, spacing: f64, limit: f64) {
    for r in steps(spacing, limit, spacing) {
        path.extend(Circle::new((cx, cy), r).path_elements(0.1));
    }
}

fn verticals(path: &mut BezPath, xs: impl Iterator<Item = f64>, y0: f64, y1: f64) {
    for x in xs {
        path.move_to((x, y0));
        path.line_to((x, y1));
    }
}

fn horizontals(path: &mut BezPath, ys: impl Iterator<Item = f64>, x0: f64, x1: f64) {
    for y in ys {
        path.move_to((x0, y));
        path.line_to((x1, y));
    }
}

/// The fixed reference pattern.
pub(crate) fn base_pattern(pattern: MoirePattern, canvas: Canvas, spacing: f64) -> BezPath {
    let (w, h) = (canvas.w(), canvas.h());
    let mut path = BezPath::new();
    match pattern {
        MoirePattern::Circles => rings(&mut path, w / 2.0, h / 2.0, spacing, w.max(h)),
        MoirePattern::Lines => verticals(&mut path, steps(0.0, w, spacing), 0.0, h),
        MoirePattern::Grid => {
            verticals(&mut path, steps(0.0, w, spacing), 0.0, h);
            horizontals(&mut path, steps(0.0, h, spacing), 0.0, w);
        }
    }
    path
}

/// The moving pattern, already in device space.
pub(crate) fn drifting_pattern(params: &MoireParams, canvas: Canvas, spacing: f64, time: f64) -> BezPath {
    let (w, h) = (canvas.w(), canvas.h());
    let dx = time.sin() * params.offset_x;
    let dy = time.cos() * params.offset_y;
    let mut path = BezPath::new();
    match params.pattern {
        MoirePattern::Circles => {
            rings(&mut path, w / 2.0 + dx, h / 2.0 + dy, spacing, w.max(h));
            path
        }
        MoirePattern::Lines => {
            verticals(&mut path, steps(0.0, w + 100.0, spacing), -50.0, h + 50.0);
            let c = canvas.center().to_vec2();
            let tilt = (time * 0.5).sin() * 0.1;
            Affine::translate(c) * Affine::rotate(tilt) * Affine::translate((dx - c.x, -c.y)) * path
        }
        MoirePattern::Grid => {
            verticals(&mut path, steps(-spacing, w + spacing, spacing), 0.0, h);
            horizontals(&mut path, steps(-spacing, h + spacing, spacing), 0.0, w);
            Affine::translate((dx, dy)) * path
        }
    }
}

impl Renderer for Moire {
    type Params = MoireParams;
    type State = MoireState;

    fn reseed(_params: &MoireParams, _canvas: Canvas, _rng: &mut FrameRng) -> MoireState {
        MoireState { time: 0.0 }
    }

    fn step(mut state: MoireState, params: &MoireParams, _canvas: Canvas, dt: f64, _rng: &mut FrameRng) -> MoireState {
        state.time += params.speed * 0.02 * dt;
        state
    }

    fn paint(state: &mut MoireState, params: &MoireParams, layer: &mut Layer<'_>, _cx: &mut PaintCx<'_>) {
        layer.clear();
        if !positive(params.spacing) {
            return;
        }
        let canvas = layer.canvas();
        let spacing = params.spacing.max(MIN_SPACING);
        let first = params.colors.first().copied().unwrap_or(Color::WHITE);
        let second = params.colors.get(1).copied().unwrap_or(first);

        layer.stroke_path(&base_pattern(params.pattern, canvas, spacing), LINE_WIDTH, first);
        layer.stroke_path(
            &drifting_pattern(params, canvas, spacing, state.time),
            LINE_WIDTH,
            second,
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/moire.rs"]
mod tests;
