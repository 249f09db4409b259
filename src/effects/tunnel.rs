//! Hexagonal rings rushing outward from the centre.

use std::f64::consts::TAU;

use kurbo::{Affine, BezPath, Point};

use super::{PaintCx, Renderer};
use crate::assets::color::palette_cycle;
use crate::foundation::core::Canvas;
use crate::foundation::math::fmod;
use crate::foundation::rng::FrameRng;
use crate::render::layer::Layer;
use crate::scene::model::TunnelParams;

const RING_SIDES: usize = 6;

#[derive(Clone, Debug, PartialEq)]
pub struct TunnelState {
    pub time: f64,
}

pub(crate) struct Tunnel;

fn ring(center: Point, radius: f64) -> BezPath {
    let mut path = BezPath::new();
    for j in 0..=RING_SIDES {
        let angle = j as f64 / RING_SIDES as f64 * TAU;
        let p = (center.x + angle.cos() * radius, center.y + angle.sin() * radius);
        if j == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    path.close_path();
    path
}

impl Renderer for Tunnel {
    type Params = TunnelParams;
    type State = TunnelState;

    fn reseed(_params: &TunnelParams, _canvas: Canvas, _rng: &mut FrameRng) -> TunnelState {
        TunnelState { time: 0.0 }
    }

    fn step(
        mut state: TunnelState,
        _params: &TunnelParams,
        _canvas: Canvas,
        dt: f64,
        _rng: &mut FrameRng,
    ) -> TunnelState {
        state.time += 0.5 * dt;
        state
    }

    fn paint(state: &mut TunnelState, params: &TunnelParams, layer: &mut Layer<'_>, _cx: &mut PaintCx<'_>) {
        layer.clear();
        let canvas = layer.canvas();
        let center = canvas.center();
        let max_radius = canvas.w().max(canvas.h());
        let rings = f64::from(params.ring_count);
        layer.set_transform(Affine::rotate_about(state.time * params.rotation * 0.01, center));

        for i in (1..=params.ring_count as usize).rev() {
            let Some(color) = palette_cycle(&params.colors, i) else {
                break;
            };
            let progress = fmod(i as f64 + state.time * params.speed * 0.1, rings);
            let radius = progress / rings * max_radius;
            let line_width = ((1.0 - progress / rings) * 10.0).max(1.0);
            layer.stroke_path(&ring(center, radius), line_width, color);
        }
        layer.reset_transform();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/tunnel.rs"]
mod tests;
