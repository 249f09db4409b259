//! Worn videotape overlay: scanlines, static, chroma shift, tracking bands and a vignette.

use kurbo::{Point, Rect};
use rand::Rng;

use super::{PaintCx, Renderer, positive};
use crate::assets::color::Color;
use crate::foundation::core::Canvas;
use crate::foundation::rng::FrameRng;
use crate::render::layer::Layer;
use crate::scene::model::{BlendMode, VhsParams};

const FLICKER_CHANCE: f64 = 0.05;
const TRACKING_SPEED: f64 = 100.0;

#[derive(Clone, Debug, PartialEq)]
pub struct VhsState {
    pub time: f64,
}

pub(crate) struct Vhs;

/// Top of the primary tracking band.
pub(crate) fn tracking_y(time: f64, canvas: Canvas) -> f64 {
    if canvas.h() > 0.0 {
        (time * TRACKING_SPEED) % canvas.h()
    } else {
        0.0
    }
}

impl Renderer for Vhs {
    type Params = VhsParams;
    type State = VhsState;

    fn reseed(_params: &VhsParams, _canvas: Canvas, _rng: &mut FrameRng) -> VhsState {
        VhsState { time: 0.0 }
    }

    fn step(mut state: VhsState, _params: &VhsParams, _canvas: Canvas, dt: f64, _rng: &mut FrameRng) -> VhsState {
        state.time += 0.016 * dt;
        state
    }

    fn paint(state: &mut VhsState, params: &VhsParams, layer: &mut Layer<'_>, cx: &mut PaintCx<'_>) {
        layer.clear();
        let canvas = layer.canvas();
        let (w, h) = (canvas.w(), canvas.h());

        if positive(params.scanline_intensity) {
            let line = Color::BLACK.with_alpha(params.scanline_intensity * 0.3);
            for y in (0..canvas.height).step_by(2) {
                let y = f64::from(y);
                layer.fill_rect(Rect::new(0.0, y, w, y + 1.0), line);
            }
        }

        if positive(params.noise_intensity) {
            let chance = params.noise_intensity * 0.1;
            let alpha = (params.noise_intensity * 100.0).clamp(0.0, 255.0) as u8;
            for y in 0..canvas.height {
                for x in 0..canvas.width {
                    if cx.rng.random::<f64>() < chance {
                        let v = cx.rng.random_range(0..=255u8);
                        layer.put_pixel(i64::from(x), i64::from(y), Color::rgba(v, v, v, alpha));
                    }
                }
            }
        }

        if positive(params.rgb_shift) {
            let s = params.rgb_shift;
            let a = (s * 0.1).min(1.0);
            layer.fill_rect_blend(
                Rect::new(-s, 0.0, w - s, h),
                Color::rgb(255, 0, 0).with_alpha(a),
                BlendMode::Screen,
            );
            layer.fill_rect_blend(
                Rect::new(s, 0.0, w + s, h),
                Color::rgb(0, 0, 255).with_alpha(a),
                BlendMode::Screen,
            );
        }

        if params.tracking_lines && cx.playing {
            let y = tracking_y(state.time, canvas);
            let band = Color::WHITE.with_alpha(0.1);
            layer.fill_rect(Rect::new(0.0, y, w, y + 3.0), band);
            layer.fill_rect(Rect::new(0.0, y + 20.0, w, y + 22.0), band);
        }

        if params.flickering && cx.playing && cx.rng.random::<f64>() < FLICKER_CHANCE {
            let strength = cx.rng.random::<f64>() * 0.1;
            layer.fill_rect(Rect::new(0.0, 0.0, w, h), Color::WHITE.with_alpha(strength));
        }

        if positive(params.distortion) {
            let edge = Color::BLACK.with_alpha((params.distortion * 0.5).min(1.0));
            let stops = [(0.0, Color::rgba(0, 0, 0, 0)), (0.7, Color::rgba(0, 0, 0, 0)), (1.0, edge)];
            layer.fill_rect_radial(
                Rect::new(0.0, 0.0, w, h),
                Point::new(w / 2.0, h / 2.0),
                w.max(h) / 2.0,
                &stops,
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/vhs.rs"]
mod tests;
