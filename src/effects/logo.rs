//! Bouncing, pulsing title with an optional glow and a drifting gradient.

use kurbo::Affine;

use super::{PaintCx, Renderer};
use crate::assets::color::Color;
use crate::foundation::core::Canvas;
use crate::foundation::rng::FrameRng;
use crate::render::font;
use crate::render::layer::{Layer, gradient_at};
use crate::scene::model::LogoParams;

const GLOW_RADIUS: f64 = 30.0;

#[derive(Clone, Debug, PartialEq)]
pub struct LogoState {
    pub time: f64,
}

pub(crate) struct Logo;

/// Gradient stops whose offsets drift with `time`, sorted by offset.
pub(crate) fn drifting_stops(colors: &[Color], time: f64) -> Vec<(f64, Color)> {
    let n = colors.len();
    if n < 2 {
        return Vec::new();
    }
    let mut stops: Vec<(f64, Color)> = colors
        .iter()
        .enumerate()
        .map(|(i, &c)| ((i as f64 / (n - 1) as f64 + time * 0.1).rem_euclid(1.0), c))
        .collect();
    stops.sort_by(|a, b| a.0.total_cmp(&b.0));
    stops
}

impl Renderer for Logo {
    type Params = LogoParams;
    type State = LogoState;

    fn reseed(_params: &LogoParams, _canvas: Canvas, _rng: &mut FrameRng) -> LogoState {
        LogoState { time: 0.0 }
    }

    fn step(
        mut state: LogoState,
        _params: &LogoParams,
        _canvas: Canvas,
        dt: f64,
        _rng: &mut FrameRng,
    ) -> LogoState {
        state.time += 0.05 * dt;
        state
    }

    fn paint(state: &mut LogoState, params: &LogoParams, layer: &mut Layer<'_>, _cx: &mut PaintCx<'_>) {
        layer.clear();
        let canvas = layer.canvas();
        let t = state.time;

        let bounce = (t * params.bounce_speed).sin() * params.bounce_amplitude;
        let mut transform = Affine::translate((canvas.w() / 2.0, canvas.h() / 2.0 + bounce));
        if params.scale_effect {
            transform *= Affine::scale(1.0 + (t * 2.0).sin() * 0.1);
        }
        if params.rotation_enabled {
            transform *= Affine::rotate(t * params.rotation_speed * 0.1);
        }

        let width = font::text_width(&params.text, params.font_size);
        let path = font::text_path(&params.text, -width / 2.0, 0.0, params.font_size);
        let device_path = transform * path;

        if params.glow_enabled {
            layer.glow_path(&device_path, GLOW_RADIUS / 3.0, params.glow_color);
        }

        if params.colors.len() > 1 {
            let stops = drifting_stops(&params.colors, t);
            let inverse = transform.inverse();
            let span = width.max(1.0);
            layer.fill_path_shaded(&device_path, |x, y| {
                let local = inverse * kurbo::Point::new(x, y);
                gradient_at(&stops, (local.x + width / 2.0) / span)
            });
        } else {
            let color = params.colors.first().copied().unwrap_or(Color::WHITE);
            layer.fill_path(&device_path, color);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/logo.rs"]
mod tests;
