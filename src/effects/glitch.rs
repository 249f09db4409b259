//! Digital glitch overlay: scanlines, static, displaced color slices.

use kurbo::Rect;
use rand::Rng;

use super::{PaintCx, Renderer};
use crate::assets::color::Color;
use crate::foundation::core::Canvas;
use crate::foundation::rng::FrameRng;
use crate::render::layer::Layer;
use crate::scene::model::GlitchParams;

#[derive(Clone, Debug, PartialEq)]
pub struct GlitchState {
    pub time: f64,
}

pub(crate) struct Glitch;

impl Renderer for Glitch {
    type Params = GlitchParams;
    type State = GlitchState;

    fn reseed(_params: &GlitchParams, _canvas: Canvas, _rng: &mut FrameRng) -> GlitchState {
        GlitchState { time: 0.0 }
    }

    fn step(
        mut state: GlitchState,
        params: &GlitchParams,
        _canvas: Canvas,
        dt: f64,
        _rng: &mut FrameRng,
    ) -> GlitchState {
        state.time += params.speed * 0.05 * dt;
        state
    }

    // All glitch artifacts are re-rolled every frame, paused or not.
    fn paint(_state: &mut GlitchState, params: &GlitchParams, layer: &mut Layer<'_>, cx: &mut PaintCx<'_>) {
        layer.clear();
        let canvas = layer.canvas();
        let (w, h) = (canvas.w(), canvas.h());
        let intensity = params.intensity;
        let rng = &mut *cx.rng;

        if params.scanlines {
            let shade = Color::BLACK.with_alpha(0.1);
            let mut y = 0.0;
            while y < h {
                layer.fill_rect(Rect::new(0.0, y, w, y + 2.0), shade);
                y += 4.0;
            }
        }

        if params.noise > 0.0 {
            for y in 0..i64::from(canvas.height) {
                for x in 0..i64::from(canvas.width) {
                    if rng.random::<f64>() < params.noise * 0.1 {
                        let v = (rng.random::<f64>() * 255.0) as u8;
                        let a = (rng.random::<f64>() * 100.0) as u8;
                        layer.put_pixel(x, y, Color::rgba(v, v, v, a));
                    }
                }
            }
        }

        let slice_count = params.slice_count.min(canvas.height);
        if slice_count > 0 {
            let slice_h = h / f64::from(slice_count);
            for i in 0..slice_count {
                if rng.random::<f64>() >= intensity * 0.3 {
                    continue;
                }
                let y = f64::from(i) * slice_h;
                let offset_x = (rng.random::<f64>() - 0.5) * intensity * 100.0;
                if params.color_shift {
                    let x = offset_x - 5.0;
                    layer.fill_rect(
                        Rect::new(x, y, x + w, y + slice_h),
                        Color::rgb(255, 0, 0).with_alpha(intensity * 0.3),
                    );
                    let x = offset_x + 5.0;
                    layer.fill_rect(
                        Rect::new(x, y, x + w, y + slice_h),
                        Color::rgb(0, 255, 255).with_alpha(intensity * 0.3),
                    );
                }
                if rng.random::<f64>() < 0.3 {
                    let alpha = rng.random::<f64>() * intensity;
                    let bar_h = rng.random::<f64>() * slice_h;
                    layer.fill_rect(Rect::new(0.0, y, w, y + bar_h), Color::WHITE.with_alpha(alpha));
                }
            }
        }

        let lines = (5.0 * intensity).ceil().max(0.0) as usize;
        for _ in 0..lines {
            if rng.random::<f64>() >= 0.5 {
                continue;
            }
            let y = rng.random::<f64>() * h;
            let line_h = rng.random::<f64>() * 10.0;
            let offset_x = (rng.random::<f64>() - 0.5) * intensity * 50.0;
            let base = if !params.color_shift {
                Color::WHITE
            } else if rng.random::<f64>() > 0.5 {
                Color::rgb(255, 0, 255)
            } else {
                Color::rgb(0, 255, 255)
            };
            layer.fill_rect(
                Rect::new(offset_x, y, offset_x + w, y + line_h),
                base.with_alpha(intensity * 0.5),
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/glitch.rs"]
mod tests;
