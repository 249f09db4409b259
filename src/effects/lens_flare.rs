//! Camera lens flare: hot core, anamorphic streak, ghost reflections and rotating rays.

use std::f64::consts::TAU;

use kurbo::{Point, Rect};
use rand::Rng;

use super::{PaintCx, Renderer, positive};
use crate::assets::color::{Color, palette_cycle};
use crate::foundation::core::Canvas;
use crate::foundation::rng::FrameRng;
use crate::render::layer::Layer;
use crate::scene::model::LensFlareParams;

const CORE_FALLBACK: Color = Color::rgb(0xFF, 0xD7, 0x00);
const GHOST_FALLBACK: Color = Color::rgb(0x00, 0xFF, 0xFF);
const RAYS: u32 = 8;

#[derive(Clone, Debug, PartialEq)]
pub struct LensFlareState {
    pub time: f64,
}

pub(crate) struct LensFlare;

/// Light source position in pixels.
pub(crate) fn source(params: &LensFlareParams, canvas: Canvas) -> Point {
    Point::new(params.x / 100.0 * canvas.w(), params.y / 100.0 * canvas.h())
}

/// Position of ghost `i` along the axis through the centre and the source, as a fraction of
/// that axis. Ghosts spread from behind the centre to past the source.
pub(crate) fn ghost_t(i: u32, count: u32) -> f64 {
    f64::from(i + 1) / f64::from(count + 1) * 2.0 - 0.5
}

fn clear(c: Color) -> Color {
    c.with_alpha(0.0)
}

impl Renderer for LensFlare {
    type Params = LensFlareParams;
    type State = LensFlareState;

    fn reseed(_params: &LensFlareParams, _canvas: Canvas, _rng: &mut FrameRng) -> LensFlareState {
        LensFlareState { time: 0.0 }
    }

    fn step(
        mut state: LensFlareState,
        _params: &LensFlareParams,
        _canvas: Canvas,
        dt: f64,
        _rng: &mut FrameRng,
    ) -> LensFlareState {
        state.time += 0.016 * dt;
        state
    }

    fn paint(state: &mut LensFlareState, params: &LensFlareParams, layer: &mut Layer<'_>, cx: &mut PaintCx<'_>) {
        layer.clear();
        let canvas = layer.canvas();
        let intensity = params.intensity.clamp(0.0, 1.0);
        let size = params.size * (1.0 + (state.time * 2.0).sin() * 0.1);
        if !positive(size) {
            return;
        }
        let flare = source(params, canvas);
        let center = canvas.center();

        let core = params.colors.first().copied().unwrap_or(CORE_FALLBACK);
        layer.fill_radial(
            flare,
            size * 2.0,
            &[
                (0.0, Color::WHITE.with_alpha(intensity)),
                (0.2, core),
                (1.0, clear(core)),
            ],
        );

        if params.anamorphic {
            let white = |a: f64| Color::WHITE.with_alpha(a);
            layer.fill_rect_gradient(
                Rect::new(0.0, flare.y - size / 4.0, canvas.w(), flare.y + size / 4.0),
                Point::new(flare.x - canvas.w() / 2.0, flare.y),
                Point::new(flare.x + canvas.w() / 2.0, flare.y),
                &[
                    (0.0, white(0.0)),
                    (0.4, white(intensity * 0.3)),
                    (0.5, white(intensity * 0.5)),
                    (0.6, white(intensity * 0.3)),
                    (1.0, white(0.0)),
                ],
            );
        }

        let axis = flare - center;
        for i in 0..params.ghost_count {
            let t = ghost_t(i, params.ghost_count);
            let ghost = center + axis * t;
            let jitter = 0.3 + cx.rng.random::<f64>() * 0.4;
            let radius = size * jitter * (1.0 - (t - 0.5).abs());
            let tint = palette_cycle(&params.colors, i as usize).unwrap_or(GHOST_FALLBACK);
            layer.fill_radial(
                ghost,
                radius,
                &[
                    (0.0, tint.with_alpha(intensity * 0.3)),
                    (0.5, tint.with_alpha(intensity * 0.1)),
                    (1.0, clear(tint)),
                ],
            );
        }

        let ray = Color::WHITE.with_alpha(intensity * 0.5);
        for i in 0..RAYS {
            let angle = f64::from(i) / f64::from(RAYS) * TAU + state.time * 0.1;
            let tip = flare + kurbo::Vec2::from_angle(angle) * size * 1.5;
            layer.stroke_line(flare, tip, 1.0, ray);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/lens_flare.rs"]
mod tests;
