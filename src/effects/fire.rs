//! Classic fire: a heat buffer seeded along the bottom row that rises and decays.

use rand::Rng;

use super::{PaintCx, Renderer, key};
use crate::assets::color::Color;
use crate::foundation::core::Canvas;
use crate::foundation::rng::FrameRng;
use crate::render::layer::Layer;
use crate::scene::model::FireParams;

/// Heat below this stays transparent.
const VISIBLE_HEAT: f64 = 0.05;

#[derive(Clone, Debug, PartialEq)]
pub struct FireState {
    pub width: usize,
    pub rows: usize,
    /// Row-major heat, row 0 at the top of the fire area.
    pub heat: Vec<f64>,
    /// Fractional frames not yet simulated.
    pub carry: f64,
}

impl FireState {
    pub fn heat_at(&self, x: usize, y: usize) -> Option<f64> {
        if x >= self.width || y >= self.rows {
            return None;
        }
        self.heat.get(y * self.width + x).copied()
    }
}

pub(crate) struct Fire;

fn tick(state: &mut FireState, params: &FireParams, rng: &mut FrameRng) {
    let (w, rows) = (state.width, state.rows);
    if w == 0 || rows == 0 {
        return;
    }
    let bottom = (rows - 1) * w;
    for x in 0..w {
        state.heat[bottom + x] = rng.random::<f64>() * params.intensity;
    }
    for y in 0..rows - 1 {
        for x in 0..w {
            let decay = rng.random::<f64>() * params.spread * 0.1;
            let drift = rng.random_range(-1i64..=1);
            let src_x = (x as i64 + drift).clamp(0, w as i64 - 1) as usize;
            let below = state.heat[(y + 1) * w + src_x];
            state.heat[y * w + x] = (below - decay).max(0.0);
        }
    }
}

pub(crate) fn heat_color(colors: &[Color], heat: f64) -> Color {
    let n = colors.len();
    let heat = heat.min(1.0);
    if n == 0 || heat <= VISIBLE_HEAT {
        return Color::rgba(0, 0, 0, 0);
    }
    let pos = heat * (n - 1) as f64;
    let lower = (pos.floor() as usize).min(n - 1);
    let upper = (lower + 1).min(n - 1);
    let c = colors[lower].lerp(colors[upper], pos.rem_euclid(1.0));
    Color { a: 255, ..c }
}

impl Renderer for Fire {
    type Params = FireParams;
    type State = FireState;

    fn structural_key(params: &FireParams, canvas: Canvas) -> u64 {
        key(canvas, |h| h.write_u32(params.height))
    }

    fn reseed(params: &FireParams, canvas: Canvas, _rng: &mut FrameRng) -> FireState {
        let width = canvas.width as usize;
        let rows = params.height.min(canvas.height) as usize;
        FireState {
            width,
            rows,
            heat: vec![0.0; width * rows],
            carry: 0.0,
        }
    }

    fn step(
        mut state: FireState,
        params: &FireParams,
        _canvas: Canvas,
        dt: f64,
        rng: &mut FrameRng,
    ) -> FireState {
        state.carry += dt.max(0.0);
        while state.carry >= 1.0 {
            tick(&mut state, params, rng);
            state.carry -= 1.0;
        }
        state
    }

    fn paint(state: &mut FireState, params: &FireParams, layer: &mut Layer<'_>, _cx: &mut PaintCx<'_>) {
        layer.clear();
        let canvas = layer.canvas();
        let top = i64::from(canvas.height) - state.rows as i64;
        for y in 0..state.rows {
            for x in 0..state.width {
                let color = heat_color(&params.colors, state.heat[y * state.width + x]);
                if color.a > 0 {
                    layer.put_pixel(x as i64, top + y as i64, color);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/fire.rs"]
mod tests;
