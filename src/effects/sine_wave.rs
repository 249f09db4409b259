//! Text whose characters ride a travelling sine wave.

use kurbo::Point;

use super::{PaintCx, Renderer};
use crate::assets::color::palette_cycle;
use crate::foundation::core::Canvas;
use crate::foundation::rng::FrameRng;
use crate::render::font;
use crate::render::layer::Layer;
use crate::scene::model::SineWaveParams;

#[derive(Clone, Debug, PartialEq)]
pub struct SineWaveState {
    pub phase: f64,
}

pub(crate) struct SineWave;

impl Renderer for SineWave {
    type Params = SineWaveParams;
    type State = SineWaveState;

    fn reseed(_params: &SineWaveParams, _canvas: Canvas, _rng: &mut FrameRng) -> SineWaveState {
        SineWaveState { phase: 0.0 }
    }

    fn step(
        mut state: SineWaveState,
        params: &SineWaveParams,
        _canvas: Canvas,
        dt: f64,
        _rng: &mut FrameRng,
    ) -> SineWaveState {
        state.phase += params.speed * 0.05 * dt;
        state
    }

    fn paint(
        state: &mut SineWaveState,
        params: &SineWaveParams,
        layer: &mut Layer<'_>,
        _cx: &mut PaintCx<'_>,
    ) {
        layer.clear();
        let canvas = layer.canvas();
        let base_y = canvas.h() * params.y_position / 100.0;
        let advance = font::char_advance(params.font_size);
        let glyph_w = font::unit(params.font_size) * font::GLYPH_COLS as f64;
        let mut x = canvas.w() / 2.0 - font::text_width(&params.text, params.font_size) / 2.0;

        for (i, c) in params.text.chars().enumerate() {
            let i = i as f64;
            let y = base_y + (i * params.frequency + state.phase).sin() * params.amplitude;
            let slot = (i + state.phase * 5.0).floor().abs() as usize;
            if let Some(color) = palette_cycle(&params.colors, slot) {
                let path = font::char_path(c, Point::new(x + glyph_w / 2.0, y), params.font_size);
                layer.fill_path(&path, color);
            }
            x += advance;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/sine_wave.rs"]
mod tests;
