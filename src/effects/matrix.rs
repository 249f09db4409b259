//! Falling glyph columns.

use kurbo::Point;
use rand::Rng;

use super::{PaintCx, Renderer, key, positive};
use crate::assets::color::Color;
use crate::foundation::core::Canvas;
use crate::foundation::rng::FrameRng;
use crate::render::font;
use crate::render::layer::Layer;
use crate::scene::model::MatrixParams;

/// Glyphs per column trail.
pub const TRAIL_LEN: usize = 30;

#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    pub x: f64,
    /// Baseline of the head glyph.
    pub y: f64,
    pub speed: f64,
    pub chars: Vec<char>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MatrixState {
    pub columns: Vec<Column>,
}

pub(crate) struct Matrix;

fn pick(characters: &[char], rng: &mut FrameRng) -> char {
    if characters.is_empty() {
        return ' ';
    }
    characters[rng.random_range(0..characters.len())]
}

impl Renderer for Matrix {
    type Params = MatrixParams;
    type State = MatrixState;

    fn structural_key(params: &MatrixParams, canvas: Canvas) -> u64 {
        key(canvas, |h| {
            h.write_f64(params.font_size);
            h.write_f64(params.speed);
            h.write_str(&params.characters);
        })
    }

    fn reseed(params: &MatrixParams, canvas: Canvas, rng: &mut FrameRng) -> MatrixState {
        if !positive(params.font_size) {
            return MatrixState { columns: Vec::new() };
        }
        let characters: Vec<char> = params.characters.chars().collect();
        let count = ((canvas.w() / params.font_size).floor() as usize).min(canvas.width as usize);
        let columns = (0..count)
            .map(|i| Column {
                x: i as f64 * params.font_size,
                y: rng.random::<f64>() * canvas.h(),
                speed: rng.random::<f64>() * params.speed + 1.0,
                chars: (0..TRAIL_LEN).map(|_| pick(&characters, rng)).collect(),
            })
            .collect();
        MatrixState { columns }
    }

    fn step(
        mut state: MatrixState,
        params: &MatrixParams,
        canvas: Canvas,
        dt: f64,
        rng: &mut FrameRng,
    ) -> MatrixState {
        for column in &mut state.columns {
            column.y += column.speed * params.speed * dt;
            if column.y > canvas.h() + column.chars.len() as f64 * params.font_size {
                column.y = 0.0;
                column.speed = rng.random::<f64>() * params.speed + 1.0;
            }
        }
        state
    }

    fn paint(state: &mut MatrixState, params: &MatrixParams, layer: &mut Layer<'_>, cx: &mut PaintCx<'_>) {
        layer.fill_all(Color::BLACK.with_alpha(0.05));
        let canvas = layer.canvas();
        let characters: Vec<char> = params.characters.chars().collect();
        let size = params.font_size;
        let glyph_w = font::unit(size) * font::GLYPH_COLS as f64;

        for column in &mut state.columns {
            let count = column.chars.len();
            for i in 0..count {
                let y = column.y - i as f64 * size;
                if y < 0.0 || y > canvas.h() {
                    continue;
                }
                let color = if i == 0 {
                    Color::WHITE
                } else {
                    params.color.fade((1.0 - i as f64 / count as f64).max(0.1))
                };
                if cx.rng.random::<f64>() > params.density {
                    column.chars[i] = pick(&characters, cx.rng);
                }
                let center = Point::new(column.x + glyph_w / 2.0, y - size / 2.0);
                layer.fill_path(&font::char_path(column.chars[i], center, size), color);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/matrix.rs"]
mod tests;
