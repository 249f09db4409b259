//! LED-style scroller drawn one round dot per lit font cell.

use kurbo::{BezPath, Circle, Point, Shape as _};

use super::{PaintCx, Renderer, positive};
use crate::foundation::core::Canvas;
use crate::foundation::rng::FrameRng;
use crate::render::font::{self, GLYPH_COLS, GLYPH_ROWS};
use crate::render::layer::Layer;
use crate::scene::model::{DotMatrixParams, ScrollDirection};

/// Glyph columns plus the blank columns between characters.
const CHAR_CELLS: f64 = 7.0;
/// Extra travel for vertical scrolling before wrapping.
const VERTICAL_MARGIN: f64 = 100.0;

#[derive(Clone, Debug, PartialEq)]
pub struct DotMatrixState {
    /// Distance travelled so far, in pixels.
    pub offset: f64,
}

pub(crate) struct DotMatrix;

/// Width of `text` in pixels at the given cell pitch.
pub(crate) fn text_width(text: &str, cell: f64) -> f64 {
    text.chars().count() as f64 * CHAR_CELLS * cell
}

/// Top-left of the first character for the current scroll offset.
pub(crate) fn origin(params: &DotMatrixParams, canvas: Canvas, offset: f64) -> Point {
    let cell = params.dot_size + params.gap;
    let text = params.text.to_uppercase();
    let total = text_width(&text, cell);
    let span = total + canvas.w();
    let vspan = canvas.h() + VERTICAL_MARGIN;
    let top = (canvas.h() - GLYPH_ROWS as f64 * cell) / 2.0;
    match params.scroll_direction {
        ScrollDirection::Left if positive(span) => Point::new(canvas.w() - offset % span, top),
        ScrollDirection::Right if positive(span) => {
            Point::new(canvas.w() + offset % span - total, top)
        }
        ScrollDirection::Up => Point::new((canvas.w() - total) / 2.0, top - offset % vspan),
        ScrollDirection::Down => Point::new(
            (canvas.w() - total) / 2.0,
            top + offset % vspan - VERTICAL_MARGIN,
        ),
        _ => Point::new(canvas.w(), top),
    }
}

impl Renderer for DotMatrix {
    type Params = DotMatrixParams;
    type State = DotMatrixState;

    fn reseed(_params: &DotMatrixParams, _canvas: Canvas, _rng: &mut FrameRng) -> DotMatrixState {
        DotMatrixState { offset: 0.0 }
    }

    fn step(
        mut state: DotMatrixState,
        params: &DotMatrixParams,
        _canvas: Canvas,
        dt: f64,
        _rng: &mut FrameRng,
    ) -> DotMatrixState {
        state.offset += params.speed * 2.0 * dt;
        state
    }

    fn paint(
        state: &mut DotMatrixState,
        params: &DotMatrixParams,
        layer: &mut Layer<'_>,
        _cx: &mut PaintCx<'_>,
    ) {
        layer.fill_all(params.background_color);
        let canvas = layer.canvas();
        let dot = params.dot_size;
        if !positive(dot) {
            return;
        }
        let cell = dot + params.gap;
        let start = origin(params, canvas, state.offset);

        let mut dots = BezPath::new();
        let mut x0 = start.x;
        for c in params.text.to_uppercase().chars() {
            let g = font::glyph_or_blank(c);
            for col in 0..GLYPH_COLS {
                let x = x0 + col as f64 * cell;
                if x <= -dot || x >= canvas.w() + dot {
                    continue;
                }
                for row in 0..GLYPH_ROWS {
                    if font::is_lit(&g, col, row) {
                        let y = start.y + row as f64 * cell;
                        let circle = Circle::new((x + dot / 2.0, y + dot / 2.0), dot / 2.0);
                        dots.extend(circle.path_elements(0.1));
                    }
                }
            }
            x0 += CHAR_CELLS * cell;
        }

        layer.glow_path(&dots, dot / 2.0, params.color);
        layer.fill_path(&dots, params.color);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/dot_matrix.rs"]
mod tests;
