//! Classic horizontal (or vertical) scroller.

use super::{PaintCx, Renderer};
use crate::foundation::core::Canvas;
use crate::foundation::rng::FrameRng;
use crate::render::font;
use crate::render::layer::{Layer, even_stops, gradient_at};
use crate::scene::model::{ScrollDirection, ScrollTextParams};

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollTextState {
    /// Left edge of the text.
    pub x: f64,
    /// Offset of the text's middle from its configured row (vertical scrolling only).
    pub y_offset: f64,
}

pub(crate) struct ScrollText;

impl Renderer for ScrollText {
    type Params = ScrollTextParams;
    type State = ScrollTextState;

    fn reseed(params: &ScrollTextParams, canvas: Canvas, _rng: &mut FrameRng) -> ScrollTextState {
        let x = match params.direction {
            ScrollDirection::Left => canvas.w(),
            ScrollDirection::Right => -font::text_width(&params.text, params.font_size),
            ScrollDirection::Up | ScrollDirection::Down => {
                (canvas.w() - font::text_width(&params.text, params.font_size)) / 2.0
            }
        };
        ScrollTextState { x, y_offset: 0.0 }
    }

    fn step(
        mut state: ScrollTextState,
        params: &ScrollTextParams,
        canvas: Canvas,
        dt: f64,
        _rng: &mut FrameRng,
    ) -> ScrollTextState {
        let text_width = font::text_width(&params.text, params.font_size);
        let base_y = canvas.h() * params.y_position / 100.0;
        let half = params.font_size / 2.0;
        let delta = params.speed * dt;
        match params.direction {
            ScrollDirection::Left => {
                state.x -= delta;
                if state.x < -text_width {
                    state.x = canvas.w();
                }
            }
            ScrollDirection::Right => {
                state.x += delta;
                if state.x > canvas.w() {
                    state.x = -text_width;
                }
            }
            ScrollDirection::Up => {
                state.y_offset -= delta;
                if base_y + state.y_offset < -half {
                    state.y_offset = canvas.h() + half - base_y;
                }
            }
            ScrollDirection::Down => {
                state.y_offset += delta;
                if base_y + state.y_offset > canvas.h() + half {
                    state.y_offset = -half - base_y;
                }
            }
        }
        state
    }

    fn paint(
        state: &mut ScrollTextState,
        params: &ScrollTextParams,
        layer: &mut Layer<'_>,
        _cx: &mut PaintCx<'_>,
    ) {
        layer.clear();
        let canvas = layer.canvas();
        let y = canvas.h() * params.y_position / 100.0 + state.y_offset;
        let path = font::text_path(&params.text, state.x, y, params.font_size);

        if params.use_gradient && params.gradient_colors.len() >= 2 {
            let width = font::text_width(&params.text, params.font_size).max(1.0);
            let stops = even_stops(&params.gradient_colors);
            let x0 = state.x;
            layer.fill_path_shaded(&path, |x, _| gradient_at(&stops, (x - x0) / width));
        } else {
            layer.fill_path(&path, params.color);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/scroll_text.rs"]
mod tests;
