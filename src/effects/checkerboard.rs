//! Perspective checkerboard floor scrolling toward the viewer.

use super::{PaintCx, Renderer};
use crate::assets::color::Color;
use crate::foundation::core::Canvas;
use crate::foundation::rng::FrameRng;
use crate::render::field::Field;
use crate::render::layer::Layer;
use crate::scene::model::CheckerboardParams;

/// Height of the dark fade band below the horizon.
const HORIZON_FADE: f64 = 50.0;

#[derive(Clone, Debug, PartialEq)]
pub struct CheckerboardState {
    /// Distance travelled along the floor.
    pub offset: f64,
}

pub(crate) struct Checkerboard;

pub(crate) struct FloorField {
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) horizon: f64,
    pub(crate) perspective: f64,
    pub(crate) tile_size: f64,
    pub(crate) offset: f64,
    pub(crate) color1: Color,
    pub(crate) color2: Color,
}

impl Field for FloorField {
    fn sample(&self, x: u32, y: u32) -> Color {
        let sy = f64::from(y) + 0.5;
        if sy < self.horizon {
            return Color::rgba(0, 0, 0, 0);
        }
        let floor_height = self.height - self.horizon;
        let depth = (sy - self.horizon) / floor_height;
        let base = if depth > 0.0 && self.tile_size > 0.0 && self.perspective != 0.0 {
            let z = self.perspective / depth + self.offset;
            let world_x = (f64::from(x) - self.width / 2.0) * z / self.perspective;
            let tile_x = (world_x / self.tile_size).floor();
            let tile_z = (z / self.tile_size).floor();
            if (tile_x + tile_z).rem_euclid(2.0) == 0.0 {
                self.color1
            } else {
                self.color2
            }
        } else {
            self.color2
        };

        let band = (sy - self.horizon) / HORIZON_FADE;
        if band < 1.0 {
            let shade = 0.8 * (1.0 - band);
            base.lerp(Color { a: base.a, ..Color::BLACK }, shade)
        } else {
            base
        }
    }
}

impl Renderer for Checkerboard {
    type Params = CheckerboardParams;
    type State = CheckerboardState;

    fn reseed(_params: &CheckerboardParams, _canvas: Canvas, _rng: &mut FrameRng) -> CheckerboardState {
        CheckerboardState { offset: 0.0 }
    }

    fn step(
        mut state: CheckerboardState,
        params: &CheckerboardParams,
        _canvas: Canvas,
        dt: f64,
        _rng: &mut FrameRng,
    ) -> CheckerboardState {
        state.offset += params.scroll_speed * dt;
        state
    }

    fn paint(
        state: &mut CheckerboardState,
        params: &CheckerboardParams,
        layer: &mut Layer<'_>,
        cx: &mut PaintCx<'_>,
    ) {
        let canvas = layer.canvas();
        let field = FloorField {
            width: canvas.w(),
            height: canvas.h(),
            horizon: canvas.h() * params.y_offset / 100.0,
            perspective: params.perspective,
            tile_size: params.tile_size,
            offset: state.offset,
            color1: params.color1,
            color2: params.color2,
        };
        cx.fields.paint(layer, &field);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/checkerboard.rs"]
mod tests;
