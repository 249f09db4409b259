//! A single image (or a placeholder card) animated around a fixed anchor.

use kurbo::{Affine, Point, Rect, Shape as _};

use super::{PaintCx, Renderer, positive};
use crate::assets::color::Color;
use crate::foundation::core::Canvas;
use crate::foundation::rng::FrameRng;
use crate::render::font;
use crate::render::layer::Layer;
use crate::scene::model::{SpriteAnimation, SpriteParams};

const PLACEHOLDER_FILL: Color = Color::rgb(0xFF, 0x00, 0xFF);
const PLACEHOLDER_LABEL: &str = "SPRITE";
const LABEL_SIZE: f64 = 12.0;

#[derive(Clone, Debug, PartialEq)]
pub struct SpriteState {
    pub time: f64,
}

/// Where and how the sprite sits this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub center: Point,
    pub rotation: f64,
    pub scale: f64,
}

impl Placement {
    pub fn at(params: &SpriteParams, canvas: Canvas, time: f64) -> Self {
        let mut center = Point::new(params.x / 100.0 * canvas.w(), params.y / 100.0 * canvas.h());
        let mut rotation = 0.0;
        let mut scale = 1.0;
        let phase = time * params.animation_speed;
        let amp = params.animation_amplitude;
        match params.animation_type {
            SpriteAnimation::None => {}
            SpriteAnimation::Bounce => center.y += phase.sin().abs() * amp,
            SpriteAnimation::Float => {
                center.y += phase.sin() * amp;
                center.x += (phase * 0.5).cos() * amp * 0.5;
            }
            SpriteAnimation::Rotate => rotation = phase,
            SpriteAnimation::Pulse => scale = 1.0 + phase.sin() * 0.2,
        }
        Self {
            center,
            rotation,
            scale,
        }
    }

    fn transform(self) -> Affine {
        Affine::translate(self.center.to_vec2())
            * Affine::rotate(self.rotation)
            * Affine::scale(self.scale)
    }
}

pub(crate) struct Sprite;

impl Renderer for Sprite {
    type Params = SpriteParams;
    type State = SpriteState;

    fn reseed(_params: &SpriteParams, _canvas: Canvas, _rng: &mut FrameRng) -> SpriteState {
        SpriteState { time: 0.0 }
    }

    fn step(
        mut state: SpriteState,
        _params: &SpriteParams,
        _canvas: Canvas,
        dt: f64,
        _rng: &mut FrameRng,
    ) -> SpriteState {
        state.time += 0.05 * dt;
        state
    }

    fn paint(state: &mut SpriteState, params: &SpriteParams, layer: &mut Layer<'_>, cx: &mut PaintCx<'_>) {
        layer.clear();
        if !positive(params.width) || !positive(params.height) {
            return;
        }
        let placement = Placement::at(params, layer.canvas(), state.time);
        let (hw, hh) = (params.width / 2.0, params.height / 2.0);
        let card = Rect::new(-hw, -hh, hw, hh);

        layer.set_transform(placement.transform());
        match cx.images.get(&params.image_url) {
            Some(image) => layer.draw_image(&image, card, 1.0),
            None => {
                layer.fill_rect(card, PLACEHOLDER_FILL);
                layer.stroke_path(&card.to_path(0.1), 2.0, Color::WHITE);
                layer.stroke_line((-hw, -hh).into(), (hw, hh).into(), 2.0, Color::WHITE);
                layer.stroke_line((hw, -hh).into(), (-hw, hh).into(), 2.0, Color::WHITE);
                let label = font::text_width(PLACEHOLDER_LABEL, LABEL_SIZE);
                layer.fill_text(PLACEHOLDER_LABEL, -label / 2.0, 0.0, LABEL_SIZE, Color::WHITE);
            }
        }
        layer.reset_transform();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/sprite.rs"]
mod tests;
