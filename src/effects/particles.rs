//! Particle fountain rising from the bottom centre under gravity.

use kurbo::{BezPath, Point, Rect};
use rand::Rng;

use super::{PaintCx, Renderer, key};
use crate::assets::color::palette_cycle;
use crate::foundation::core::Canvas;
use crate::foundation::rng::FrameRng;
use crate::render::layer::Layer;
use crate::scene::model::{ParticleShape, ParticlesParams};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    /// Palette index picked at spawn.
    pub color_slot: usize,
    /// Remaining life in `[0, 1]`, used as alpha.
    pub life: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticlesState {
    pub particles: Vec<Particle>,
}

pub(crate) struct Particles;

fn spawn(params: &ParticlesParams, canvas: Canvas, rng: &mut FrameRng) -> Particle {
    let slots = params.colors.len().max(1);
    Particle {
        x: canvas.w() / 2.0 + (rng.random::<f64>() - 0.5) * params.spread * 2.0,
        y: canvas.h(),
        vx: (rng.random::<f64>() - 0.5) * params.speed,
        vy: -rng.random::<f64>() * params.speed * 2.0 - 1.0,
        size: rng.random::<f64>() * params.max_size + 1.0,
        color_slot: rng.random_range(0..slots),
        life: 1.0,
    }
}

fn star_path(center: Point, spikes: usize, outer: f64, inner: f64) -> BezPath {
    let step = std::f64::consts::PI / spikes as f64;
    let mut rot = std::f64::consts::FRAC_PI_2 * 3.0;
    let mut path = BezPath::new();
    path.move_to((center.x, center.y - outer));
    for _ in 0..spikes {
        path.line_to((center.x + rot.cos() * outer, center.y + rot.sin() * outer));
        rot += step;
        path.line_to((center.x + rot.cos() * inner, center.y + rot.sin() * inner));
        rot += step;
    }
    path.line_to((center.x, center.y - outer));
    path.close_path();
    path
}

impl Renderer for Particles {
    type Params = ParticlesParams;
    type State = ParticlesState;

    fn structural_key(params: &ParticlesParams, canvas: Canvas) -> u64 {
        key(canvas, |h| h.write_u32(params.particle_count))
    }

    fn reseed(params: &ParticlesParams, canvas: Canvas, rng: &mut FrameRng) -> ParticlesState {
        ParticlesState {
            particles: (0..params.particle_count)
                .map(|_| spawn(params, canvas, rng))
                .collect(),
        }
    }

    fn step(
        mut state: ParticlesState,
        params: &ParticlesParams,
        canvas: Canvas,
        dt: f64,
        rng: &mut FrameRng,
    ) -> ParticlesState {
        for p in &mut state.particles {
            p.x += p.vx * dt;
            p.y += p.vy * dt;
            p.vy += params.gravity * 0.1 * dt;
            p.life -= 0.005 * dt;
            if p.life <= 0.0 || p.y < 0.0 {
                *p = spawn(params, canvas, rng);
            }
        }
        state
    }

    fn paint(
        state: &mut ParticlesState,
        params: &ParticlesParams,
        layer: &mut Layer<'_>,
        _cx: &mut PaintCx<'_>,
    ) {
        layer.clear();
        for p in &state.particles {
            let Some(color) = palette_cycle(&params.colors, p.color_slot) else {
                return;
            };
            let color = color.fade(p.life.clamp(0.0, 1.0));
            let center = Point::new(p.x, p.y);
            match params.shape {
                ParticleShape::Circle => layer.fill_circle(center, p.size, color),
                ParticleShape::Square => layer.fill_rect(
                    Rect::new(p.x - p.size, p.y - p.size, p.x + p.size, p.y + p.size),
                    color,
                ),
                ParticleShape::Star => {
                    layer.fill_path(&star_path(center, 5, p.size * 2.0, p.size), color);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/particles.rs"]
mod tests;
