//! Effect renderers.
//!
//! Every kind keeps its serializable parameters (in [`crate::scene::model`]) apart from an
//! ephemeral simulation state defined here. Renderers are driven through [`Renderer`]: `reseed`
//! builds fresh state, `step` advances it by `dt` display frames, and `paint` draws it.

use std::fmt::Debug;

use crate::assets::raster::ImageCache;
use crate::foundation::core::Canvas;
use crate::foundation::math::Fnv1a64;
use crate::foundation::rng::FrameRng;
use crate::render::field::{Field, FieldBackend, ShaderContext, paint_field_cpu};
use crate::render::layer::Layer;

pub mod bobs;
pub mod checkerboard;
pub mod copper_bars;
pub mod dispatch;
pub mod dot_matrix;
pub mod fire;
pub mod glitch;
pub mod lens_flare;
pub mod logo;
pub mod matrix;
pub mod metaballs;
pub mod moire;
pub mod particles;
pub mod plasma;
pub mod raster_bars;
pub mod rotozoom;
pub mod scroll_text;
pub mod sine_wave;
pub mod sprite;
pub mod starfield;
pub mod tunnel;
pub mod twister;
pub mod vector_balls;
pub mod vhs;
pub mod wireframe;

pub use dispatch::SimState;

/// Per-frame collaborators available while painting.
pub(crate) struct PaintCx<'a> {
    pub(crate) rng: &'a mut FrameRng,
    pub(crate) images: &'a mut ImageCache,
    pub(crate) fields: FieldPainter<'a>,
    /// Whether the playback clock is running; a few effects only animate overlays while it is.
    pub(crate) playing: bool,
}

/// Routes per-pixel fields to the configured backend.
#[derive(Clone, Copy)]
pub(crate) struct FieldPainter<'a> {
    pub(crate) backend: FieldBackend,
    pub(crate) shader: Option<&'a ShaderContext>,
}

impl FieldPainter<'_> {
    pub(crate) fn cpu() -> Self {
        Self {
            backend: FieldBackend::Cpu,
            shader: None,
        }
    }

    /// Replace every pixel of `layer` with `field`.
    ///
    /// A shader failure leaves the layer blank; there is no CPU fallback.
    pub(crate) fn paint(&self, layer: &mut Layer<'_>, field: &dyn Field) {
        let canvas = layer.canvas();
        match self.backend {
            FieldBackend::Cpu => paint_field_cpu(layer.pixels_mut(), canvas, field),
            FieldBackend::Shader => {
                let result = match self.shader {
                    Some(shader) => shader.run(layer.pixels_mut(), canvas, field),
                    None => Err(crate::foundation::error::CracktroError::render(
                        "no shader context available",
                    )),
                };
                if let Err(err) = result {
                    layer.clear();
                    tracing::warn!(error = %err, "shader field unavailable; layer left blank");
                }
            }
        }
    }
}

/// Simulation contract implemented once per effect kind.
pub(crate) trait Renderer {
    type Params;
    type State: Clone + PartialEq + Debug;

    /// Hash of the parameters whose change requires a reseed.
    fn structural_key(params: &Self::Params, canvas: Canvas) -> u64 {
        let _ = params;
        key(canvas, |_| {})
    }

    fn reseed(params: &Self::Params, canvas: Canvas, rng: &mut FrameRng) -> Self::State;

    /// Advance by `dt` display frames. Only called while playing.
    fn step(
        state: Self::State,
        params: &Self::Params,
        canvas: Canvas,
        dt: f64,
        rng: &mut FrameRng,
    ) -> Self::State;

    fn paint(state: &mut Self::State, params: &Self::Params, layer: &mut Layer<'_>, cx: &mut PaintCx<'_>);
}

/// FNV-1a over the canvas plus whatever `f` writes.
pub(crate) fn key(canvas: Canvas, f: impl FnOnce(&mut Fnv1a64)) -> u64 {
    let mut h = Fnv1a64::new_default();
    h.write_u32(canvas.width);
    h.write_u32(canvas.height);
    f(&mut h);
    h.finish()
}

/// Finite and strictly positive.
pub(crate) fn positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

#[cfg(test)]
#[path = "../../tests/unit/effects/support.rs"]
pub(crate) mod testing;
