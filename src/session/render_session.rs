//! Frame loop over a [`Project`].
//!
//! A [`RenderSession`] keeps one instance per effect id: the simulation state, the structural key
//! it was seeded from, and the layer surface it paints into. Each call to
//! [`RenderSession::render_frame`] reconciles those instances with the project, advances them if
//! the shared [`PlaybackClock`] is running, paints every enabled effect and composites the stack.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::PathBuf;

use crate::assets::raster::ImageCache;
use crate::effects::{FieldPainter, PaintCx, SimState, dispatch};
use crate::foundation::core::Canvas;
use crate::foundation::error::{CracktroError, CracktroResult};
use crate::foundation::rng::{FrameRng, frame_rng};
use crate::render::compositor::{CompositeLayer, Overlays, compose};
use crate::render::field::{FieldBackend, ShaderContext};
use crate::render::frame::FrameRGBA;
use crate::render::layer::{Layer, Rasterizer};
use crate::render::surface::Surface;
use crate::scene::model::Effect;
use crate::scene::project::Project;
use crate::session::playback::PlaybackClock;

#[derive(Clone, Debug)]
pub struct RenderSessionOpts {
    /// Display frames advanced per rendered frame (1.0 = one 60 Hz frame).
    pub dt: f64,
    /// Seed for the shared random source. `None` draws from the OS.
    pub seed: Option<u64>,
    pub field_backend: FieldBackend,
    /// Worker threads for the shader field path. `None` uses rayon's default.
    pub threads: Option<usize>,
    pub overlays: Overlays,
    /// Directory relative sprite URLs resolve against. Defaults to the working directory.
    pub asset_root: Option<PathBuf>,
}

impl Default for RenderSessionOpts {
    fn default() -> Self {
        Self {
            dt: 1.0,
            seed: None,
            field_backend: FieldBackend::Cpu,
            threads: None,
            overlays: Overlays::default(),
            asset_root: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub frames_rendered: u64,
    pub layers_painted: u64,
    pub reseeds: u64,
    pub instances_dropped: u64,
}

struct Instance {
    /// Taken out while the frame advances it.
    state: Option<SimState>,
    key: u64,
    surface: Surface,
}

pub struct RenderSession {
    opts: RenderSessionOpts,
    clock: PlaybackClock,
    instances: HashMap<String, Instance>,
    raster: Rasterizer,
    images: ImageCache,
    rng: FrameRng,
    shader: Option<ShaderContext>,
    stats: RenderStats,
}

impl RenderSession {
    pub fn new(opts: RenderSessionOpts) -> CracktroResult<Self> {
        Self::with_clock(opts, PlaybackClock::default())
    }

    /// Session driven by an existing clock, typically one shared with an editor.
    pub fn with_clock(opts: RenderSessionOpts, clock: PlaybackClock) -> CracktroResult<Self> {
        if !opts.dt.is_finite() || opts.dt < 0.0 {
            return Err(CracktroError::validation(format!(
                "session dt must be finite and >= 0, got {}",
                opts.dt
            )));
        }
        let shader = match opts.field_backend {
            FieldBackend::Cpu => None,
            FieldBackend::Shader => match ShaderContext::new(opts.threads) {
                Ok(ctx) => Some(ctx),
                Err(err) => {
                    tracing::warn!(error = %err, "shader context unavailable; field layers stay blank");
                    None
                }
            },
        };
        Ok(Self {
            rng: frame_rng(opts.seed),
            images: ImageCache::new(opts.asset_root.clone()),
            clock,
            instances: HashMap::new(),
            raster: Rasterizer::new(),
            shader,
            stats: RenderStats::default(),
            opts,
        })
    }

    pub fn clock(&self) -> &PlaybackClock {
        &self.clock
    }

    pub fn opts(&self) -> &RenderSessionOpts {
        &self.opts
    }

    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    pub fn set_overlays(&mut self, overlays: Overlays) {
        self.opts.overlays = overlays;
    }

    /// Simulation state of the instance for `effect_id`, if one is live.
    pub fn state(&self, effect_id: &str) -> Option<&SimState> {
        self.instances.get(effect_id).and_then(|i| i.state.as_ref())
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// Drop every instance; the next frame reseeds all effects.
    pub fn reset(&mut self) {
        self.stats.instances_dropped += self.instances.len() as u64;
        self.instances.clear();
    }

    /// Advance and paint one frame of `project`.
    #[tracing::instrument(skip_all, fields(project = %project.id, effects = project.effects.len()))]
    pub fn render_frame(&mut self, project: &Project) -> CracktroResult<FrameRGBA> {
        let canvas = project.canvas()?;
        self.drop_removed(project);

        let playing = self.clock.is_playing();
        let order = project.paint_order();
        for effect in order.iter().filter(|e| e.enabled) {
            self.paint_effect(effect, canvas, playing)?;
        }

        let layers: Vec<CompositeLayer<'_>> = order
            .iter()
            .filter(|e| e.enabled)
            .filter_map(|e| {
                self.instances.get(&e.id).map(|inst| CompositeLayer {
                    surface: &inst.surface,
                    opacity: e.opacity,
                    blend_mode: e.blend_mode,
                })
            })
            .collect();
        let frame = compose(canvas, project.background_color, &layers, self.opts.overlays)?;
        self.stats.frames_rendered += 1;
        Ok(frame)
    }

    /// Render `count` consecutive frames and keep only the last one.
    #[tracing::instrument(skip(self, project), fields(project = %project.id))]
    pub fn render_after(&mut self, project: &Project, count: u32) -> CracktroResult<FrameRGBA> {
        if count == 0 {
            return Err(CracktroError::validation("frame count must be >= 1"));
        }
        for _ in 1..count {
            self.render_frame(project)?;
        }
        self.render_frame(project)
    }

    fn drop_removed(&mut self, project: &Project) {
        let before = self.instances.len();
        self.instances
            .retain(|id, _| project.effects.iter().any(|e| &e.id == id));
        let dropped = before - self.instances.len();
        if dropped > 0 {
            tracing::debug!(dropped, "dropped instances of removed effects");
            self.stats.instances_dropped += dropped as u64;
        }
    }

    fn paint_effect(
        &mut self,
        effect: &Effect,
        canvas: Canvas,
        playing: bool,
    ) -> CracktroResult<()> {
        let key = dispatch::structural_key(&effect.kind, canvas);
        let inst = match self.instances.entry(effect.id.clone()) {
            Entry::Occupied(slot) => {
                let inst = slot.into_mut();
                inst.surface.ensure_size(canvas);
                if inst.key != key {
                    tracing::debug!(effect = %effect.id, kind = %effect.effect_type(), "reseed");
                    inst.state = Some(dispatch::reseed(&effect.kind, canvas, &mut self.rng));
                    inst.key = key;
                    self.stats.reseeds += 1;
                }
                inst
            }
            Entry::Vacant(slot) => {
                tracing::debug!(effect = %effect.id, kind = %effect.effect_type(), "seed");
                self.stats.reseeds += 1;
                slot.insert(Instance {
                    state: Some(dispatch::reseed(&effect.kind, canvas, &mut self.rng)),
                    key,
                    surface: Surface::new(canvas),
                })
            }
        };

        let mut state = match inst.state.take() {
            Some(state) => state,
            None => dispatch::reseed(&effect.kind, canvas, &mut self.rng),
        };
        if playing {
            state = dispatch::step(state, &effect.kind, canvas, self.opts.dt, &mut self.rng);
        }

        let mut layer = Layer::new(&mut inst.surface, &mut self.raster)?;
        let mut cx = PaintCx {
            rng: &mut self.rng,
            images: &mut self.images,
            fields: FieldPainter {
                backend: self.opts.field_backend,
                shader: self.shader.as_ref(),
            },
            playing,
        };
        dispatch::paint(&mut state, &effect.kind, &mut layer, &mut cx);
        layer.finish();
        inst.state = Some(state);
        self.stats.layers_painted += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/render_session.rs"]
mod tests;
