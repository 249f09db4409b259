//! Cracktro is a headless engine for demoscene-style "cracktro" intros.
//!
//! A [`Project`] is an ordered stack of parametrized retro effects (starfields, plasma, scrollers,
//! copper bars, vector balls and so on). The public API has two halves:
//!
//! - [`RenderSession`] advances every effect's simulation and composites the stack into frames
//! - [`EditorStore`] is the editing controller: effect commands, presets, templates, undo/redo,
//!   persistence and export
#![forbid(unsafe_code)]

mod assets;
mod foundation;

pub(crate) mod audio;
pub(crate) mod editor;
/// Per-kind effect renderers and their simulation state.
pub mod effects;
/// Layer drawing, compositing and frame output.
pub mod render;
pub(crate) mod scene;
pub(crate) mod session;

pub use crate::assets::color::{Color, NamedPalette, palette_at, palette_cycle};
pub use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rect, Rgba8Premul, Vec2};
pub use crate::foundation::error::{CracktroError, CracktroResult};

pub use crate::audio::analyzer::{AudioAnalysis, AudioAnalyzer};
pub use crate::editor::export::{decode_embed_param, embed_code, export_json, standalone_html};
pub use crate::editor::history::{HISTORY_LIMIT, History};
pub use crate::editor::persistence::{
    FileStore, KeyValueStore, MemoryStore, PersistedState, STORAGE_KEY, load_state, save_state,
};
pub use crate::editor::store::{EditorStore, MAX_ZOOM, MIN_ZOOM, ProjectSettings};
pub use crate::effects::SimState;
pub use crate::render::compositor::{CompositeLayer, GRID_SPACING, Overlays, compose};
pub use crate::render::field::FieldBackend;
pub use crate::render::frame::FrameRGBA;
pub use crate::scene::defaults::{create_default_effect, duplicate_effect};
pub use crate::scene::model::*;
pub use crate::scene::project::{
    AudioSettings, DEFAULT_PROJECT_HEIGHT, DEFAULT_PROJECT_WIDTH, Easing, EffectAnimation,
    EffectPreset, Keyframe, Project,
};
pub use crate::scene::templates::{Template, template, templates};
pub use crate::session::playback::PlaybackClock;
pub use crate::session::render_session::{RenderSession, RenderSessionOpts, RenderStats};
