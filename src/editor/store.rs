//! Editor application state and the commands that mutate it.
//!
//! Project mutations snapshot the previous project into a bounded [`History`]; view state (zoom,
//! grid, selection, playback) is never part of undo. Every accepted command bumps
//! [`EditorStore::revision`] so observers can poll for changes.

use serde_json::Value;
use time::OffsetDateTime;

use crate::assets::color::Color;
use crate::editor::export::export_json;
use crate::editor::history::History;
use crate::editor::persistence::{KeyValueStore, PersistedState, load_state, save_state};
use crate::foundation::error::{CracktroError, CracktroResult};
use crate::scene::defaults::{create_default_effect, duplicate_effect};
use crate::scene::model::{Effect, EffectType};
use crate::scene::project::{EffectPreset, Project};
use crate::scene::templates::{apply_overrides, template};
use crate::session::playback::PlaybackClock;

pub const MIN_ZOOM: f64 = 0.25;
pub const MAX_ZOOM: f64 = 2.0;

/// Fields of [`EditorStore::update_project_settings`]; `None` leaves a field unchanged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectSettings {
    pub name: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub background_color: Option<Color>,
}

pub struct EditorStore {
    project: Option<Project>,
    projects: Vec<Project>,
    selected_effect_id: Option<String>,
    playback: PlaybackClock,
    zoom: f64,
    show_grid: bool,
    is_fullscreen: bool,
    presets: Vec<EffectPreset>,
    history: History<Option<Project>>,
    revision: u64,
}

impl Default for EditorStore {
    fn default() -> Self {
        Self::from_persisted(PersistedState::default())
    }
}

impl EditorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded from persisted state. No project is open and playback is running.
    pub fn from_persisted(state: PersistedState) -> Self {
        Self {
            project: None,
            projects: state.projects,
            selected_effect_id: None,
            playback: PlaybackClock::default(),
            zoom: clamp_zoom(state.zoom).unwrap_or(1.0),
            show_grid: state.show_grid,
            is_fullscreen: false,
            presets: state.presets,
            history: History::default(),
            revision: 0,
        }
    }

    /// Restore from `store`; a missing entry yields a default store.
    #[tracing::instrument(skip_all)]
    pub fn load(store: &dyn KeyValueStore) -> CracktroResult<Self> {
        let state = load_state(store)?.unwrap_or_default();
        tracing::debug!(projects = state.projects.len(), presets = state.presets.len(), "editor state loaded");
        Ok(Self::from_persisted(state))
    }

    #[tracing::instrument(skip_all)]
    pub fn persist(&self, store: &mut dyn KeyValueStore) -> CracktroResult<()> {
        save_state(store, &self.persisted())
    }

    pub fn persisted(&self) -> PersistedState {
        PersistedState {
            projects: self.projects.clone(),
            zoom: self.zoom,
            show_grid: self.show_grid,
            presets: self.presets.clone(),
        }
    }

    pub fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn selected_effect_id(&self) -> Option<&str> {
        self.selected_effect_id.as_deref()
    }

    /// Clock shared with any render session that should follow play/pause.
    pub fn playback(&self) -> &PlaybackClock {
        &self.playback
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    pub fn presets(&self) -> &[EffectPreset] {
        &self.presets
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn bump(&mut self) {
        self.revision += 1;
    }

    /// Replace the current project, recording the old one for undo.
    fn replace_project(&mut self, next: Option<Project>) {
        let prev = std::mem::replace(&mut self.project, next);
        self.history.record(prev);
        self.bump();
    }

    /// Run `f` on a copy of the current project and commit it if `f` reports a change.
    fn mutate(&mut self, f: impl FnOnce(&mut Project) -> bool) -> bool {
        let Some(current) = self.project.as_ref() else {
            return false;
        };
        let mut next = current.clone();
        if !f(&mut next) {
            return false;
        }
        next.touch();
        self.replace_project(Some(next));
        true
    }

    fn try_mutate(&mut self, f: impl FnOnce(&mut Project) -> CracktroResult<bool>) -> CracktroResult<bool> {
        let Some(current) = self.project.as_ref() else {
            return Ok(false);
        };
        let mut next = current.clone();
        if !f(&mut next)? {
            return Ok(false);
        }
        next.touch();
        self.replace_project(Some(next));
        Ok(true)
    }

    // Projects

    /// Open a new empty project on a black background and add it to the project list.
    pub fn create_project(&mut self, name: &str, width: u32, height: u32) -> CracktroResult<&Project> {
        let project = Project::new(name, width, height, Color::BLACK);
        project.canvas()?;
        self.projects.push(project.clone());
        self.selected_effect_id = None;
        self.replace_project(Some(project));
        self.project
            .as_ref()
            .ok_or_else(|| CracktroError::validation("project vanished after create"))
    }

    pub fn load_project(&mut self, project: Project) {
        self.selected_effect_id = None;
        self.replace_project(Some(project));
    }

    /// Stamp `updatedAt` and write the current project into the project list, replacing the
    /// entry with the same id or appending one.
    pub fn save_project(&mut self) -> bool {
        let Some(project) = self.project.as_mut() else {
            return false;
        };
        project.touch();
        let saved = project.clone();
        match self.projects.iter_mut().find(|p| p.id == saved.id) {
            Some(slot) => *slot = saved,
            None => self.projects.push(saved),
        }
        self.bump();
        true
    }

    /// Remove `id` from the list, closing it if it is the open project.
    pub fn delete_project(&mut self, id: &str) -> bool {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        let removed = self.projects.len() != before;
        if self.project.as_ref().is_some_and(|p| p.id == id) {
            self.replace_project(None);
            return true;
        }
        if removed {
            self.bump();
        }
        removed
    }

    pub fn update_project_settings(&mut self, settings: ProjectSettings) -> CracktroResult<bool> {
        self.try_mutate(|p| {
            if let Some(name) = settings.name {
                p.name = name;
            }
            if let Some(width) = settings.width {
                p.width = width;
            }
            if let Some(height) = settings.height {
                p.height = height;
            }
            if let Some(bg) = settings.background_color {
                p.background_color = bg;
            }
            p.canvas()?;
            Ok(true)
        })
    }

    // Effects

    /// Append a default effect of `ty` above every existing one and select it.
    pub fn add_effect(&mut self, ty: EffectType) -> Option<String> {
        let mut effect = create_default_effect(ty);
        let id = effect.id.clone();
        let added = self.mutate(|p| {
            effect.z_index = p.effects.iter().map(|e| e.z_index).max().unwrap_or(-1) + 1;
            p.effects.push(effect);
            true
        });
        added.then(|| {
            self.selected_effect_id = Some(id.clone());
            id
        })
    }

    pub fn remove_effect(&mut self, id: &str) -> bool {
        let removed = self.mutate(|p| {
            let before = p.effects.len();
            p.effects.retain(|e| e.id != id);
            p.effects.len() != before
        });
        if removed && self.selected_effect_id.as_deref() == Some(id) {
            self.selected_effect_id = None;
        }
        removed
    }

    /// Shallow-merge the JSON object `patch` onto effect `id`.
    ///
    /// `id` and `type` keys in the patch are ignored. A patch that does not produce a valid
    /// effect is rejected and nothing changes.
    pub fn update_effect(&mut self, id: &str, patch: &Value) -> CracktroResult<bool> {
        if !patch.is_object() {
            return Err(CracktroError::validation("effect patch must be a JSON object"));
        }
        self.try_mutate(|p| {
            let Some(slot) = p.effects.iter_mut().find(|e| e.id == id) else {
                return Ok(false);
            };
            let updated = apply_overrides(slot.clone(), patch)?;
            if !(0.0..=1.0).contains(&updated.opacity) {
                return Err(CracktroError::validation(format!(
                    "opacity {} outside [0, 1]",
                    updated.opacity
                )));
            }
            *slot = updated;
            Ok(true)
        })
    }

    /// Append a copy of `id` and select it.
    pub fn duplicate_effect(&mut self, id: &str) -> Option<String> {
        let mut new_id = None;
        self.mutate(|p| {
            let Some(copy) = p.effect(id).map(duplicate_effect) else {
                return false;
            };
            new_id = Some(copy.id.clone());
            p.effects.push(copy);
            true
        });
        if let Some(id) = &new_id {
            self.selected_effect_id = Some(id.clone());
        }
        new_id
    }

    /// Move the effect at `from` to `to` and renumber every z-index to its list position.
    pub fn reorder_effects(&mut self, from: usize, to: usize) -> bool {
        self.mutate(|p| {
            if from >= p.effects.len() {
                return false;
            }
            let moved = p.effects.remove(from);
            let to = to.min(p.effects.len());
            p.effects.insert(to, moved);
            for (i, e) in p.effects.iter_mut().enumerate() {
                e.z_index = i32::try_from(i).unwrap_or(i32::MAX);
            }
            true
        })
    }

    pub fn toggle_effect_enabled(&mut self, id: &str) -> bool {
        self.mutate(|p| match p.effect_mut(id) {
            Some(e) => {
                e.enabled = !e.enabled;
                true
            }
            None => false,
        })
    }

    pub fn select_effect(&mut self, id: Option<&str>) {
        self.selected_effect_id = id.map(str::to_owned);
        self.bump();
    }

    // Playback and view

    pub fn toggle_playing(&mut self) -> bool {
        let playing = self.playback.toggle();
        self.bump();
        playing
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playback.set_playing(playing);
        self.bump();
    }

    /// Clamped to `[MIN_ZOOM, MAX_ZOOM]`; non-finite values are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if let Some(z) = clamp_zoom(zoom) {
            self.zoom = z;
            self.bump();
        }
    }

    pub fn toggle_grid(&mut self) -> bool {
        self.show_grid = !self.show_grid;
        self.bump();
        self.show_grid
    }

    pub fn toggle_fullscreen(&mut self) -> bool {
        self.is_fullscreen = !self.is_fullscreen;
        self.bump();
        self.is_fullscreen
    }

    // Presets

    /// Snapshot effect `effect_id` of the open project under `name`.
    pub fn save_preset(&mut self, name: &str, effect_id: &str) -> Option<String> {
        let effect = self.project.as_ref()?.effect(effect_id)?.clone();
        let preset = EffectPreset {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_owned(),
            effect_type: effect.effect_type(),
            properties: effect,
            created_at: OffsetDateTime::now_utc(),
        };
        let id = preset.id.clone();
        self.presets.push(preset);
        self.bump();
        Some(id)
    }

    /// Copy a preset onto the selected effect, keeping its id and name.
    ///
    /// A type mismatch, or no selection, is a silent no-op.
    pub fn load_preset(&mut self, preset_id: &str) -> bool {
        let Some(preset) = self.presets.iter().find(|p| p.id == preset_id).cloned() else {
            return false;
        };
        let Some(selected) = self.selected_effect_id.clone() else {
            return false;
        };
        self.mutate(|p| {
            let Some(e) = p.effect_mut(&selected) else {
                return false;
            };
            if e.effect_type() != preset.effect_type {
                return false;
            }
            let (id, name) = (std::mem::take(&mut e.id), std::mem::take(&mut e.name));
            *e = Effect {
                id,
                name,
                ..preset.properties
            };
            true
        })
    }

    pub fn delete_preset(&mut self, preset_id: &str) -> bool {
        let before = self.presets.len();
        self.presets.retain(|p| p.id != preset_id);
        let removed = self.presets.len() != before;
        if removed {
            self.bump();
        }
        removed
    }

    // Import, export, templates

    /// Pretty JSON of the open project, or an empty string when none is open.
    pub fn export_project(&self) -> CracktroResult<String> {
        match &self.project {
            Some(p) => export_json(p),
            None => Ok(String::new()),
        }
    }

    /// Parse and open a project with a fresh id and timestamps. On error nothing changes.
    #[tracing::instrument(skip_all, fields(len = json.len()))]
    pub fn import_project(&mut self, json: &str) -> CracktroResult<&Project> {
        let mut project: Project = serde_json::from_str(json)?;
        project.validate()?;
        let now = OffsetDateTime::now_utc();
        project.id = uuid::Uuid::new_v4().to_string();
        project.created_at = now;
        project.updated_at = now;

        self.projects.push(project.clone());
        self.selected_effect_id = None;
        self.replace_project(Some(project));
        self.project
            .as_ref()
            .ok_or_else(|| CracktroError::validation("project vanished after import"))
    }

    /// Instantiate a built-in template and open it.
    pub fn apply_template(&mut self, template_id: &str) -> CracktroResult<&Project> {
        let t = template(template_id).ok_or_else(|| {
            CracktroError::validation(format!("unknown template '{template_id}'"))
        })?;
        let project = t.instantiate()?;
        self.load_project(project);
        self.project
            .as_ref()
            .ok_or_else(|| CracktroError::validation("project vanished after template"))
    }

    // History

    pub fn undo(&mut self) -> bool {
        let current = self.project.clone();
        match self.history.undo(current) {
            Some(prev) => {
                self.project = prev;
                self.bump();
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        let current = self.project.clone();
        match self.history.redo(current) {
            Some(next) => {
                self.project = next;
                self.bump();
                true
            }
            None => false,
        }
    }
}

fn clamp_zoom(zoom: f64) -> Option<f64> {
    zoom.is_finite().then(|| zoom.clamp(MIN_ZOOM, MAX_ZOOM))
}

#[cfg(test)]
#[path = "../../tests/unit/editor/store.rs"]
mod tests;
