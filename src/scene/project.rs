use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::assets::color::Color;
use crate::foundation::core::Canvas;
use crate::foundation::error::{CracktroError, CracktroResult};
use crate::scene::model::{Effect, EffectType};

pub const DEFAULT_PROJECT_WIDTH: u32 = 800;
pub const DEFAULT_PROJECT_HEIGHT: u32 = 600;

/// A named canvas with an ordered stack of effects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
    pub effects: Vec<Effect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animations: Option<Vec<EffectAnimation>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioSettings>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Project {
    /// Empty project with a fresh id and both timestamps set to now.
    pub fn new(name: impl Into<String>, width: u32, height: u32, background: Color) -> Self {
        let now = OffsetDateTime::now_utc();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            width,
            height,
            background_color: background,
            effects: Vec::new(),
            animations: None,
            audio: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn canvas(&self) -> CracktroResult<Canvas> {
        Canvas::new(self.width, self.height)
    }

    /// Check canvas size, effect id uniqueness, and opacity range.
    pub fn validate(&self) -> CracktroResult<()> {
        self.canvas()?;
        let mut seen = HashSet::with_capacity(self.effects.len());
        for e in &self.effects {
            if !seen.insert(e.id.as_str()) {
                return Err(CracktroError::validation(format!(
                    "duplicate effect id '{}'",
                    e.id
                )));
            }
            if !(0.0..=1.0).contains(&e.opacity) {
                return Err(CracktroError::validation(format!(
                    "effect '{}' opacity {} outside [0, 1]",
                    e.id, e.opacity
                )));
            }
        }
        Ok(())
    }

    pub fn effect(&self, id: &str) -> Option<&Effect> {
        self.effects.iter().find(|e| e.id == id)
    }

    pub fn effect_mut(&mut self, id: &str) -> Option<&mut Effect> {
        self.effects.iter_mut().find(|e| e.id == id)
    }

    /// Effects in paint order: ascending z-index, ties in list order.
    pub fn paint_order(&self) -> Vec<&Effect> {
        let mut out: Vec<&Effect> = self.effects.iter().collect();
        out.sort_by_key(|e| e.z_index);
        out
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = OffsetDateTime::now_utc();
    }
}

/// Audio track attached to a project. Playback lives outside this crate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioSettings {
    pub enabled: bool,
    pub url: String,
    pub volume: f64,
    #[serde(rename = "loop")]
    pub looped: bool,
    pub beat_detection: bool,
    pub beat_sensitivity: f64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            url: String::new(),
            volume: 1.0,
            looped: true,
            beat_detection: false,
            beat_sensitivity: 0.5,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Position on the timeline in percent (0–100).
    pub time: f64,
    pub properties: serde_json::Map<String, serde_json::Value>,
    pub easing: Easing,
}

/// Keyframe track for one effect. Stored with the project; not evaluated during rendering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectAnimation {
    pub effect_id: String,
    pub keyframes: Vec<Keyframe>,
    /// Seconds.
    pub duration: f64,
    #[serde(rename = "loop")]
    pub looped: bool,
}

/// Named snapshot of one effect's parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectPreset {
    pub id: String,
    pub name: String,
    pub effect_type: EffectType,
    pub properties: Effect,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[cfg(test)]
#[path = "../../tests/unit/scene/project.rs"]
mod tests;
