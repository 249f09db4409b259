//! Key-value persistence for the editor's durable state.
//!
//! Only projects, presets and two view preferences survive a restart. They are stored as one JSON
//! document under [`STORAGE_KEY`], wrapped in a versioned envelope.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::foundation::error::{CracktroError, CracktroResult};
use crate::scene::project::{EffectPreset, Project};

pub const STORAGE_KEY: &str = "cracktro-editor-storage";
const STORAGE_VERSION: u32 = 0;

/// String store keyed by name.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> CracktroResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> CracktroResult<()>;
    fn remove(&mut self, key: &str) -> CracktroResult<()>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> CracktroResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> CracktroResult<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> CracktroResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// One `<key>.json` file per entry inside a directory.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates `dir` if it does not exist.
    pub fn open(dir: impl Into<PathBuf>) -> CracktroResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| {
            CracktroError::storage(format!("create store dir '{}': {e}", dir.display()))
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> CracktroResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(CracktroError::storage(format!("invalid store key '{key}'")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> CracktroResult<Option<String>> {
        let path = self.path(key)?;
        match std::fs::read_to_string(&path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CracktroError::storage(format!(
                "read '{}': {e}",
                path.display()
            ))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> CracktroResult<()> {
        let path = self.path(key)?;
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)
            .and_then(|()| std::fs::rename(&tmp, &path))
            .map_err(|e| CracktroError::storage(format!("write '{}': {e}", path.display())))
    }

    fn remove(&mut self, key: &str) -> CracktroResult<()> {
        let path = self.path(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CracktroError::storage(format!(
                "remove '{}': {e}",
                path.display()
            ))),
        }
    }
}

/// The persisted subset of editor state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistedState {
    pub projects: Vec<Project>,
    pub zoom: f64,
    pub show_grid: bool,
    pub presets: Vec<EffectPreset>,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            projects: Vec::new(),
            zoom: 1.0,
            show_grid: false,
            presets: Vec::new(),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct Envelope<T> {
    state: T,
    #[serde(default)]
    version: u32,
}

/// `None` when nothing was stored yet. Malformed content is an error.
pub fn load_state(store: &dyn KeyValueStore) -> CracktroResult<Option<PersistedState>> {
    let Some(raw) = store.get(STORAGE_KEY)? else {
        return Ok(None);
    };
    let envelope: Envelope<PersistedState> = serde_json::from_str(&raw)?;
    if envelope.version != STORAGE_VERSION {
        return Err(CracktroError::storage(format!(
            "unsupported storage version {}",
            envelope.version
        )));
    }
    Ok(Some(envelope.state))
}

pub fn save_state(store: &mut dyn KeyValueStore, state: &PersistedState) -> CracktroResult<()> {
    let raw = serde_json::to_string(&Envelope {
        state,
        version: STORAGE_VERSION,
    })?;
    store.set(STORAGE_KEY, &raw)
}

#[cfg(test)]
#[path = "../../tests/unit/editor/persistence.rs"]
mod tests;
