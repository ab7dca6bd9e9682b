use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{debug, info};
use serde_json::{Map, Value};
use stockcut::io::ext_repr::ExtInstance;

/// Keeps the last successfully placed instance between runs.
///
/// A store is loaded once when a front-end starts and saved after every run which produced a
/// solution. Runs rejected during import or validation leave the store untouched.
pub trait Store {
    /// The stored record, `None` if nothing was stored yet
    fn load(&self) -> Result<Option<ExtInstance>>;

    /// Replaces the stored record
    fn save(&mut self, record: &ExtInstance) -> Result<()>;
}

/// A JSON file holding an object of named records, the file-backed counterpart of the browser's
/// local storage. Entries under other names are left untouched.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    key: String,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    fn read_entries(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("could not read store file: {}", self.path.display()))?;
        match contents.trim().is_empty() {
            true => Ok(Map::new()),
            false => serde_json::from_str(&contents)
                .with_context(|| format!("corrupt store file: {}", self.path.display())),
        }
    }
}

impl Store for JsonFileStore {
    fn load(&self) -> Result<Option<ExtInstance>> {
        let mut entries = self.read_entries()?;
        match entries.remove(&self.key) {
            None => {
                debug!("[STORE] no entry {:?} in {}", self.key, self.path.display());
                Ok(None)
            }
            Some(value) => {
                let record = serde_json::from_value(value).with_context(|| {
                    format!("corrupt entry {:?} in {}", self.key, self.path.display())
                })?;
                info!("[STORE] loaded {:?} from {}", self.key, self.path.display());
                Ok(Some(record))
            }
        }
    }

    fn save(&mut self, record: &ExtInstance) -> Result<()> {
        let mut entries = self.read_entries()?;
        entries.insert(self.key.clone(), serde_json::to_value(record)?);
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, contents)
            .with_context(|| format!("could not write store file: {}", self.path.display()))?;
        info!("[STORE] saved {:?} to {}", self.key, self.path.display());
        Ok(())
    }
}

/// Store which lives as long as the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    key: String,
    entries: HashMap<String, ExtInstance>,
}

impl MemoryStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            entries: HashMap::new(),
        }
    }
}

impl Store for MemoryStore {
    fn load(&self) -> Result<Option<ExtInstance>> {
        Ok(self.entries.get(&self.key).cloned())
    }

    fn save(&mut self, record: &ExtInstance) -> Result<()> {
        self.entries.insert(self.key.clone(), record.clone());
        Ok(())
    }
}

/// An entry in the browser's `window.localStorage`
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    key: String,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<web_sys::Storage> {
        let window = web_sys::window().context("no global window")?;
        window
            .local_storage()
            .map_err(|e| anyhow::anyhow!("local storage unavailable: {e:?}"))?
            .context("local storage unavailable")
    }
}

#[cfg(target_arch = "wasm32")]
impl Store for LocalStorageStore {
    fn load(&self) -> Result<Option<ExtInstance>> {
        let item = Self::storage()?
            .get_item(&self.key)
            .map_err(|e| anyhow::anyhow!("could not read {:?}: {e:?}", self.key))?;
        match item {
            None => Ok(None),
            Some(json) => Ok(Some(
                serde_json::from_str(&json)
                    .with_context(|| format!("corrupt local storage entry {:?}", self.key))?,
            )),
        }
    }

    fn save(&mut self, record: &ExtInstance) -> Result<()> {
        let json = serde_json::to_string(record)?;
        Self::storage()?
            .set_item(&self.key, &json)
            .map_err(|e| anyhow::anyhow!("could not write {:?}: {e:?}", self.key))
    }
}
