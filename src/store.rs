//! Persistence for scraped enchants.
//!
//! A store is either purely in memory or mirrored to a JSON file. The file
//! carries a format version so that a change in the stored recipe shape can
//! be detected instead of silently misread.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::EnchantError;
use crate::model::{Recipe, StoredEnchant};

pub const STORE_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    version: u32,
    next_id: u64,
    enchants: Vec<StoredEnchant>,
}

impl Default for StoreFile {
    fn default() -> Self {
        Self {
            version: STORE_VERSION,
            next_id: 1,
            enchants: Vec::new(),
        }
    }
}

/// Handle to the enchant collection. Ids are assigned in increasing order
/// and `list` returns enchants in id order. Each URL is stored at most once.
#[derive(Debug)]
pub struct EnchantStore {
    path: Option<PathBuf>,
    state: Mutex<StoreFile>,
}

impl EnchantStore {
    pub fn in_memory() -> Self {
        Self {
            path: None,
            state: Mutex::new(StoreFile::default()),
        }
    }

    /// Open the store file at `path`, starting empty if it does not exist yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, EnchantError> {
        let path = path.as_ref().to_path_buf();
        let state = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            let file: StoreFile = serde_json::from_str(&raw)?;
            if file.version != STORE_VERSION {
                return Err(EnchantError::UnsupportedStoreVersion {
                    found: file.version,
                    expected: STORE_VERSION,
                });
            }
            debug!("Loaded {} enchants from {}", file.enchants.len(), path.display());
            file
        } else {
            StoreFile::default()
        };

        Ok(Self {
            path: Some(path),
            state: Mutex::new(state),
        })
    }

    fn lock(&self) -> MutexGuard<'_, StoreFile> {
        // State is only mutated in whole steps, so a poisoned lock is still consistent.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn insert(&self, url: &str, recipe: Recipe) -> Result<StoredEnchant, EnchantError> {
        let mut state = self.lock();
        if state.enchants.iter().any(|e| e.url == url) {
            return Err(EnchantError::AlreadyExists(url.to_string()));
        }

        let enchant = StoredEnchant {
            id: state.next_id,
            url: url.to_string(),
            recipe,
        };
        state.next_id += 1;
        state.enchants.push(enchant.clone());
        if let Err(err) = self.persist(&state) {
            state.enchants.pop();
            state.next_id -= 1;
            return Err(err);
        }

        info!("Stored enchant {} ({})", enchant.id, enchant.recipe.title());
        Ok(enchant)
    }

    pub fn list(&self) -> Vec<StoredEnchant> {
        self.lock().enchants.clone()
    }

    pub fn get(&self, id: u64) -> Option<StoredEnchant> {
        self.lock().enchants.iter().find(|e| e.id == id).cloned()
    }

    pub fn exists_by_url(&self, url: &str) -> bool {
        self.lock().enchants.iter().any(|e| e.url == url)
    }

    /// Remove an enchant. Returns `false` when no enchant has this id.
    pub fn delete(&self, id: u64) -> Result<bool, EnchantError> {
        let mut state = self.lock();
        let Some(position) = state.enchants.iter().position(|e| e.id == id) else {
            return Ok(false);
        };
        let removed = state.enchants.remove(position);
        if let Err(err) = self.persist(&state) {
            state.enchants.insert(position, removed);
            return Err(err);
        }

        info!("Deleted enchant {}", id);
        Ok(true)
    }

    fn persist(&self, state: &StoreFile) -> Result<(), EnchantError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let json = serde_json::to_string_pretty(state)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}
