//! Core options backed by an optional JSON file.
//!
//! Without a real libretro runtime there is no core to publish options, so
//! the frontend reads them from `core_options.json` in its state directory
//! when present. An absent file means an empty set, which the engine renders
//! as its placeholder page.

use std::path::Path;

use menu::CoreOptionSource;
use serde::{Deserialize, Serialize};

use crate::store::StoreError;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct OptionSpec {
    description: String,
    values: Vec<String>,
    #[serde(default)]
    default_index: usize,
}

pub struct FileCoreOptions {
    options: Vec<(OptionSpec, usize)>,
}

impl FileCoreOptions {
    pub fn empty() -> Self {
        Self {
            options: Vec::new(),
        }
    }

    /// Read `core_options.json` from `dir`, or an empty set when the file
    /// does not exist.
    pub fn load_in(dir: &Path) -> Result<Self, StoreError> {
        let path = dir.join("core_options.json");
        if !path.exists() {
            return Ok(Self::empty());
        }
        let text = std::fs::read_to_string(&path).map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let specs: Vec<OptionSpec> =
            serde_json::from_str(&text).map_err(|e| StoreError::Parse {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        let options = specs
            .into_iter()
            .map(|spec| {
                let start = spec.default_index.min(spec.values.len().saturating_sub(1));
                (spec, start)
            })
            .collect();
        Ok(Self { options })
    }
}

impl CoreOptionSource for FileCoreOptions {
    fn len(&self) -> usize {
        self.options.len()
    }

    fn description(&self, index: usize) -> String {
        self.options
            .get(index)
            .map(|(spec, _)| spec.description.clone())
            .unwrap_or_default()
    }

    fn value(&self, index: usize) -> String {
        self.options
            .get(index)
            .and_then(|(spec, current)| spec.values.get(*current).cloned())
            .unwrap_or_default()
    }

    fn next_value(&mut self, index: usize) {
        if let Some((spec, current)) = self.options.get_mut(index) {
            if !spec.values.is_empty() {
                *current = (*current + 1) % spec.values.len();
            }
        }
    }

    fn prev_value(&mut self, index: usize) {
        if let Some((spec, current)) = self.options.get_mut(index) {
            if !spec.values.is_empty() {
                *current = (*current + spec.values.len() - 1) % spec.values.len();
            }
        }
    }

    fn reset_value(&mut self, index: usize) {
        if let Some((spec, current)) = self.options.get_mut(index) {
            *current = spec.default_index.min(spec.values.len().saturating_sub(1));
        }
    }
}
