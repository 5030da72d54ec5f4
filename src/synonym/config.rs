//! Configuration for building a relation store.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SynonymousError};
use crate::synonym::graph::GraphBackend;

/// How a [`RelationStore`](crate::synonym::RelationStore) is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Storage backend for synonym groups.
    pub backend: GraphBackend,
    /// Merge the built-in seed pairs at construction.
    pub seed_defaults: bool,
    /// JSON file of synonym groups merged at construction.
    ///
    /// The file holds an array of groups, each an array of words:
    /// `[["ml", "machine learning"], ["ai", "artificial intelligence"]]`.
    pub seed_file: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: GraphBackend::Clique,
            seed_defaults: true,
            seed_file: None,
        }
    }
}

impl StoreConfig {
    /// Load a configuration from a JSON file.
    ///
    /// Missing fields take their default values.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SynonymousError::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            SynonymousError::config(format!(
                "Failed to parse config JSON from '{}': {}",
                path.display(),
                e
            ))
        })
    }

    pub fn with_backend(mut self, backend: GraphBackend) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_seed_defaults(mut self, seed_defaults: bool) -> Self {
        self.seed_defaults = seed_defaults;
        self
    }

    pub fn with_seed_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.seed_file = Some(path.into());
        self
    }
}

/// Read synonym groups from a JSON seed file.
pub(crate) fn load_seed_groups(path: &Path) -> Result<Vec<Vec<String>>> {
    let content = fs::read_to_string(path).map_err(|e| {
        SynonymousError::config(format!(
            "Failed to read seed file '{}': {}",
            path.display(),
            e
        ))
    })?;

    serde_json::from_str(&content).map_err(|e| {
        SynonymousError::config(format!(
            "Failed to parse seed JSON from '{}': {}",
            path.display(),
            e
        ))
    })
}
