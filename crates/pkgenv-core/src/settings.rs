//! Persisted registry of environment records
//! (`package-solution-env-settings.json`).

use std::path::{Path, PathBuf};

use crate::error::{EnvError, EnvResult};
use crate::json::{read_optional, to_pretty, write_if_changed};
use crate::model::SettingsRegistry;

/// What was found at the settings location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettingsState {
    /// No settings file.
    Missing,
    /// The file exists but is blank or lists no environments.
    Empty,
    Present(SettingsRegistry),
}

#[derive(Clone, Debug)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn inspect(&self) -> EnvResult<SettingsState> {
        let Some(text) = read_optional(&self.path)? else {
            return Ok(SettingsState::Missing);
        };
        if text.trim().is_empty() {
            return Ok(SettingsState::Empty);
        }
        let registry: SettingsRegistry =
            serde_json::from_str(&text).map_err(|source| EnvError::Parse {
                path: self.path.clone(),
                source,
            })?;
        if registry.is_empty() {
            Ok(SettingsState::Empty)
        } else {
            Ok(SettingsState::Present(registry))
        }
    }

    /// Load the registry; a missing or blank file is an empty registry.
    pub fn load(&self) -> EnvResult<SettingsRegistry> {
        match self.inspect()? {
            SettingsState::Present(registry) => Ok(registry),
            SettingsState::Missing | SettingsState::Empty => Ok(SettingsRegistry::new()),
        }
    }

    /// Replace the whole file with `registry`. Returns whether it changed.
    pub fn save(&self, registry: &SettingsRegistry) -> EnvResult<bool> {
        write_if_changed(&self.path, &to_pretty(registry)?)
    }
}
