//! Well-known file locations inside a project.

use std::path::PathBuf;

use crate::manifest::ManifestStore;
use crate::settings::SettingsStore;

pub const SOLUTION_FILE: &str = "config/package-solution.json";
pub const CDN_FILE: &str = "config/write-manifests.json";
pub const BUILD_CONFIG_FILE: &str = "config/config.json";
pub const SETTINGS_FILE: &str = "config/package-solution-env-settings.json";

/// Resolved paths for one project.
#[derive(Clone, Debug)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub solution: PathBuf,
    pub cdn: PathBuf,
    pub build_config: PathBuf,
    pub settings: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            solution: root.join(SOLUTION_FILE),
            cdn: root.join(CDN_FILE),
            build_config: root.join(BUILD_CONFIG_FILE),
            settings: root.join(SETTINGS_FILE),
            root,
        }
    }

    pub fn settings_store(&self) -> SettingsStore {
        SettingsStore::new(&self.settings)
    }

    pub fn manifest_store(&self) -> ManifestStore {
        ManifestStore::new(&self.root)
    }
}
