//! Component manifest files and their top-level `id`.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::EnvResult;
use crate::id::UniqueId;
use crate::json::{
    parse_value, read_optional, read_required, strip_comments, to_pretty, write_if_changed,
};

/// A manifest whose `id` was rewritten.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManifestUpdate {
    pub manifest_location: String,
    pub old_id: Option<UniqueId>,
    pub new_id: UniqueId,
}

/// Manifests addressed by the location strings used in the build config,
/// resolved against the project root.
#[derive(Clone, Debug)]
pub struct ManifestStore {
    root: PathBuf,
}

impl ManifestStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_of(&self, manifest_location: &str) -> PathBuf {
        self.root.join(manifest_location)
    }

    /// Id stored in a manifest. An absent or blank file yields `None`.
    pub fn existing_id(&self, manifest_location: &str) -> EnvResult<Option<UniqueId>> {
        let path = self.path_of(manifest_location);
        match read_optional(&path)? {
            Some(text) if !text.trim().is_empty() => Ok(id_of(&load(&path, &text)?)),
            _ => Ok(None),
        }
    }

    /// Make the manifest's `id` equal `id`, rewriting the file only when it
    /// differs.
    pub fn sync_id(
        &self,
        manifest_location: &str,
        id: &UniqueId,
    ) -> EnvResult<Option<ManifestUpdate>> {
        let path = self.path_of(manifest_location);
        let mut doc = load(&path, &read_required(&path)?)?;
        let old_id = id_of(&doc);
        if old_id.as_ref() == Some(id) {
            return Ok(None);
        }
        match doc.as_object_mut() {
            Some(map) => {
                map.insert("id".into(), Value::String(id.as_str().to_string()));
            }
            None => {
                doc = serde_json::json!({ "id": id.as_str() });
            }
        }
        write_if_changed(&path, &to_pretty(&doc)?)?;
        Ok(Some(ManifestUpdate {
            manifest_location: manifest_location.to_string(),
            old_id,
            new_id: id.clone(),
        }))
    }
}

fn load(path: &Path, text: &str) -> EnvResult<Value> {
    parse_value(path, &strip_comments(text))
}

fn id_of(doc: &Value) -> Option<UniqueId> {
    doc.get("id").and_then(Value::as_str).map(UniqueId::new)
}
