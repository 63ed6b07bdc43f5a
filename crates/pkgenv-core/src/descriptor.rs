//! The build's live solution and CDN descriptors.
//!
//! Only a handful of fields are owned here; the rest of each document is
//! carried through untouched so a rewrite preserves it.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{EnvError, EnvResult};
use crate::id::UniqueId;
use crate::json::{parse_value, read_required, to_pretty, write_if_changed};

/// The identity triple a solution descriptor carries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolutionIdentity {
    pub id: UniqueId,
    pub name: String,
    pub artifact_path: String,
}

/// `package-solution.json`.
#[derive(Clone, Debug)]
pub struct SolutionDescriptor {
    path: PathBuf,
    doc: Value,
    identity: SolutionIdentity,
}

impl SolutionDescriptor {
    pub fn load(path: impl AsRef<Path>) -> EnvResult<Self> {
        let path = path.as_ref();
        let doc = parse_value(path, &read_required(path)?)?;
        let identity = SolutionIdentity {
            id: UniqueId::new(required_str(path, &doc, &["solution", "id"], "solution.id")?),
            name: required_str(path, &doc, &["solution", "name"], "solution.name")?,
            artifact_path: required_str(
                path,
                &doc,
                &["paths", "zippedPackage"],
                "paths.zippedPackage",
            )?,
        };
        Ok(Self {
            path: path.to_path_buf(),
            doc,
            identity,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn identity(&self) -> &SolutionIdentity {
        &self.identity
    }

    /// Overwrite `solution.id`, `solution.name` and `paths.zippedPackage`.
    pub fn apply(&mut self, identity: SolutionIdentity) {
        set_str(&mut self.doc, &["solution", "id"], identity.id.as_str());
        set_str(&mut self.doc, &["solution", "name"], &identity.name);
        set_str(
            &mut self.doc,
            &["paths", "zippedPackage"],
            &identity.artifact_path,
        );
        self.identity = identity;
    }

    /// Write the document back; returns whether the file changed.
    pub fn save(&self) -> EnvResult<bool> {
        write_if_changed(&self.path, &to_pretty(&self.doc)?)
    }
}

/// `write-manifests.json`.
#[derive(Clone, Debug)]
pub struct CdnDescriptor {
    path: PathBuf,
    doc: Value,
    base_path: String,
}

impl CdnDescriptor {
    pub fn load(path: impl AsRef<Path>) -> EnvResult<Self> {
        let path = path.as_ref();
        let doc = parse_value(path, &read_required(path)?)?;
        let base_path = required_str(path, &doc, &["cdnBasePath"], "cdnBasePath")?;
        Ok(Self {
            path: path.to_path_buf(),
            doc,
            base_path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn set_base_path(&mut self, base_path: &str) {
        set_str(&mut self.doc, &["cdnBasePath"], base_path);
        self.base_path = base_path.to_string();
    }

    pub fn save(&self) -> EnvResult<bool> {
        write_if_changed(&self.path, &to_pretty(&self.doc)?)
    }
}

fn required_str(
    path: &Path,
    doc: &Value,
    keys: &[&str],
    field: &'static str,
) -> EnvResult<String> {
    let mut cursor = doc;
    for key in keys {
        cursor = cursor
            .get(key)
            .ok_or_else(|| missing_field(path, field))?;
    }
    cursor
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| missing_field(path, field))
}

fn missing_field(path: &Path, field: &'static str) -> EnvError {
    EnvError::MissingField {
        path: path.to_path_buf(),
        field,
    }
}

/// Set a nested string field, creating intermediate objects as needed.
fn set_str(doc: &mut Value, keys: &[&str], value: &str) {
    let Some((last, parents)) = keys.split_last() else {
        return;
    };
    let mut cursor = doc;
    for key in parents {
        if !cursor.is_object() {
            *cursor = Value::Object(Map::new());
        }
        let Value::Object(map) = cursor else {
            return;
        };
        cursor = map
            .entry(key.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }
    if let Value::Object(map) = cursor {
        map.insert(last.to_string(), Value::String(value.to_string()));
    }
}
