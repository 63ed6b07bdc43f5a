//! Environment records and the registry that holds them.
//!
//! On disk the registry is an `environments` array; in memory it is keyed by
//! environment name while keeping the stored order.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::id::UniqueId;

/// Name of the environment every other environment is derived from.
pub const DEFAULT_ENVIRONMENT: &str = "default";

/// Durable id assigned to one manifest file in one environment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentBinding {
    #[serde(rename = "id")]
    pub component_id: UniqueId,
    #[serde(rename = "location")]
    pub manifest_location: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentRecord {
    #[serde(rename = "environment")]
    pub name: String,
    #[serde(rename = "id")]
    pub solution_id: UniqueId,
    #[serde(rename = "name")]
    pub solution_name: String,
    #[serde(rename = "zip")]
    pub artifact_path: String,
    #[serde(rename = "cdn")]
    pub cdn_path: String,
    #[serde(rename = "entries", default)]
    pub bindings: Vec<ComponentBinding>,
}

impl EnvironmentRecord {
    pub fn binding(&self, manifest_location: &str) -> Option<&ComponentBinding> {
        self.bindings
            .iter()
            .find(|b| b.manifest_location == manifest_location)
    }

    pub fn has_binding(&self, manifest_location: &str) -> bool {
        self.binding(manifest_location).is_some()
    }
}

/// All known environments, at most one per name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsRegistry {
    environments: IndexMap<String, EnvironmentRecord>,
}

impl SettingsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.environments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.environments.len()
    }

    pub fn get(&self, name: &str) -> Option<&EnvironmentRecord> {
        self.environments.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.environments.contains_key(name)
    }

    /// Store `record` under its own name, replacing any previous record in
    /// place. New names are appended.
    pub fn upsert(&mut self, record: EnvironmentRecord) -> &mut EnvironmentRecord {
        let entry = self.environments.entry(record.name.clone());
        match entry {
            indexmap::map::Entry::Occupied(mut slot) => {
                slot.insert(record);
                slot.into_mut()
            }
            indexmap::map::Entry::Vacant(slot) => slot.insert(record),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnvironmentRecord> {
        self.environments.values()
    }

    pub(crate) fn entry(
        &mut self,
        name: &str,
    ) -> indexmap::map::Entry<'_, String, EnvironmentRecord> {
        self.environments.entry(name.to_string())
    }
}

#[derive(Serialize)]
struct SettingsFileRef<'a> {
    environments: Vec<&'a EnvironmentRecord>,
}

#[derive(Deserialize)]
struct SettingsFile {
    #[serde(default)]
    environments: Vec<EnvironmentRecord>,
}

impl Serialize for SettingsRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SettingsFileRef {
            environments: self.environments.values().collect(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SettingsRegistry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let file = SettingsFile::deserialize(deserializer)?;
        let mut environments = IndexMap::with_capacity(file.environments.len());
        for record in file.environments {
            if environments.contains_key(&record.name) {
                tracing::warn!(
                    "Ignoring duplicate settings for environment: {}",
                    record.name
                );
                continue;
            }
            environments.insert(record.name.clone(), record);
        }
        Ok(Self { environments })
    }
}
