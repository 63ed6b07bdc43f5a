//! Component declarations from the build configuration (`config.json`).

use std::path::Path;

use serde_json::Value;

use crate::error::EnvResult;
use crate::json::{parse_value, read_required};

/// One component declared in a bundle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeclaredComponent {
    /// Name of the bundle the component belongs to.
    pub key: String,
    /// Manifest location exactly as written in the build configuration.
    pub manifest_location: String,
}

/// Enumerate `bundles.*.components[].manifest` in declaration order.
pub fn enumerate_components(config_path: &Path) -> EnvResult<Vec<DeclaredComponent>> {
    let doc = parse_value(config_path, &read_required(config_path)?)?;
    Ok(components_in(&doc))
}

pub(crate) fn components_in(doc: &Value) -> Vec<DeclaredComponent> {
    let Some(bundles) = doc.get("bundles").and_then(Value::as_object) else {
        return Vec::new();
    };
    let mut out = Vec::new();
    for (bundle_name, bundle) in bundles {
        let Some(components) = bundle.get("components").and_then(Value::as_array) else {
            continue;
        };
        for component in components {
            if let Some(manifest) = component.get("manifest").and_then(Value::as_str) {
                out.push(DeclaredComponent {
                    key: bundle_name.clone(),
                    manifest_location: manifest.to_string(),
                });
            }
        }
    }
    out
}
