//! Lookup-or-derive of the environment record a run works on.

use indexmap::map::Entry;

use crate::descriptor::SolutionIdentity;
use crate::id::IdSource;
use crate::model::{DEFAULT_ENVIRONMENT, EnvironmentRecord, SettingsRegistry};

/// Extension marker of packaged solution artifacts.
pub const ARTIFACT_EXTENSION: &str = ".sppkg";

/// The record a run should use, living inside the registry.
#[derive(Debug)]
pub struct Resolved<'a> {
    pub record: &'a mut EnvironmentRecord,
    /// Whether the record was derived during this call.
    pub created: bool,
}

/// Name, artifact path and CDN path a new environment is derived from.
#[derive(Clone, Debug)]
struct Template {
    solution_name: String,
    artifact_path: String,
    cdn_path: String,
}

/// Return the record for `env`, deriving and inserting it when absent.
///
/// A new record starts from the `default` environment when there is one,
/// otherwise from the live solution descriptor with `cdn_path` as its CDN
/// location. Either way it gets a fresh solution id and no bindings.
pub fn resolve<'a>(
    registry: &'a mut SettingsRegistry,
    env: &str,
    cdn_path: &str,
    live: &SolutionIdentity,
    ids: &mut dyn IdSource,
) -> Resolved<'a> {
    let from_default = registry.get(DEFAULT_ENVIRONMENT).map(|default| Template {
        solution_name: default.solution_name.clone(),
        artifact_path: default.artifact_path.clone(),
        cdn_path: default.cdn_path.clone(),
    });

    match registry.entry(env) {
        Entry::Occupied(slot) => Resolved {
            record: slot.into_mut(),
            created: false,
        },
        Entry::Vacant(slot) => {
            let template = from_default.unwrap_or_else(|| template_for_live(cdn_path, live));
            let record = derive(env, template, ids);
            tracing::debug!(
                "Derived environment {} with solution id {}",
                env,
                record.solution_id
            );
            Resolved {
                record: slot.insert(record),
                created: true,
            }
        }
    }
}

/// `{stem}-{env}.sppkg`, where `stem` is everything before the first
/// `.sppkg` in `artifact_path` (the whole path if there is none).
pub fn artifact_path_for(artifact_path: &str, env: &str) -> String {
    let stem = artifact_path
        .split(ARTIFACT_EXTENSION)
        .next()
        .unwrap_or(artifact_path);
    format!("{stem}-{env}{ARTIFACT_EXTENSION}")
}

fn template_for_live(cdn_path: &str, live: &SolutionIdentity) -> Template {
    Template {
        solution_name: live.name.clone(),
        artifact_path: live.artifact_path.clone(),
        cdn_path: cdn_path.to_string(),
    }
}

fn derive(env: &str, template: Template, ids: &mut dyn IdSource) -> EnvironmentRecord {
    EnvironmentRecord {
        name: env.to_string(),
        solution_id: ids.next_id(),
        solution_name: format!("{}-{env}", template.solution_name),
        artifact_path: artifact_path_for(&template.artifact_path, env),
        cdn_path: template.cdn_path,
        bindings: Vec::new(),
    }
}
