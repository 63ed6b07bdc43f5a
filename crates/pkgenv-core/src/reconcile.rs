//! One full reconciliation run for a requested environment.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::components::{DeclaredComponent, enumerate_components};
use crate::descriptor::{CdnDescriptor, SolutionDescriptor, SolutionIdentity};
use crate::error::EnvResult;
use crate::id::{IdSource, RandomIds};
use crate::layout::ProjectLayout;
use crate::manifest::{ManifestStore, ManifestUpdate};
use crate::model::{ComponentBinding, DEFAULT_ENVIRONMENT, EnvironmentRecord};
use crate::resolve::resolve;

/// Outcome of [`Reconciler::run`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    pub environment: String,
    /// The settings file had no environments and `default` was snapshotted.
    pub snapshot_taken: bool,
    /// The requested environment did not exist before this run.
    pub created: bool,
    /// Bindings appended for newly declared components.
    pub added_bindings: Vec<ComponentBinding>,
    pub cdn_path: String,
    pub manifest_updates: Vec<ManifestUpdate>,
    /// Files whose content changed, in write order.
    pub written: Vec<PathBuf>,
}

pub struct Reconciler<I = RandomIds> {
    layout: ProjectLayout,
    ids: I,
}

impl Reconciler<RandomIds> {
    pub fn new(layout: ProjectLayout) -> Self {
        Self::with_ids(layout, RandomIds)
    }
}

impl<I: IdSource> Reconciler<I> {
    pub fn with_ids(layout: ProjectLayout, ids: I) -> Self {
        Self { layout, ids }
    }

    /// Bring settings, descriptors and manifests in line with `env`.
    ///
    /// An empty `cdn_override` means "no override". Every input is read
    /// before anything is written; once writing starts there is no rollback,
    /// and running again converges.
    pub fn run(&mut self, env: &str, cdn_override: &str) -> EnvResult<RunReport> {
        let mut solution = SolutionDescriptor::load(&self.layout.solution)?;
        let mut cdn = CdnDescriptor::load(&self.layout.cdn)?;
        let components = enumerate_components(&self.layout.build_config)?;
        let manifests = self.layout.manifest_store();
        let settings = self.layout.settings_store();

        let mut registry = settings.load()?;
        let snapshot_taken = registry.is_empty();
        if snapshot_taken {
            info!("No stored environments, saving current settings as {DEFAULT_ENVIRONMENT}");
            let identity = solution.identity();
            registry.upsert(EnvironmentRecord {
                name: DEFAULT_ENVIRONMENT.to_string(),
                solution_id: identity.id.clone(),
                solution_name: identity.name.clone(),
                artifact_path: identity.artifact_path.clone(),
                cdn_path: cdn.base_path().to_string(),
                bindings: snapshot_bindings(&manifests, &components)?,
            });
        }

        info!("Configuring settings for environment: {env}");
        let base_cdn = if cdn_override.is_empty() {
            cdn.base_path().to_string()
        } else {
            cdn_override.to_string()
        };
        let resolved = resolve(
            &mut registry,
            env,
            &base_cdn,
            solution.identity(),
            &mut self.ids,
        );
        let created = resolved.created;
        let record = resolved.record;

        solution.apply(SolutionIdentity {
            id: record.solution_id.clone(),
            name: record.solution_name.clone(),
            artifact_path: record.artifact_path.clone(),
        });

        let added_bindings = merge_bindings(record, &components, &mut self.ids);

        if !cdn_override.is_empty() {
            record.cdn_path = cdn_override.to_string();
        }
        cdn.set_base_path(&record.cdn_path);
        info!("Using the following CDN location: {}", record.cdn_path);
        let record = record.clone();

        let mut written = Vec::new();
        info!(
            "Writing settings to environments file: {}",
            settings.path().display()
        );
        if settings.save(&registry)? {
            written.push(settings.path().to_path_buf());
        }
        info!("Updating package solution file: {}", solution.path().display());
        if solution.save()? {
            written.push(solution.path().to_path_buf());
        }
        info!("Updating CDN in the manifest file: {}", cdn.path().display());
        if cdn.save()? {
            written.push(cdn.path().to_path_buf());
        }

        let mut manifest_updates = Vec::new();
        for binding in &record.bindings {
            let Some(update) =
                manifests.sync_id(&binding.manifest_location, &binding.component_id)?
            else {
                continue;
            };
            info!(
                "Updating ID in the manifest file: {}",
                update.manifest_location
            );
            info!(
                "OLD: {} - NEW: {}",
                update
                    .old_id
                    .as_ref()
                    .map(|id| id.as_str())
                    .unwrap_or("<none>"),
                update.new_id
            );
            written.push(manifests.path_of(&update.manifest_location));
            manifest_updates.push(update);
        }

        Ok(RunReport {
            environment: record.name,
            snapshot_taken,
            created,
            added_bindings,
            cdn_path: record.cdn_path,
            manifest_updates,
            written,
        })
    }
}

/// Bindings carrying the ids already present in each declared manifest.
fn snapshot_bindings(
    manifests: &ManifestStore,
    components: &[DeclaredComponent],
) -> EnvResult<Vec<ComponentBinding>> {
    let mut bindings: Vec<ComponentBinding> = Vec::new();
    for component in components {
        let location = &component.manifest_location;
        if bindings.iter().any(|b| &b.manifest_location == location) {
            continue;
        }
        match manifests.existing_id(location)? {
            Some(id) => {
                info!("- {id} ({location})");
                bindings.push(ComponentBinding {
                    component_id: id,
                    manifest_location: location.clone(),
                });
            }
            None => warn!(
                "Manifest {location} is missing or has no id, leaving it out of the snapshot"
            ),
        }
    }
    Ok(bindings)
}

/// Append a freshly identified binding for every declared manifest the
/// record does not know yet. Returns the appended bindings.
fn merge_bindings(
    record: &mut EnvironmentRecord,
    components: &[DeclaredComponent],
    ids: &mut dyn IdSource,
) -> Vec<ComponentBinding> {
    let mut added = Vec::new();
    for component in components {
        if record.has_binding(&component.manifest_location) {
            continue;
        }
        let binding = ComponentBinding {
            component_id: ids.next_id(),
            manifest_location: component.manifest_location.clone(),
        };
        record.bindings.push(binding.clone());
        added.push(binding);
    }
    added
}
