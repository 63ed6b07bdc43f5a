//! Per-environment packaging identity for SharePoint Framework style projects.
//!
//! A project keeps one record per deployment environment (solution id and
//! name, package path, CDN location and the ids of its component manifests)
//! in `config/package-solution-env-settings.json`. [`Reconciler::run`]
//! switches the project's live descriptors and manifests to a requested
//! environment, deriving that environment from `default` the first time it
//! is used. [`describe`] reports what is stored.

pub mod components;
pub mod descriptor;
pub mod error;
pub mod id;
pub mod inspect;
mod json;
pub mod layout;
pub mod manifest;
pub mod model;
pub mod reconcile;
pub mod resolve;
pub mod settings;

pub use components::{DeclaredComponent, enumerate_components};
pub use descriptor::{CdnDescriptor, SolutionDescriptor, SolutionIdentity};
pub use error::{EnvError, EnvResult, ErrorKind};
pub use id::{IdSource, RandomIds, UniqueId};
pub use inspect::{EnvironmentSummary, Inspection, describe};
pub use layout::ProjectLayout;
pub use manifest::{ManifestStore, ManifestUpdate};
pub use model::{ComponentBinding, DEFAULT_ENVIRONMENT, EnvironmentRecord, SettingsRegistry};
pub use reconcile::{Reconciler, RunReport};
pub use resolve::{Resolved, artifact_path_for, resolve};
pub use settings::{SettingsState, SettingsStore};
