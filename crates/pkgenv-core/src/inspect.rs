//! Read-only report of the stored environments.

use crate::descriptor::SolutionDescriptor;
use crate::error::EnvResult;
use crate::id::UniqueId;
use crate::layout::ProjectLayout;
use crate::settings::SettingsState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvironmentSummary {
    pub name: String,
    pub solution_id: UniqueId,
    pub cdn_path: String,
    /// The live solution descriptor currently carries this environment's id.
    pub is_current: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inspection {
    /// There is no settings file.
    NotFound,
    /// The settings file holds no environments.
    Empty,
    Environments(Vec<EnvironmentSummary>),
}

/// Summarise the settings file without touching anything on disk.
///
/// The solution descriptor is only read when there are environments to
/// compare against it.
pub fn describe(layout: &ProjectLayout) -> EnvResult<Inspection> {
    let registry = match layout.settings_store().inspect()? {
        SettingsState::Missing => return Ok(Inspection::NotFound),
        SettingsState::Empty => return Ok(Inspection::Empty),
        SettingsState::Present(registry) => registry,
    };
    let solution = SolutionDescriptor::load(&layout.solution)?;
    let live_id = &solution.identity().id;

    let summaries = registry
        .iter()
        .map(|record| EnvironmentSummary {
            name: record.name.clone(),
            solution_id: record.solution_id.clone(),
            cdn_path: record.cdn_path.clone(),
            is_current: &record.solution_id == live_id,
        })
        .collect();
    Ok(Inspection::Environments(summaries))
}
