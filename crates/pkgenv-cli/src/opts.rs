//! Project resolution.

use std::path::PathBuf;

use anyhow::{Context, Result};
use pkgenv_core::ProjectLayout;

/// Environment variable naming the project root.
pub const PROJECT_ENV: &str = "PKGENV_PROJECT";

/// Resolve the project layout.
///
/// Priority:
/// 1. `PKGENV_PROJECT` env var (relative paths are taken from the CWD)
/// 2. The current directory
pub fn resolve_project() -> Result<ProjectLayout> {
    let cwd = std::env::current_dir().context("get current directory")?;
    let root = match std::env::var_os(PROJECT_ENV) {
        Some(dir) if !dir.is_empty() => {
            let dir = PathBuf::from(dir);
            if dir.is_relative() { cwd.join(dir) } else { dir }
        }
        _ => cwd,
    };
    Ok(ProjectLayout::new(root))
}
