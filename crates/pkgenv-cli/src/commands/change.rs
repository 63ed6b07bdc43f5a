//! `pkgenv change-pkg-settings` command.

use anyhow::{Context, Result};
use clap::Args;
use pkgenv_core::{DEFAULT_ENVIRONMENT, Inspection, Reconciler, describe};

use crate::opts::resolve_project;
use crate::output::{print_environments, print_report};

#[derive(Args, Debug)]
pub struct ChangeArgs {
    /// Environment to switch to
    #[arg(long, default_value = DEFAULT_ENVIRONMENT)]
    pub env: String,

    /// List the stored environments instead of switching
    #[arg(long)]
    pub check: bool,

    /// CDN base path to use (and store) for the environment
    #[arg(long, default_value = "")]
    pub cdnpath: String,
}

impl ChangeArgs {
    /// Target environment; an empty `--env` falls back to `default`.
    pub fn environment(&self) -> &str {
        if self.env.is_empty() {
            DEFAULT_ENVIRONMENT
        } else {
            &self.env
        }
    }
}

pub fn cmd_change(args: &ChangeArgs) -> Result<()> {
    let layout = resolve_project()?;

    if args.check {
        match describe(&layout).context("read environment settings")? {
            Inspection::NotFound => tracing::error!("No environment information file found!"),
            Inspection::Empty => tracing::warn!("No environment information found!"),
            Inspection::Environments(summaries) => print_environments(&summaries)?,
        }
        return Ok(());
    }

    let env = args.environment();
    let report = Reconciler::new(layout)
        .run(env, &args.cdnpath)
        .with_context(|| format!("change package settings to '{env}'"))?;
    print_report(&report)
}
