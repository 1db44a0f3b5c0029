//! Standalone orchestration run (`agent-team run`).

use anyhow::{Context, Result};
use std::path::Path;

use agent_team::config::Config;
use agent_team::credentials::{API_KEY_ENV, Credentials, prompt_api_key};
use agent_team::orchestrator::run_orchestration;

pub fn cmd_run(
    project_dir: &Path,
    task: &str,
    brief: Option<&Path>,
    prompt_for_key: bool,
) -> Result<()> {
    let config = Config::new(project_dir)?;
    for warning in &config.warnings {
        tracing::warn!("{}", warning);
    }

    let credentials = Credentials::resolve(
        std::env::var(API_KEY_ENV).ok(),
        prompt_for_key,
        prompt_api_key,
    );
    tracing::debug!(api_key = credentials.has_api_key(), "Credentials resolved");

    // Paths typed on the command line are relative to the shell, not the project root.
    let brief_path = match brief {
        Some(path) => std::path::absolute(path)
            .with_context(|| format!("Failed to resolve brief path: {}", path.display()))?,
        None => config.layout.brief.clone(),
    };

    run_orchestration(
        &config.layout,
        task,
        &brief_path,
        &mut std::io::stdout().lock(),
    )?;
    Ok(())
}
