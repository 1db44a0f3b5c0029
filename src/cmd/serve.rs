//! HTTP server command (`agent-team serve`).

use anyhow::Result;
use std::path::Path;

use agent_team::config::Config;
use agent_team::server::{ServerConfig, start_server};

pub async fn cmd_serve(
    project_dir: &Path,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    let config = Config::new(project_dir)?;
    for warning in &config.warnings {
        tracing::warn!("{}", warning);
    }
    tracing::info!(
        root = %config.layout.root.display(),
        brief = %config.layout.brief.display(),
        "Serving agent team"
    );

    start_server(ServerConfig {
        host: host.unwrap_or(config.host),
        port: port.unwrap_or(config.port),
        layout: config.layout,
    })
    .await
}
