//! Orchestration summary assembly.
//!
//! [`run_orchestration`] is the single side-effecting entry point: it syncs
//! deliverables, builds the [`OrchestrationSummary`] and writes it as JSON.
//! There is no way to obtain a summary without running the sync.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use crate::brief::brief_exists;
use crate::config::ProjectLayout;
use crate::deliverables::{PrepReport, sync_deliverables};
use crate::errors::TeamError;
use crate::roster::agent_names;

/// How the external agent launcher would be started. Never executed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LauncherConfig {
    pub command: String,
    pub args: Vec<String>,
    pub env: BTreeMap<String, String>,
}

/// Launcher for the Codex CLI running as an MCP server.
pub fn launcher_config() -> LauncherConfig {
    LauncherConfig {
        command: "npx".to_string(),
        args: ["-y", "codex", "mcp-server"]
            .into_iter()
            .map(String::from)
            .collect(),
        env: BTreeMap::new(),
    }
}

pub const NEXT_STEPS: [&str; 2] = [
    "Launch MCP Codex server: npx -y codex mcp-server",
    "Run agent workflow to refresh design + requirements based on brief.",
];

/// Per-invocation result, serialized as the JSON summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrchestrationSummary {
    pub task: String,
    pub brief: String,
    pub agents: Vec<String>,
    pub mcp: LauncherConfig,
    pub prep: PrepReport,
    pub next_steps: Vec<String>,
}

/// Sync deliverables for `brief_path` and emit the summary to `out`.
///
/// The brief's presence is checked here as well as in the loader. The summary
/// is written as two-space indented JSON followed by a newline.
pub fn run_orchestration<W: Write>(
    layout: &ProjectLayout,
    task: &str,
    brief_path: &Path,
    out: &mut W,
) -> Result<OrchestrationSummary, TeamError> {
    if !brief_exists(brief_path) {
        return Err(TeamError::BriefNotFound {
            path: brief_path.to_path_buf(),
        });
    }

    let prep = sync_deliverables(layout, brief_path)?;
    let summary = OrchestrationSummary {
        task: task.to_string(),
        brief: brief_path.display().to_string(),
        agents: agent_names().into_iter().map(String::from).collect(),
        mcp: launcher_config(),
        prep,
        next_steps: NEXT_STEPS.iter().map(|s| s.to_string()).collect(),
    };

    let json = serde_json::to_string_pretty(&summary)?;
    writeln!(out, "{}", json).map_err(|e| TeamError::Other(e.into()))?;
    out.flush().map_err(|e| TeamError::Other(e.into()))?;

    Ok(summary)
}
