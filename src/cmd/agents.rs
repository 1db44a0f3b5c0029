//! Agent roster listing (`agent-team agents`).

use anyhow::{Context, Result};
use console::style;
use std::path::Path;

use agent_team::roster::{AGENTS, deliverable_status};

pub fn cmd_agents(project_dir: &Path, json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(&AGENTS).context("Failed to serialize roster")?;
        println!("{}", out);
        return Ok(());
    }

    let status = deliverable_status(project_dir);

    println!();
    println!("{}", style("Agent Team").bold().cyan());
    println!("{}", style("==========").cyan());

    for (agent, agent_status) in AGENTS.iter().zip(&status) {
        println!();
        println!("{}", style(agent.name).bold());
        println!("  {}", agent.role);
        if !agent.notes.is_empty() {
            println!("  {} {}", style("Note:").dim(), agent.notes);
        }
        for deliverable in &agent_status.deliverables {
            let marker = if deliverable.present() {
                style("[OK]").green()
            } else {
                style("[--]").dim()
            };
            if deliverable.pattern.contains('*') {
                println!(
                    "  {} {} ({} match{})",
                    marker,
                    deliverable.pattern,
                    deliverable.matches,
                    if deliverable.matches == 1 { "" } else { "es" }
                );
            } else {
                println!("  {} {}", marker, deliverable.pattern);
            }
        }
    }
    println!();
    Ok(())
}
