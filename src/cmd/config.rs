//! Configuration file command (`agent-team init-config`).

use anyhow::Result;
use std::path::Path;

use agent_team::team_config::{CONFIG_FILE, TeamToml};

pub fn cmd_init_config(project_dir: &Path) -> Result<()> {
    let config_path = project_dir.join(CONFIG_FILE);

    if config_path.exists() {
        println!("{} already exists at {}", CONFIG_FILE, config_path.display());
        let toml = TeamToml::load(&config_path)?;
        let warnings = toml.validate();
        if warnings.is_empty() {
            println!("No configuration warnings.");
        } else {
            for warning in &warnings {
                println!("  warning: {}", warning);
            }
        }
        return Ok(());
    }

    TeamToml::default().save(&config_path)?;
    println!("Created {}", config_path.display());
    Ok(())
}
