use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cmd;

/// Task used when `run` is invoked without `--task`.
const DEFAULT_TASK: &str = "Implement the existing design brief in this repo";

#[derive(Parser)]
#[command(name = "agent-team")]
#[command(version, about = "Prepare agent team deliverables from a design brief")]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root holding the brief and deliverables (defaults to the current directory)
    #[arg(long, global = true)]
    pub project_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sync deliverables and print the orchestration summary as JSON
    Run {
        /// Task description for the agent team
        #[arg(long, default_value = DEFAULT_TASK)]
        task: String,

        /// Path to the design brief (defaults to the configured brief)
        #[arg(long)]
        brief: Option<PathBuf>,

        /// Prompt for OPENAI_API_KEY if it is not set (not saved to disk)
        #[arg(long)]
        prompt_api_key: bool,
    },
    /// Serve the run endpoint over HTTP
    Serve {
        /// Interface to bind (overrides agent-team.toml)
        #[arg(long)]
        host: Option<String>,

        /// Port to serve on (overrides agent-team.toml)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// List the agent roster and the state of each agent's deliverables
    Agents {
        /// Print the roster as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a default agent-team.toml
    InitConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    agent_team::logging::init(cli.verbose);

    let project_dir = match cli.project_dir.clone() {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to get current directory")?,
    };

    match &cli.command {
        Commands::Run {
            task,
            brief,
            prompt_api_key,
        } => {
            cmd::cmd_run(
                &project_dir,
                task,
                brief.as_deref(),
                *prompt_api_key,
            )?;
        }
        Commands::Serve { host, port } => {
            cmd::cmd_serve(&project_dir, host.clone(), *port).await?;
        }
        Commands::Agents { json } => cmd::cmd_agents(&project_dir, *json)?,
        Commands::InitConfig => cmd::cmd_init_config(&project_dir)?,
    }

    Ok(())
}
