//! File and environment configuration for agent-team.
//!
//! Settings are read from an optional `agent-team.toml` at the project root and
//! can be overridden by environment variables, then by CLI flags.
//!
//! # Configuration File Format
//!
//! ```toml
//! [brief]
//! path = "DESIGN_BRIEF.md"
//!
//! [server]
//! host = "127.0.0.1"
//! port = 8000
//! ```
//!
//! | Variable           | Overrides       |
//! |--------------------|-----------------|
//! | `AGENT_TEAM_BRIEF` | `brief.path`    |
//! | `AGENT_TEAM_HOST`  | `server.host`   |
//! | `AGENT_TEAM_PORT`  | `server.port`   |

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the configuration file looked up in the project root.
pub const CONFIG_FILE: &str = "agent-team.toml";

/// Default brief file name, relative to the project root.
pub const DEFAULT_BRIEF: &str = "DESIGN_BRIEF.md";

pub const ENV_BRIEF: &str = "AGENT_TEAM_BRIEF";
pub const ENV_HOST: &str = "AGENT_TEAM_HOST";
pub const ENV_PORT: &str = "AGENT_TEAM_PORT";

/// Brief location settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BriefConfig {
    /// Path to the design brief, relative to the project root unless absolute
    #[serde(default = "default_brief_path")]
    pub path: String,
}

fn default_brief_path() -> String {
    DEFAULT_BRIEF.to_string()
}

impl Default for BriefConfig {
    fn default() -> Self {
        Self {
            path: default_brief_path(),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Contents of `agent-team.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TeamToml {
    #[serde(default)]
    pub brief: BriefConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl TeamToml {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse agent-team.toml")
    }

    /// Load `agent-team.toml` from the project root, or defaults when it is absent.
    pub fn load_or_default(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(CONFIG_FILE);
        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize agent-team.toml")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Apply environment overrides using `lookup` to read variables.
    ///
    /// Empty values are ignored. An unparsable port is an error rather than a
    /// silent fallback.
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(brief) = non_empty(ENV_BRIEF) {
            self.brief.path = brief;
        }
        if let Some(host) = non_empty(ENV_HOST) {
            self.server.host = host;
        }
        if let Some(port) = non_empty(ENV_PORT) {
            self.server.port = port
                .trim()
                .parse::<u16>()
                .with_context(|| format!("{} must be a port number, got '{}'", ENV_PORT, port))?;
        }
        Ok(self)
    }

    /// Return human-readable warnings about questionable settings.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.brief.path.trim().is_empty() {
            warnings.push("brief.path is empty; the default DESIGN_BRIEF.md will not be used".into());
        }
        if self.server.host.trim().is_empty() {
            warnings.push("server.host is empty".into());
        }
        if self.server.port == 0 {
            warnings.push("server.port is 0; the OS will pick a random port".into());
        }
        warnings
    }
}
