use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::team_config::TeamToml;

/// Name of the subdirectory holding the design deliverables.
pub const DESIGN_DIR: &str = "design";

/// Filesystem locations agent-team reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub root: PathBuf,
    /// Default brief used when a caller does not override it
    pub brief: PathBuf,
    pub design_dir: PathBuf,
}

impl ProjectLayout {
    /// Build a layout from an already-resolved root and brief path.
    pub fn new(root: impl Into<PathBuf>, brief: impl AsRef<Path>) -> Self {
        let root = root.into();
        let brief = resolve_against(&root, brief.as_ref());
        let design_dir = root.join(DESIGN_DIR);
        Self {
            root,
            brief,
            design_dir,
        }
    }

    /// Resolve a caller-supplied brief path. Relative paths are taken from the root.
    pub fn resolve_brief(&self, path: impl AsRef<Path>) -> PathBuf {
        resolve_against(&self.root, path.as_ref())
    }
}

fn resolve_against(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Runtime configuration.
///
/// Combines the project layout with server settings after file and
/// environment layering. CLI flags are applied by the commands on top.
#[derive(Debug, Clone)]
pub struct Config {
    pub layout: ProjectLayout,
    pub host: String,
    pub port: u16,
    /// Warnings from validating the loaded settings
    pub warnings: Vec<String>,
}

impl Config {
    /// Load configuration for `project_dir` using the process environment.
    pub fn new(project_dir: &Path) -> Result<Self> {
        Self::with_env(project_dir, |key| std::env::var(key).ok())
    }

    /// Load configuration for `project_dir`, reading variables through `lookup`.
    pub fn with_env<F>(project_dir: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let root = project_dir
            .canonicalize()
            .with_context(|| format!("Failed to resolve project directory: {}", project_dir.display()))?;

        let toml = TeamToml::load_or_default(&root)?.apply_env(lookup)?;
        let warnings = toml.validate();
        let layout = ProjectLayout::new(root, &toml.brief.path);

        Ok(Self {
            layout,
            host: toml.server.host,
            port: toml.server.port,
            warnings,
        })
    }
}
