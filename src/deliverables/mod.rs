//! Deliverable preparation.
//!
//! Makes sure the placeholder documents the agent team works on exist under
//! the project root:
//!
//! ```text
//! <root>/
//! ├── REQUIREMENTS.md
//! ├── AGENT_TASKS.md
//! ├── TEST_PLAN.md
//! └── design/
//!     ├── creative_direction.md
//!     ├── motion_spec.md
//!     └── component_states.md
//! ```
//!
//! Files are created once and never rewritten, so operator edits survive any
//! number of runs.

use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;

use crate::brief::read_brief;
use crate::config::ProjectLayout;
use crate::errors::TeamError;

/// Static description of the files a sync targets.
pub const FILES_PREPARED: &str = "REQUIREMENTS.md, AGENT_TASKS.md, TEST_PLAN.md, design/*";

/// How a deliverable's placeholder body is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Requirements,
    /// Top-level task or plan document with a placeholder heading for `{0}`
    Placeholder(&'static str),
    /// Design document with the given heading
    Design(&'static str),
}

/// One of the fixed output documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deliverable {
    pub relative_path: &'static str,
    pub template: Template,
}

pub const DELIVERABLES: [Deliverable; 6] = [
    Deliverable {
        relative_path: "REQUIREMENTS.md",
        template: Template::Requirements,
    },
    Deliverable {
        relative_path: "AGENT_TASKS.md",
        template: Template::Placeholder("AGENT_TASKS"),
    },
    Deliverable {
        relative_path: "TEST_PLAN.md",
        template: Template::Placeholder("TEST_PLAN"),
    },
    Deliverable {
        relative_path: "design/creative_direction.md",
        template: Template::Design("Creative Direction"),
    },
    Deliverable {
        relative_path: "design/motion_spec.md",
        template: Template::Design("Motion Spec"),
    },
    Deliverable {
        relative_path: "design/component_states.md",
        template: Template::Design("Component States"),
    },
];

/// Report returned by [`sync_deliverables`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepReport {
    pub brief_chars: usize,
    pub design_dir: String,
    pub files_prepared: String,
}

impl Deliverable {
    /// Render the placeholder body for this deliverable.
    ///
    /// The result is trimmed and ends with exactly one newline.
    pub fn placeholder_body(&self, brief_name: &str) -> String {
        let raw = match self.template {
            Template::Requirements => format!(
                "# REQUIREMENTS — from {brief_name}\n\n\
                 See {brief_name} for authoritative direction.\n\n\
                 (Agent will overwrite with current requirements.)"
            ),
            Template::Placeholder(name) => format!(
                "# {name} — placeholder\n\nPopulated by orchestrator using {brief_name}.\n"
            ),
            Template::Design(title) => format!(
                "# {title}\nSource brief: {brief_name}\n\n(Will be refreshed from brief.)"
            ),
        };
        format!("{}\n", raw.trim())
    }
}

/// File name component of the brief path, used as provenance in placeholders.
pub fn brief_display_name(brief_path: &Path) -> String {
    brief_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| brief_path.display().to_string())
}

/// Create `path` with `content` unless it already exists.
///
/// Parent directories are created first. The file is opened create-new, so
/// concurrent callers cannot both write it. Returns `true` if this call
/// created the file.
pub fn ensure_file(path: &Path, content: &str) -> Result<bool, TeamError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| TeamError::io(parent, e))?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            tracing::debug!(path = %path.display(), "Deliverable already exists, leaving untouched");
            return Ok(false);
        }
        Err(e) => return Err(TeamError::io(path, e)),
    };

    file.write_all(content.as_bytes())
        .map_err(|e| TeamError::io(path, e))?;
    tracing::info!(path = %path.display(), "Created placeholder deliverable");
    Ok(true)
}

/// Ensure all six deliverables exist under `layout.root`.
///
/// The brief is read first; a missing brief fails before any file or
/// directory is created.
pub fn sync_deliverables(layout: &ProjectLayout, brief_path: &Path) -> Result<PrepReport, TeamError> {
    let brief = read_brief(brief_path)?;
    let brief_name = brief_display_name(brief_path);

    let mut created = 0usize;
    for deliverable in &DELIVERABLES {
        let path = layout.root.join(deliverable.relative_path);
        if ensure_file(&path, &deliverable.placeholder_body(&brief_name))? {
            created += 1;
        }
    }
    tracing::info!(
        created,
        existing = DELIVERABLES.len() - created,
        "Deliverables synchronized"
    );

    Ok(PrepReport {
        brief_chars: brief.chars().count(),
        design_dir: layout.design_dir.display().to_string(),
        files_prepared: FILES_PREPARED.to_string(),
    })
}
