//! The fixed agent roster.
//!
//! Six descriptive entries, one per role in the documentation and
//! implementation workflow. Nothing dispatches on them; they are reported in
//! the orchestration summary and by `agent-team agents`.

use serde::Serialize;
use std::path::Path;

/// A named role and the deliverables it owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgentSpec {
    pub name: &'static str,
    pub role: &'static str,
    /// File paths or glob patterns, optionally followed by a parenthesized note
    pub deliverables: &'static [&'static str],
    #[serde(skip_serializing_if = "str::is_empty")]
    pub notes: &'static str,
}

pub const AGENTS: [AgentSpec; 6] = [
    AgentSpec {
        name: "Project Manager",
        role: "Gate, enforce DESIGN_BRIEF.md, orchestrate outputs, ensure reduced-motion and security guardrails.",
        deliverables: &["REQUIREMENTS.md", "AGENT_TASKS.md", "TEST_PLAN.md"],
        notes: "Inject brief path into every sub-agent prompt.",
    },
    AgentSpec {
        name: "Creative Director",
        role: "Interpret the brief into visual direction, palette, and tone.",
        deliverables: &["design/creative_direction.md"],
        notes: "",
    },
    AgentSpec {
        name: "UI/Motion Designer",
        role: "Translate brief into motion and component states with reduced-motion fallbacks.",
        deliverables: &["design/motion_spec.md", "design/component_states.md"],
        notes: "",
    },
    AgentSpec {
        name: "Frontend Engineer",
        role: "Implement UI/motion in existing frontend; remove redundant timer; enforce tool quotas; clear tooltips/ARIA; chat clarity; resign control.",
        deliverables: &["index.html", "app.js", "styles.css"],
        notes: "",
    },
    AgentSpec {
        name: "Firebase Backend Engineer",
        role: "Validate RTDB/Firestore rules, functions, and stats writes. Ensure DM threads/participants rules allow participants only.",
        deliverables: &[
            "firebase/firestore.rules",
            "firebase/database.rules.json",
            "functions/src/*.ts",
        ],
        notes: "",
    },
    AgentSpec {
        name: "QA + Accessibility",
        role: "Write/refresh test plan (Playwright smoke + a11y + reduced-motion).",
        deliverables: &["TEST_PLAN.md", "tests/playwright/* (optional extensions)"],
        notes: "",
    },
];

/// Agent names in roster order.
pub fn agent_names() -> Vec<&'static str> {
    AGENTS.iter().map(|a| a.name).collect()
}

/// On-disk state of one roster deliverable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliverableStatus {
    pub pattern: String,
    /// Number of matching files; 0 or 1 for plain paths
    pub matches: usize,
}

impl DeliverableStatus {
    pub fn present(&self) -> bool {
        self.matches > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentStatus {
    pub name: &'static str,
    pub deliverables: Vec<DeliverableStatus>,
}

/// Strip a trailing parenthesized annotation, e.g. `tests/* (optional)` -> `tests/*`.
fn deliverable_pattern(entry: &str) -> &str {
    match entry.find(" (") {
        Some(idx) if entry.trim_end().ends_with(')') => entry[..idx].trim(),
        _ => entry.trim(),
    }
}

fn count_matches(root: &Path, pattern: &str) -> usize {
    if !pattern.contains(['*', '?', '[']) {
        return usize::from(root.join(pattern).exists());
    }
    // Only the deliverable pattern is a glob; the root is matched literally.
    let escaped = format!(
        "{}/{}",
        glob::Pattern::escape(&root.to_string_lossy()),
        pattern
    );
    match glob::glob(&escaped) {
        Ok(paths) => paths.filter_map(|entry| entry.ok()).count(),
        Err(e) => {
            tracing::warn!(pattern, error = %e, "Invalid deliverable pattern");
            0
        }
    }
}

/// Check every agent's deliverables against `root`.
pub fn deliverable_status(root: &Path) -> Vec<AgentStatus> {
    AGENTS
        .iter()
        .map(|agent| AgentStatus {
            name: agent.name,
            deliverables: agent
                .deliverables
                .iter()
                .map(|entry| {
                    let pattern = deliverable_pattern(entry);
                    DeliverableStatus {
                        pattern: pattern.to_string(),
                        matches: count_matches(root, pattern),
                    }
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_roster_has_six_agents_in_order() {
        assert_eq!(
            agent_names(),
            vec![
                "Project Manager",
                "Creative Director",
                "UI/Motion Designer",
                "Frontend Engineer",
                "Firebase Backend Engineer",
                "QA + Accessibility",
            ]
        );
    }

    #[test]
    fn test_every_agent_has_role_and_deliverables() {
        for agent in &AGENTS {
            assert!(!agent.role.is_empty(), "{} has no role", agent.name);
            assert!(!agent.deliverables.is_empty(), "{} has no deliverables", agent.name);
        }
    }

    #[test]
    fn test_only_project_manager_has_notes() {
        let with_notes: Vec<_> = AGENTS.iter().filter(|a| !a.notes.is_empty()).collect();
        assert_eq!(with_notes.len(), 1);
        assert_eq!(with_notes[0].name, "Project Manager");
    }

    #[test]
    fn test_serialize_skips_empty_notes() {
        let json = serde_json::to_value(AGENTS[1]).unwrap();
        assert!(json.get("notes").is_none());
        assert_eq!(json["deliverables"][0], "design/creative_direction.md");

        let json = serde_json::to_value(AGENTS[0]).unwrap();
        assert_eq!(json["notes"], "Inject brief path into every sub-agent prompt.");
    }

    #[test]
    fn test_deliverable_pattern_strips_annotation() {
        assert_eq!(
            deliverable_pattern("tests/playwright/* (optional extensions)"),
            "tests/playwright/*"
        );
        assert_eq!(deliverable_pattern("functions/src/*.ts"), "functions/src/*.ts");
    }

    #[test]
    fn test_deliverable_status_counts_paths_and_globs() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("app.js"), "").unwrap();
        std::fs::create_dir_all(dir.path().join("functions/src")).unwrap();
        std::fs::write(dir.path().join("functions/src/api.ts"), "").unwrap();
        std::fs::write(dir.path().join("functions/src/mail.ts"), "").unwrap();

        let status = deliverable_status(dir.path());
        assert_eq!(status.len(), 6);

        let frontend = status.iter().find(|s| s.name == "Frontend Engineer").unwrap();
        let app = frontend.deliverables.iter().find(|d| d.pattern == "app.js").unwrap();
        assert!(app.present());
        let styles = frontend.deliverables.iter().find(|d| d.pattern == "styles.css").unwrap();
        assert!(!styles.present());

        let backend = status
            .iter()
            .find(|s| s.name == "Firebase Backend Engineer")
            .unwrap();
        let functions = backend
            .deliverables
            .iter()
            .find(|d| d.pattern == "functions/src/*.ts")
            .unwrap();
        assert_eq!(functions.matches, 2);
    }

    #[test]
    fn test_deliverable_status_with_glob_characters_in_root() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("proj[1]");
        std::fs::create_dir_all(root.join("functions/src")).unwrap();
        std::fs::write(root.join("functions/src/a.ts"), "").unwrap();
        std::fs::write(root.join("index.html"), "").unwrap();

        let status = deliverable_status(&root);
        let backend = status
            .iter()
            .find(|s| s.name == "Firebase Backend Engineer")
            .unwrap();
        let functions = backend
            .deliverables
            .iter()
            .find(|d| d.pattern == "functions/src/*.ts")
            .unwrap();
        assert_eq!(functions.matches, 1);

        let frontend = status.iter().find(|s| s.name == "Frontend Engineer").unwrap();
        assert!(frontend.deliverables[0].present());
    }
}
