//! Integration tests for the agent-team binary.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const DELIVERABLES: [&str; 6] = [
    "REQUIREMENTS.md",
    "AGENT_TASKS.md",
    "TEST_PLAN.md",
    "design/creative_direction.md",
    "design/motion_spec.md",
    "design/component_states.md",
];

/// Helper to create an agent-team Command
fn agent_team() -> Command {
    let mut cmd = cargo_bin_cmd!("agent-team");
    cmd.env_remove("AGENT_TEAM_BRIEF")
        .env_remove("AGENT_TEAM_HOST")
        .env_remove("AGENT_TEAM_PORT")
        .env_remove("RUST_LOG");
    cmd
}

/// Helper to create a project directory with a design brief
fn project_with_brief(content: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("DESIGN_BRIEF.md"), content).unwrap();
    dir
}

fn run_in(dir: &TempDir) -> assert_cmd::assert::Assert {
    agent_team()
        .arg("--project-dir")
        .arg(dir.path())
        .arg("run")
        .assert()
}

fn snapshot(dir: &TempDir) -> Vec<String> {
    DELIVERABLES
        .iter()
        .map(|p| fs::read_to_string(dir.path().join(p)).unwrap())
        .collect()
}

// =============================================================================
// Basic CLI Tests
// =============================================================================

mod cli_basics {
    use super::*;

    #[test]
    fn test_help() {
        agent_team().arg("--help").assert().success();
    }

    #[test]
    fn test_version() {
        agent_team().arg("--version").assert().success();
    }

    #[test]
    fn test_agents_lists_roster() {
        let dir = TempDir::new().unwrap();
        agent_team()
            .arg("--project-dir")
            .arg(dir.path())
            .arg("agents")
            .assert()
            .success()
            .stdout(predicate::str::contains("Project Manager"))
            .stdout(predicate::str::contains("QA + Accessibility"));
    }

    #[test]
    fn test_agents_json_has_six_entries() {
        let output = agent_team().args(["agents", "--json"]).output().unwrap();
        assert!(output.status.success());
        let roster: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(roster.len(), 6);
        assert_eq!(roster[3]["name"], "Frontend Engineer");
    }

    #[test]
    fn test_init_config_creates_file_once() {
        let dir = TempDir::new().unwrap();
        agent_team()
            .current_dir(dir.path())
            .arg("init-config")
            .assert()
            .success()
            .stdout(predicate::str::contains("Created"));
        assert!(dir.path().join("agent-team.toml").exists());

        agent_team()
            .current_dir(dir.path())
            .arg("init-config")
            .assert()
            .success()
            .stdout(predicate::str::contains("already exists"));
    }
}

// =============================================================================
// Run Tests
// =============================================================================

mod run {
    use super::*;

    #[test]
    fn test_run_creates_deliverables_and_prints_summary() {
        let dir = project_with_brief("Hello");
        let output = agent_team()
            .arg("--project-dir")
            .arg(dir.path())
            .args(["run", "--task", "demo"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(summary["task"], "demo");
        assert_eq!(summary["prep"]["brief_chars"], 5);
        assert_eq!(summary["agents"].as_array().unwrap().len(), 6);
        assert_eq!(summary["mcp"]["command"], "npx");

        let design_dir = dir.path().canonicalize().unwrap().join("design");
        assert_eq!(summary["prep"]["design_dir"], design_dir.display().to_string());

        for path in DELIVERABLES {
            assert!(dir.path().join(path).is_file(), "{} missing", path);
        }
    }

    #[test]
    fn test_run_uses_default_task() {
        let dir = project_with_brief("Hello");
        run_in(&dir).success().stdout(predicate::str::contains(
            "Implement the existing design brief in this repo",
        ));
    }

    #[test]
    fn test_run_twice_is_idempotent() {
        let dir = project_with_brief("Hello");
        run_in(&dir).success();
        let first = snapshot(&dir);

        run_in(&dir).success();
        assert_eq!(snapshot(&dir), first);
    }

    #[test]
    fn test_run_keeps_prepopulated_files() {
        let dir = project_with_brief("Hello");
        fs::write(dir.path().join("TEST_PLAN.md"), "my plan").unwrap();

        run_in(&dir).success();
        run_in(&dir).success();
        assert_eq!(
            fs::read_to_string(dir.path().join("TEST_PLAN.md")).unwrap(),
            "my plan"
        );
    }

    #[test]
    fn test_run_missing_brief_fails_without_creating_files() {
        let dir = TempDir::new().unwrap();
        run_in(&dir)
            .failure()
            .stderr(predicate::str::contains("Brief not found"));

        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_run_with_brief_override() {
        let dir = TempDir::new().unwrap();
        let brief = dir.path().join("ALT_BRIEF.md");
        fs::write(&brief, "abc").unwrap();

        agent_team()
            .arg("--project-dir")
            .arg(dir.path())
            .arg("run")
            .arg("--brief")
            .arg(&brief)
            .assert()
            .success()
            .stdout(predicate::str::contains("\"brief_chars\": 3"));

        let requirements = fs::read_to_string(dir.path().join("REQUIREMENTS.md")).unwrap();
        assert!(requirements.contains("from ALT_BRIEF.md"));
    }

    #[test]
    fn test_run_brief_from_config_file() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs/brief.md"), "from config").unwrap();
        fs::write(
            dir.path().join("agent-team.toml"),
            "[brief]\npath = \"docs/brief.md\"\n",
        )
        .unwrap();

        run_in(&dir)
            .success()
            .stdout(predicate::str::contains("\"brief_chars\": 11"));
    }

    #[test]
    fn test_prompt_api_key_without_tty_is_ignored() {
        let dir = project_with_brief("Hello");
        agent_team()
            .arg("--project-dir")
            .arg(dir.path())
            .args(["run", "--prompt-api-key"])
            .env_remove("OPENAI_API_KEY")
            .write_stdin("")
            .assert()
            .success();
        assert!(dir.path().join("REQUIREMENTS.md").exists());
    }
}
