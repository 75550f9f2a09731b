//! Integration tests for CLI behavior
//!
//! Every run uses a fresh working directory so the default-rule fallback is
//! deterministic, and `DEBUG` is cleared so stderr stays quiet.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

const HYPE_RULE: &str = "@textlint-ja/ai-writing/no-ai-hype-expressions";
const LIST_RULE: &str = "@textlint-ja/ai-writing/no-ai-list-formatting";

/// Helper to create a command for the ai-fix CLI running in `workdir`
fn ai_fix(workdir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ai-fix"));
    cmd.current_dir(workdir).env_remove("DEBUG");
    cmd
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn parse_report(stdout: &[u8]) -> Value {
    serde_json::from_slice(stdout).expect("stdout should be a JSON report")
}

mod builtin_flags {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn help_prints_usage_and_fails() {
        let dir = TempDir::new().unwrap();
        ai_fix(dir.path())
            .arg("--help")
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Usage: ai-fix <file>"));
    }

    #[test]
    fn version_does_not_hide_findings() {
        let dir = TempDir::new().unwrap();
        let assert = ai_fix(dir.path())
            .arg("--version")
            .arg(fixture("ai-like.md"))
            .arg("--json")
            .assert()
            .code(1);

        let report = parse_report(&assert.get_output().stdout);
        assert_eq!(report["issues"].as_array().unwrap().len(), 4);
    }
}

mod usage_and_demo {
    use super::*;

    #[test]
    fn no_arguments_prints_usage_and_fails() {
        let dir = TempDir::new().unwrap();
        ai_fix(dir.path())
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Usage: ai-fix <file>"))
            .stderr(predicate::str::contains("--json"))
            .stderr(predicate::str::contains("--dry").not());
    }

    #[test]
    fn flags_without_file_print_usage() {
        let dir = TempDir::new().unwrap();
        ai_fix(dir.path())
            .arg("--json")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Usage: ai-fix <file>"));
    }

    #[test]
    fn demo_prints_introduction() {
        let dir = TempDir::new().unwrap();
        ai_fix(dir.path())
            .arg("--demo")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("🚀 AI-Writing Fix CLI Demo\n"))
            .stdout(predicate::str::contains("ai-fix draft.md --json > report.json"));
    }

    #[test]
    fn demo_wins_over_a_file() {
        let dir = TempDir::new().unwrap();
        ai_fix(dir.path())
            .arg(fixture("ai-like.md"))
            .arg("--json")
            .arg("--demo")
            .assert()
            .success()
            .stdout(predicate::str::contains("AI-Writing Fix CLI Demo"));
    }
}

mod json_mode {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reports_issues_as_json() {
        let dir = TempDir::new().unwrap();
        let target = fixture("ai-like.md");

        let assert = ai_fix(dir.path())
            .arg(&target)
            .arg("--json")
            .assert()
            .code(1)
            .stderr(predicate::str::is_empty());

        let report = parse_report(&assert.get_output().stdout);
        assert_eq!(report["file"], target.to_string_lossy().into_owned());

        let issues = report["issues"].as_array().unwrap();
        assert_eq!(issues.len(), 4);

        let rules: Vec<&str> = issues.iter().map(|i| i["rule"].as_str().unwrap()).collect();
        assert!(rules.contains(&HYPE_RULE));
        assert!(rules.contains(&LIST_RULE));

        let first = &issues[0];
        assert_eq!(first["line"], 3);
        assert_eq!(first["column"], 4);
        assert_eq!(first["rule"], HYPE_RULE);
        assert_eq!(first["before"], "革命的");
        assert_eq!(first["after"], Value::Null);

        assert_eq!(issues[1]["before"], "🚀");
        assert_eq!(issues[1]["line"], 5);

        let last = &issues[3];
        assert_eq!(last["line"], 8);
        assert_eq!(last["column"], 10);
        assert_eq!(last["before"], "です：");
        assert_eq!(last["after"], "です。");
    }

    #[test]
    fn report_has_only_file_and_issues() {
        let dir = TempDir::new().unwrap();
        let assert = ai_fix(dir.path())
            .arg(fixture("clean.md"))
            .arg("--json")
            .assert()
            .success()
            .stderr(predicate::str::is_empty());

        let report = parse_report(&assert.get_output().stdout);
        let keys: Vec<&String> = report.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["file", "issues"]);
        assert_eq!(report["issues"], Value::Array(Vec::new()));
    }

    #[test]
    fn relative_paths_are_reported_absolute() {
        let dir = TempDir::new().unwrap();
        fs::copy(fixture("ai-like.md"), dir.path().join("draft.md")).unwrap();

        let assert = ai_fix(dir.path())
            .arg("draft.md")
            .arg("--json")
            .assert()
            .code(1);

        let report = parse_report(&assert.get_output().stdout);
        let expected = dir.path().canonicalize().unwrap().join("draft.md");
        assert_eq!(report["file"], expected.to_string_lossy().into_owned());
    }

    #[test]
    fn unknown_flags_are_ignored() {
        let dir = TempDir::new().unwrap();
        ai_fix(dir.path())
            .arg(fixture("clean.md"))
            .arg("--json")
            .arg("--dry")
            .arg("--whatever")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("{"));
    }
}

mod text_mode {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lists_issues_with_default_rules() {
        let dir = TempDir::new().unwrap();
        let target = fixture("ai-like.md");

        ai_fix(dir.path())
            .arg(&target)
            .assert()
            .code(1)
            .stdout(predicate::str::starts_with(
                "ℹ️  Using default AI-writing detection rules (no .textlintrc found)\n\n",
            ))
            .stdout(predicate::str::contains(format!(
                "Found 4 issue(s) in {}:\n\n1. Line 3: ",
                target.display()
            )))
            .stdout(predicate::str::contains(format!("   Rule: {HYPE_RULE}\n")))
            .stdout(predicate::str::contains(
                "Note: These rules detect AI-like patterns but do not provide automatic fixes.",
            ))
            .stdout(predicate::str::ends_with(
                "\nTip: Create a .textlintrc file to customize rules or add more checks.\n",
            ));
    }

    #[test]
    fn clean_file_succeeds() {
        let dir = TempDir::new().unwrap();
        let target = fixture("clean.md");

        ai_fix(dir.path())
            .arg(&target)
            .assert()
            .success()
            .stdout(predicate::str::contains(format!(
                "✅ No AI-like issues found in: {}\n   (Using default detection rules - create .textlintrc for more options)\n",
                target.display()
            )));
    }

    #[test]
    fn target_file_is_not_modified() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("draft.md");
        fs::copy(fixture("ai-like.md"), &target).unwrap();
        let before = fs::read(&target).unwrap();

        ai_fix(dir.path()).arg(&target).assert().code(1);
        ai_fix(dir.path()).arg(&target).arg("--json").assert().code(1);

        assert_eq!(fs::read(&target).unwrap(), before);
    }

    #[test]
    fn repeated_runs_give_identical_reports() {
        let dir = TempDir::new().unwrap();
        let target = fixture("ai-like.md");

        let first = ai_fix(dir.path()).arg(&target).arg("--json").assert().code(1);
        let second = ai_fix(dir.path()).arg(&target).arg("--json").assert().code(1);

        assert_eq!(
            String::from_utf8_lossy(&first.get_output().stdout),
            String::from_utf8_lossy(&second.get_output().stdout)
        );
    }
}

mod configuration {
    use super::*;

    #[test]
    fn local_config_suppresses_banner_and_is_honoured() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(".textlintrc"),
            r#"{
  // keep the preset, but without list checks
  "rules": {
    "@textlint-ja/preset-ai-writing": { "no-ai-list-formatting": false }
  }
}"#,
        )
        .unwrap();

        ai_fix(dir.path())
            .arg(fixture("ai-like.md"))
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Using default").not())
            .stdout(predicate::str::contains("Tip:").not())
            .stdout(predicate::str::contains("Found 2 issue(s)"));

        let assert = ai_fix(dir.path())
            .arg(fixture("ai-like.md"))
            .arg("--json")
            .assert()
            .code(1);
        let report = parse_report(&assert.get_output().stdout);
        let issues = report["issues"].as_array().unwrap();
        assert!(issues.iter().all(|i| i["rule"] != LIST_RULE));
    }

    #[test]
    fn invalid_local_config_is_fatal() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".textlintrc"), r#"{ "rules": 42 }"#).unwrap();

        ai_fix(dir.path())
            .arg(fixture("ai-like.md"))
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::starts_with("Error: "));
    }

    #[test]
    fn temporary_default_config_is_removed() {
        let dir = TempDir::new().unwrap();
        let tmp = TempDir::new().unwrap();

        ai_fix(dir.path())
            .env("TMPDIR", tmp.path())
            .arg(fixture("ai-like.md"))
            .arg("--json")
            .assert()
            .code(1);

        let leftovers: Vec<_> = fs::read_dir(tmp.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name().to_string_lossy().starts_with("textlintrc-"))
            .collect();
        assert!(leftovers.is_empty());
    }
}

mod errors {
    use super::*;

    #[test]
    fn missing_file_reports_absolute_path() {
        let dir = TempDir::new().unwrap();
        let expected = dir.path().canonicalize().unwrap().join("missing.md");

        ai_fix(dir.path())
            .arg("missing.md")
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(format!("Error: File not found: {}\n", expected.display()));
    }

    #[test]
    fn debug_adds_details_after_the_error_line() {
        let dir = TempDir::new().unwrap();
        let assert = ai_fix(dir.path())
            .env("DEBUG", "1")
            .arg("missing.md")
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty());

        let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
        let error_line = stderr
            .lines()
            .position(|line| line.starts_with("Error: File not found: "))
            .expect("stderr should carry the error line");
        assert!(stderr.lines().count() > error_line + 1);
    }

    #[test]
    fn missing_file_in_json_mode_prints_no_report() {
        let dir = TempDir::new().unwrap();

        ai_fix(dir.path())
            .arg("missing.md")
            .arg("--json")
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::starts_with("Error: File not found: "));
    }
}
