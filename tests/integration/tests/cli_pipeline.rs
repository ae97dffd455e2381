//! Integration tests for the textsplice binary
//!
//! Runs the built binary against document fixtures.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn textsplice_cmd() -> Command {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("Failed to find workspace root");
    let bin_path = workspace_root.join("target/debug/textsplice");
    Command::new(bin_path)
}

mod apply_config {
    use super::*;

    #[test]
    fn rewrites_article_with_rule_file() {
        let temp = tempfile::tempdir().unwrap();

        let output = textsplice_cmd()
            .current_dir(temp.path())
            .arg("apply")
            .arg(fixtures_dir().join("article.json"))
            .arg("--config")
            .arg(fixtures_dir().join("typos.jsonc"))
            .output()
            .unwrap();

        assert!(output.status.success());
        let tree: textsplice_ast::Node = serde_json::from_slice(&output.stdout).unwrap();
        let body = tree.get(&[2]).map(textsplice_ast::Node::text_content).unwrap();
        assert_eq!(body, "the color of the skylet colour = teh;");
    }

    #[test]
    fn check_mode_does_not_write() {
        let temp = tempfile::tempdir().unwrap();
        let out = temp.path().join("out.json");

        textsplice_cmd()
            .current_dir(temp.path())
            .arg("apply")
            .arg(fixtures_dir().join("article.json"))
            .arg("--config")
            .arg(fixtures_dir().join("typos.jsonc"))
            .arg("--output")
            .arg(&out)
            .arg("--check")
            .assert()
            .code(1);

        assert!(!out.exists());
    }

    #[test]
    fn verbose_logs_each_pass() {
        let temp = tempfile::tempdir().unwrap();

        textsplice_cmd()
            .current_dir(temp.path())
            .arg("--verbose")
            .arg("apply")
            .arg(fixtures_dir().join("article.json"))
            .arg("--config")
            .arg(fixtures_dir().join("typos.jsonc"))
            .assert()
            .success()
            .stderr(predicate::str::contains("Starting pass"))
            .stderr(predicate::str::contains("Finished pass"));
    }
}
