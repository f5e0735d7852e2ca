//! Integration tests for the lintrc CLI
//!
//! These tests verify the CLI behavior end-to-end

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Helper function to create a test CLI command
#[allow(deprecated)]
fn cli() -> Command {
    let mut cmd = Command::cargo_bin("lintrc").unwrap();
    cmd.arg("--no-color").env_remove("RUST_LOG");
    cmd
}

/// Helper function to create a project with the Vue + Prettier configuration
fn create_test_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();

    let config_content = r#"{
  "root": true,
  "env": { "node": true, "browser": true },
  "plugins": ["vue", "prettier"],
  "extends": [
    "eslint:recommended",
    "plugin:vue/vue3-essential",
    // Make sure this is the last element in the array
    "plugin:prettier/recommended"
  ],
  "rules": {
    "linebreak-style": ["error", "windows"],
    "prettier/prettier": ["error", { "endOfLine": "auto" }]
  }
}
"#;

    fs::write(temp_dir.path().join(".lintrc.jsonc"), config_content).unwrap();
    temp_dir
}

#[test]
fn test_help_command() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("lintrc resolves lint configurations"))
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn test_version_command() {
    cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(VERSION));
}

#[test]
fn test_version_detailed() {
    cli()
        .args(["version", "--detailed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Build information:"));
}

#[test]
fn test_resolve_human() {
    let project = create_test_project();

    cli()
        .current_dir(project.path())
        .arg("resolve")
        .assert()
        .success()
        .stdout(predicate::str::contains("plugin:prettier/recommended"))
        .stdout(predicate::str::contains("vue-eslint-parser"))
        .stdout(predicate::str::contains("linebreak-style"));
}

#[test]
fn test_resolve_json() {
    let project = create_test_project();

    let output = cli()
        .current_dir(project.path())
        .args(["resolve", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let resolved: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        resolved["rules"]["linebreak-style"],
        serde_json::json!(["error", "windows"])
    );
    assert_eq!(resolved["rules"]["no-debugger"], "error");
    assert_eq!(resolved["parser"]["name"], "vue-eslint-parser");
    assert_eq!(resolved["plugins"], serde_json::json!(["prettier", "vue"]));
}

#[test]
fn test_resolve_single_rule() {
    let project = create_test_project();

    cli()
        .current_dir(project.path())
        .args(["resolve", "--rule", "linebreak-style"])
        .assert()
        .success()
        .stdout(predicate::str::contains("linebreak-style: error [\"windows\"]"));
}

#[test]
fn test_resolve_unset_rule_toml() {
    let project = create_test_project();

    cli()
        .current_dir(project.path())
        .args(["resolve", "--format", "toml", "--rule", "no-such-rule"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    cli()
        .current_dir(project.path())
        .args(["resolve", "--format", "toml", "--rule", "linebreak-style"])
        .assert()
        .success()
        .stdout(predicate::str::contains("linebreak-style"));
}

#[test]
fn test_resolve_human_line_ending() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".lintrc.json"),
        r#"{ "root": true, "formatting": { "lineEnding": "windows" } }"#,
    )
    .unwrap();

    cli()
        .current_dir(temp_dir.path())
        .arg("resolve")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"Line ending: "\r\n""#));
}

#[test]
fn test_resolve_error_reported_on_stderr() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".lintrc.json"),
        r#"{ "root": true, "extends": ["airbnb"] }"#,
    )
    .unwrap();

    cli()
        .current_dir(temp_dir.path())
        .arg("resolve")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("lintrc failed"))
        .stderr(predicate::str::contains("Preset 'airbnb' could not be resolved"));
}

#[test]
fn test_resolve_with_explicit_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("custom.yaml");
    fs::write(&config_path, "root: true\nrules:\n  no-console: 1\n").unwrap();

    cli()
        .args(["resolve", "--format", "yaml", "--config"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("no-console: warn"));
}

#[test]
fn test_resolve_undeclared_plugin_fails() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".lintrc.json"),
        r#"{ "root": true, "extends": ["plugin:vue/vue3-essential"] }"#,
    )
    .unwrap();

    cli()
        .current_dir(temp_dir.path())
        .arg("resolve")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Plugin 'vue' referenced by 'plugin:vue/vue3-essential' is not declared",
        ));
}

#[test]
fn test_resolve_unknown_env_can_be_ignored() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".lintrc.json"),
        r#"{ "root": true, "env": { "deno": true } }"#,
    )
    .unwrap();

    cli()
        .current_dir(temp_dir.path())
        .arg("resolve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown environment 'deno'"));

    cli()
        .current_dir(temp_dir.path())
        .args(["resolve", "--ignore-unknown-env"])
        .assert()
        .success();
}

#[test]
fn test_validate_multiple_files() {
    let project = create_test_project();
    let broken = project.path().join("broken.json");
    fs::write(&broken, r#"{ "rules": { "semi": "fatal" } }"#).unwrap();

    cli()
        .arg("validate")
        .arg(project.path().join(".lintrc.jsonc"))
        .arg(&broken)
        .assert()
        .failure()
        .stdout(predicate::str::contains("✓"))
        .stdout(predicate::str::contains("Invalid severity for rule 'semi'"))
        .stderr(predicate::str::contains(
            "1 of 2 configurations failed validation",
        ));
}

#[test]
fn test_validate_directory() {
    let project = create_test_project();

    cli()
        .arg("validate")
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("presets"));
}

#[test]
fn test_presets_list() {
    cli()
        .args(["presets", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("eslint:recommended"))
        .stdout(predicate::str::contains("plugin:vue/vue3-essential"))
        .stdout(predicate::str::contains("plugin:prettier/recommended"));
}

#[test]
fn test_presets_list_detailed_shows_plugins() {
    cli()
        .args(["presets", "list", "--detailed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plugins:"))
        .stdout(predicate::str::contains("vue - Rules for Vue single-file components"))
        .stdout(predicate::str::contains("prettier - Runs Prettier as a lint rule (1 rules"));
}

#[test]
fn test_presets_show() {
    cli()
        .args(["presets", "show", "plugin:prettier/recommended"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"prettier/prettier\": \"error\""));
}

#[test]
fn test_presets_show_unknown() {
    cli()
        .args(["presets", "show", "airbnb"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Preset 'airbnb' could not be resolved"));
}

#[test]
fn test_envs_with_globals() {
    cli()
        .args(["envs", "--globals"])
        .assert()
        .success()
        .stdout(predicate::str::contains("browser"))
        .stdout(predicate::str::contains("exports (writable)"));
}

#[test]
fn test_config_init_and_resolve() {
    let temp_dir = TempDir::new().unwrap();

    cli()
        .current_dir(temp_dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    assert!(temp_dir.path().join(".lintrc.json").exists());

    cli()
        .current_dir(temp_dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    cli()
        .current_dir(temp_dir.path())
        .args(["validate", ".lintrc.json"])
        .assert()
        .success();
}

#[test]
fn test_config_init_toml() {
    let temp_dir = TempDir::new().unwrap();

    cli()
        .current_dir(temp_dir.path())
        .args(["config", "init", "--format", "toml"])
        .assert()
        .success();

    let content = fs::read_to_string(temp_dir.path().join(".lintrc.toml")).unwrap();
    assert!(content.contains("eslint:recommended"));
}

#[test]
fn test_config_schema() {
    let temp_dir = TempDir::new().unwrap();
    let schema_path = temp_dir.path().join("schema/lintrc.json");

    cli()
        .args(["config", "schema", "--output"])
        .arg(&schema_path)
        .assert()
        .success();

    let schema: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&schema_path).unwrap()).unwrap();
    assert_eq!(schema["title"], "lintrc configuration");
    assert!(schema["properties"]["extends"].is_object());
}

#[test]
fn test_generate_completion() {
    cli()
        .args(["--generate-completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lintrc"));
}
