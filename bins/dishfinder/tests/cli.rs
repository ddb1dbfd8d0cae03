//! End-to-end tests for the dishfinder binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const CATALOG: &str = r#"{
    "stir fry": {"calories": 320.5, "fat": 12, "protein": 21, "sugar": 8.1, "carbs": 30.2},
    "stir-fry noodles": {"calories": 410, "fat": 14, "protein": 15, "sugar": 9, "carbs": 55},
    "pizza": {"calories": 285, "fat": 10.4, "protein": 12.2, "sugar": 3.6, "carbs": 35.7}
}"#;

const BROKEN_CATALOG: &str = r#"{
    "pizza": {"calories": 285, "fat": 10.4, "protein": 12.2, "sugar": 3.6, "carbs": 35.7},
    "mystery stew": {"calories": 300}
}"#;

/// Temp workspace with a catalog, two recommendation lists and a config
/// pointing at them.
fn workspace(catalog: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "dishes.json", catalog);
    write(
        dir.path(),
        "recommendation_user.json",
        r#"{"3": "pizza", "1": "stir fry", "2": "stir-fry noodles"}"#,
    );
    write(dir.path(), "recommendation_popular.json", r#"{"1": "pizza"}"#);

    let config = format!(
        "[catalog]\ndishes = {:?}\nrecommendations_user = {:?}\nrecommendations_popular = {:?}\n\n[home]\nrow_size = 2\nfeatured = [\"stir fry\"]\n",
        dir.path().join("dishes.json"),
        dir.path().join("recommendation_user.json"),
        dir.path().join("recommendation_popular.json"),
    );
    write(dir.path(), "dishfinder.toml", &config);
    dir
}

fn write(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).unwrap();
}

fn dishfinder(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("dishfinder").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("DISHFINDER_CONFIG")
        .env("NO_COLOR", "1");
    cmd
}

fn json_names(stdout: &[u8]) -> Vec<String> {
    let value: serde_json::Value = serde_json::from_slice(stdout).unwrap();
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|hit| hit["name"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn search_ranks_best_match_first() {
    let dir = workspace(CATALOG);
    let output = dishfinder(&dir)
        .args(["--format", "json", "search", "stir fry"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(json_names(&output.stdout), ["stir fry", "stir-fry noodles", "pizza"]);
}

#[test]
fn search_ignores_case_and_padding() {
    let dir = workspace(CATALOG);
    let plain = dishfinder(&dir)
        .args(["-f", "json", "search", "pizza"])
        .output()
        .unwrap();
    let noisy = dishfinder(&dir)
        .args(["-f", "json", "search", "  PIZZA  "])
        .output()
        .unwrap();

    assert_eq!(json_names(&plain.stdout), json_names(&noisy.stdout));
    assert_eq!(json_names(&plain.stdout)[0], "pizza");
}

#[test]
fn search_json_includes_scores_on_request() {
    let dir = workspace(CATALOG);
    let output = dishfinder(&dir)
        .args(["-f", "json", "search", "pizza", "--scores", "--limit", "1"])
        .output()
        .unwrap();

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let hits = value.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["score"], 1.0);
    assert_eq!(hits[0]["calories"], 285.0);
}

#[test]
fn search_text_respects_limit() {
    let dir = workspace(CATALOG);
    dishfinder(&dir)
        .args(["search", "stir fry", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stir fry"))
        .stdout(predicate::str::contains("pizza").not());
}

#[test]
fn search_empty_query_keeps_every_dish() {
    let dir = workspace(CATALOG);
    let output = dishfinder(&dir)
        .args(["-f", "json", "search", ""])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(json_names(&output.stdout).len(), 3);
}

#[test]
fn search_skips_malformed_entries() {
    let dir = workspace(BROKEN_CATALOG);
    let output = dishfinder(&dir)
        .args(["-f", "json", "search", "stew"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(json_names(&output.stdout), ["pizza"]);
}

#[test]
fn search_catalog_flag_overrides_config() {
    let dir = workspace(CATALOG);
    write(dir.path(), "other.json", BROKEN_CATALOG);

    let output = dishfinder(&dir)
        .args(["-f", "json", "--catalog", "other.json", "search", "pizza"])
        .output()
        .unwrap();

    assert_eq!(json_names(&output.stdout), ["pizza"]);
}

#[test]
fn missing_catalog_reports_code() {
    let dir = workspace(CATALOG);
    dishfinder(&dir)
        .args(["--catalog", "nope.json", "search", "pizza"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("E2001"));
}

#[test]
fn missing_config_exits_with_config_error() {
    let dir = workspace(CATALOG);
    dishfinder(&dir)
        .args(["--config", "missing.toml", "search", "pizza"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("E3001"));
}

#[test]
fn search_rejects_min_score_above_one() {
    let dir = workspace(CATALOG);
    dishfinder(&dir)
        .args(["-f", "json", "search", "pizza", "--min-score", "5"])
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("E3004"))
        .stderr(predicate::str::contains("search.min_score"));
}

#[test]
fn search_rejects_nan_min_score() {
    let dir = workspace(CATALOG);
    dishfinder(&dir)
        .args(["search", "pizza", "--min-score", "NaN"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("E3004"));
}

#[test]
fn search_rejects_zero_limit() {
    let dir = workspace(CATALOG);
    dishfinder(&dir)
        .args(["search", "pizza", "--limit", "0"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("E3004"))
        .stderr(predicate::str::contains("search.limit"));
}

#[test]
fn interactive_rejects_zero_limit() {
    let dir = workspace(CATALOG);
    dishfinder(&dir)
        .args(["interactive", "--limit", "0"])
        .write_stdin("pizza\n")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("E3004"));
}

#[test]
fn json_format_reports_errors_as_json() {
    let dir = workspace(CATALOG);
    dishfinder(&dir)
        .args(["-f", "json", "--catalog", "nope.json", "search", "pizza"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("\"code_str\": \"E2001\""))
        .stderr(predicate::str::contains("\"category\": \"IO\""));
}

#[test]
fn check_passes_on_clean_catalog() {
    let dir = workspace(CATALOG);
    dishfinder(&dir)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 dishes loaded"));
}

#[test]
fn check_fails_on_skipped_entries() {
    let dir = workspace(BROKEN_CATALOG);
    dishfinder(&dir)
        .arg("check")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("mystery stew"))
        .stderr(predicate::str::contains("E4002"));
}

#[test]
fn home_orders_and_truncates_rows() {
    let dir = workspace(CATALOG);
    let output = dishfinder(&dir)
        .args(["-f", "json", "home"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let feed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(feed["featured"], serde_json::json!(["stir fry"]));
    assert_eq!(feed["recommended"], serde_json::json!(["stir fry", "stir-fry noodles"]));
    assert_eq!(feed["popular"], serde_json::json!(["pizza"]));
}

#[test]
fn home_text_shows_row_titles() {
    let dir = workspace(CATALOG);
    dishfinder(&dir)
        .arg("home")
        .assert()
        .success()
        .stdout(predicate::str::contains("Recommended for you"))
        .stdout(predicate::str::contains("Popular foods"));
}

#[test]
fn interactive_reranks_each_line() {
    let dir = workspace(CATALOG);
    let output = dishfinder(&dir)
        .args(["-f", "json", "interactive", "--limit", "1"])
        .write_stdin("pizza\nstir-fry noodles\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let lines: Vec<serde_json::Value> = String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["results"], serde_json::json!(["pizza"]));
    assert_eq!(lines[1]["query"], "stir-fry noodles");
    assert_eq!(lines[1]["results"], serde_json::json!(["stir-fry noodles"]));
}

#[test]
fn stats_prints_metrics() {
    let dir = workspace(CATALOG);
    dishfinder(&dir)
        .args(["--stats", "search", "pizza"])
        .assert()
        .success()
        .stderr(predicate::str::contains("search.queries"))
        .stderr(predicate::str::contains("search.rank_ms"))
        .stderr(predicate::str::contains("catalog.dishes"));
}
