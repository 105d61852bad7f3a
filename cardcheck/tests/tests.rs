//! Integration tests for our command-line interface. We actually run the
//! binary and make sure it produces the expected output.

use cli_test_dir::*;

const MINIMAL: &str = "../weibo_card/fixtures/templates/minimal.json";
const SUNSET: &str = "../weibo_card/fixtures/templates/sunset.json";
const CATALOG: &str = "../weibo_card/fixtures/templates/catalog.json";
const SAMPLE_POST: &str = "../weibo_card/fixtures/posts/sample.json";

#[test]
fn show_help() {
    let testdir = TestDir::new("cardcheck", "show_help");
    let output = testdir.cmd().arg("--help").expect_success();
    assert!(output.stdout_str().contains("Usage"));
    assert!(output.stdout_str().contains("template"));
}

#[test]
fn show_version() {
    let testdir = TestDir::new("cardcheck", "show_version");
    let output = testdir.cmd().arg("--version").expect_success();
    assert!(output.stdout_str().contains("cardcheck "));
}

#[test]
fn cmd_template_normalizes() {
    let testdir = TestDir::new("cardcheck", "cmd_template_normalizes");
    let output = testdir
        .cmd()
        .arg("template")
        .arg(testdir.src_path(MINIMAL))
        .expect_success();
    let stdout = output.stdout_str();
    assert!(stdout.contains("\"id\": \"minimal\""));
    assert!(stdout.contains("\"backgroundColor\": \"#fff\""));
    assert!(!stdout.contains("backgroundImage"));
    assert!(!stdout.contains("null"));
}

#[test]
fn cmd_template_reports_missing_field() {
    let testdir = TestDir::new("cardcheck", "cmd_template_reports_missing_field");
    testdir.create_file(
        "broken.json",
        r##"{
  "id": "broken",
  "name": "Broken",
  "description": "no text color",
  "style": {
    "container": { "padding": "16px", "backgroundColor": "#fff" },
    "card": { "backgroundColor": "#000" }
  }
}"##,
    );
    let output = testdir
        .cmd()
        .arg("template")
        .arg("broken.json")
        .expect_failure();
    assert!(output.stderr_str().contains("style.card.color"));
    assert!(output.stderr_str().contains("broken.json"));
}

#[test]
fn cmd_template_reports_unreadable_file() {
    let testdir = TestDir::new("cardcheck", "cmd_template_reports_unreadable_file");
    let output = testdir
        .cmd()
        .arg("template")
        .arg("does_not_exist.json")
        .expect_failure();
    assert!(output.stderr_str().contains("does_not_exist.json"));
}

#[test]
fn cmd_templates_lists_catalog() {
    let testdir = TestDir::new("cardcheck", "cmd_templates_lists_catalog");
    let output = testdir
        .cmd()
        .arg("templates")
        .arg(testdir.src_path(CATALOG))
        .expect_success();
    assert_eq!(output.stdout_str(), "classic\tClassic\nnight\tNight\n");
}

#[test]
fn cmd_post_reads_stdin() {
    let testdir = TestDir::new("cardcheck", "cmd_post_reads_stdin");
    let output = testdir
        .cmd()
        .args(&["post", "-"])
        .output_with_stdin(
            r#"{"nickname": "", "avatar": "", "publishTime": "", "source": "", "content": ""}"#,
        )
        .expect_success();
    assert!(output.stdout_str().contains("\"publishTime\": \"\""));
}

#[test]
fn cmd_post_accepts_fixture() {
    let testdir = TestDir::new("cardcheck", "cmd_post_accepts_fixture");
    let output = testdir
        .cmd()
        .arg("post")
        .arg(testdir.src_path(SAMPLE_POST))
        .expect_success();
    assert!(output.stdout_str().contains("人民日报"));
}

#[test]
fn cmd_post_rejects_missing_content() {
    let testdir = TestDir::new("cardcheck", "cmd_post_rejects_missing_content");
    let output = testdir
        .cmd()
        .args(&["post", "-"])
        .output_with_stdin(
            r#"{"nickname": "a", "avatar": "b", "publishTime": "c", "source": "d"}"#,
        )
        .expect_failure();
    assert!(output.stderr_str().contains("\"content\""));
}

#[test]
fn cmd_css_fills_defaults() {
    let testdir = TestDir::new("cardcheck", "cmd_css_fills_defaults");
    let output = testdir
        .cmd()
        .arg("css")
        .arg(testdir.src_path(MINIMAL))
        .expect_success();
    let stdout = output.stdout_str();
    assert!(stdout.starts_with("container: padding: 16px; background-color: #fff;"));
    assert!(stdout.contains("card: background-color: #000; color: #fff; font-family: sans-serif"));
}

#[test]
fn cmd_css_keeps_template_values() {
    let testdir = TestDir::new("cardcheck", "cmd_css_keeps_template_values");
    let output = testdir
        .cmd()
        .arg("css")
        .arg(testdir.src_path(SUNSET))
        .expect_success();
    assert!(output.stdout_str().contains("border-radius: 24px"));
    assert!(output.stdout_str().contains("font-size: 15px"));
}
