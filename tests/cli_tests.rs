use regex::Regex;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

struct TestContext {
    _dir: TempDir,
    data_path: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_path = dir.path().join("counties.json");

        // Population stdev is 2000 => half-stdev unit of 1000.
        let mut f = File::create(&data_path).unwrap();
        writeln!(
            f,
            r#"[
  {{"id": "10001", "name": "Near", "state": "Delaware", "attributes": {{"population": 1000, "median_age": 40}}}},
  {{"id": "10003", "name": "Mid", "state": "Delaware", "attributes": {{"population": 3000, "median_age": 40}}}},
  {{"id": "10005", "name": "Far", "state": "Delaware", "attributes": {{"population": 5000, "median_age": null}}}}
]"#
        )
        .unwrap();

        Self {
            _dir: dir,
            data_path,
        }
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_countyshade"))
            .arg("--data")
            .arg(&self.data_path)
            .args(args)
            .output()
            .expect("Failed to execute binary")
    }
}

/// Pulls (id, class, color) out of the shade table rows.
fn parse_rows(stdout: &str) -> Vec<(String, String, String)> {
    let row = Regex::new(r"^\|\s*(\d{5})\s*\|[^|]*\|\s*(\S+)[^|]*\|\s*(\S+)\s*\|$").unwrap();
    stdout
        .lines()
        .filter_map(|l| row.captures(l.trim()))
        .map(|c| (c[1].to_string(), c[2].to_string(), c[3].to_string()))
        .collect()
}

#[test]
fn test_cli_shade_classifies_counties() {
    let ctx = TestContext::new();
    let out = ctx.run(&["shade", "--population", "1000"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8_lossy(&out.stdout);
    let rows = parse_rows(&stdout);
    assert_eq!(rows.len(), 3, "STDOUT:\n{}", stdout);
    assert_eq!(rows[0], ("10001".into(), "1".into(), "#173B53".into()));
    assert_eq!(rows[1], ("10003".into(), "4".into(), "rgb(73,183,194)".into()));
    assert_eq!(rows[2], ("10005".into(), "8".into(), "#FEFFE0".into()));
}

#[test]
fn test_cli_selected_county_is_highlighted() {
    let ctx = TestContext::new();
    let out = ctx.run(&["shade", "--population", "1000", "--selected", "10005"]);
    assert!(out.status.success());

    let rows = parse_rows(&String::from_utf8_lossy(&out.stdout));
    let far = rows.iter().find(|r| r.0 == "10005").unwrap();
    assert_eq!(far.1, "0");
    assert_eq!(far.2, "#fc2f70");
}

#[test]
fn test_cli_selected_id_is_trimmed() {
    let ctx = TestContext::new();
    let out = ctx.run(&["shade", "--population", "1000", "--selected", " 10001 "]);
    assert!(out.status.success());

    let rows = parse_rows(&String::from_utf8_lossy(&out.stdout));
    let near = rows.iter().find(|r| r.0 == "10001").unwrap();
    assert_eq!(near.1, "0");
    assert_eq!(near.2, "#fc2f70");
}

#[test]
fn test_cli_inspect_county_with_null_value() {
    let ctx = TestContext::new();
    let out = ctx.run(&["inspect", "10005", "--midpoints"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Far, Delaware (10005)"), "{}", stdout);
    assert!(stdout.contains("5,000"));
    assert!(stdout.contains("Weight: unscored (purple)"), "{}", stdout);
    assert!(stdout.contains("median_age"));
}

#[test]
fn test_cli_missing_attribute_is_reported_per_county() {
    let ctx = TestContext::new();
    let out = ctx.run(&["shade", "--median-age", "40"]);
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let rows = parse_rows(&stdout);
    let far = rows.iter().find(|r| r.0 == "10005").unwrap();
    assert_eq!(far.1, "!");
    assert_eq!(far.2, "purple");
}

#[test]
fn test_cli_no_filters_uses_default_fill() {
    let ctx = TestContext::new();
    let out = ctx.run(&["shade"]);
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("No active filters"));
    for (_, class, color) in parse_rows(&stdout) {
        assert_eq!(class, "-");
        assert_eq!(color, "#e5e7eb");
    }
}

#[test]
fn test_cli_unknown_county_fails() {
    let ctx = TestContext::new();
    let out = ctx.run(&["inspect", "99999"]);
    assert!(!out.status.success());
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_cli_inspect_prints_panel() {
    let ctx = TestContext::new();
    let out = ctx.run(&["inspect", "10003", "--population", "1000"]);
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Mid, Delaware (10003)"), "{}", stdout);
    assert!(stdout.contains("3,000"));
    assert!(stdout.contains("Weight: class 4 (rgb(73,183,194))"));
}

#[test]
fn test_cli_key_needs_no_data() {
    let out = Command::new(env!("CARGO_BIN_EXE_countyshade"))
        .args(["--data", "/no/such/file.json", "key"])
        .output()
        .expect("Failed to execute binary");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Least Similar"));
    assert!(stdout.contains("#fc2f70"));
}
