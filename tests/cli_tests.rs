use keystat::stats::loader::save_corpus_dir;
use regex::Regex;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

mod common;
use common::sample_corpus;

struct TestContext {
    dir: TempDir,
    corpus_dir: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let corpus_dir = dir.path().join("corpus");
        let (corpus, morphemes) = sample_corpus();
        save_corpus_dir(&corpus_dir, &corpus, Some(&morphemes)).unwrap();
        Self { dir, corpus_dir }
    }

    fn corpus_arg(&self) -> &str {
        self.corpus_dir.to_str().unwrap()
    }
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_keystat"))
        .args(args)
        .output()
        .expect("Failed to execute keystat")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_analyze_prints_tables() {
    let ctx = TestContext::new();
    let output = run(&["analyze", "--layout", "qwerty", "--corpus-dir", ctx.corpus_arg()]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let out = stdout(&output);
    assert!(out.contains("Layout: qwerty"));
    let sfb = Regex::new(r"SFB\s*\|\s*20\.00%").unwrap();
    assert!(sfb.is_match(&out), "SFB row missing:\n{}", out);
    assert!(Regex::new(r"\bALT\b").unwrap().is_match(&out));
    assert!(out.contains("Endings"));
    assert!(out.contains("2 entries skipped"));
}

#[test]
fn test_analyze_show_top_lists_contributors() {
    let ctx = TestContext::new();
    let output = run(&[
        "analyze",
        "--layout",
        "qwerty",
        "--corpus-dir",
        ctx.corpus_arg(),
        "--show-top",
        "--top-n",
        "1",
    ]);
    assert!(output.status.success());
    let out = stdout(&output);
    // ed carries 12 of 110 bigram weight
    assert!(Regex::new(r"ed 10\.91%").unwrap().is_match(&out), "{}", out);
    assert!(!out.contains("fr 4.55%"));
}

#[test]
fn test_analyze_json_output() {
    let ctx = TestContext::new();
    let output = run(&[
        "analyze",
        "--json",
        "--layout",
        "qwerty",
        "--corpus-dir",
        ctx.corpus_arg(),
    ]);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    let sfb = report["analysis"]["ngramStats"]["SFB"]["frequency"]
        .as_f64()
        .unwrap();
    assert!((sfb - 0.2).abs() < 1e-12);
    assert_eq!(report["heatmap"].as_array().unwrap().len(), 47);
    assert_eq!(
        report["analysis"]["endingStats"]["classified"]["ok"],
        serde_json::json!(["HS"])
    );
    assert_eq!(report["analysis"]["fingerStats"]["fingers"]["LT"], 0.0);
}

#[test]
fn test_analyze_custom_ratings() {
    let ctx = TestContext::new();
    let ratings = ctx.dir.path().join("ratings.json");
    fs::write(
        &ratings,
        r#"{"SFB": {"thresholds": [0.3, 0.4, 0.5, 0.6], "direction": "ascending"}}"#,
    )
    .unwrap();

    let output = run(&[
        "analyze",
        "--json",
        "--layout",
        "qwerty",
        "--corpus-dir",
        ctx.corpus_arg(),
        "--ratings",
        ratings.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let sfb = report["ngramRatings"]
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["name"] == "SFB")
        .unwrap();
    assert_eq!(sfb["rating"], "excellent");
}

#[test]
fn test_invalid_layout_fails() {
    let ctx = TestContext::new();
    let output = run(&["analyze", "--layout", "abc", "--corpus-dir", ctx.corpus_arg()]);
    assert!(!output.status.success());
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("exactly 47 keys"), "stderr: {}", err);
}

#[test]
fn test_missing_corpus_fails() {
    let output = run(&["analyze", "--corpus-dir", "/no/such/corpus"]);
    assert!(!output.status.success());
}

#[test]
fn test_compare_lists_layouts() {
    let ctx = TestContext::new();
    let output = run(&["compare", "--corpus-dir", ctx.corpus_arg()]);
    assert!(output.status.success());
    let out = stdout(&output);
    for name in ["qwerty", "dvorak", "colemak", "colemak_dh", "workman", "jcuken"] {
        assert!(out.contains(name), "{} missing:\n{}", name, out);
    }
    assert!(out.contains("SFB") && out.contains("RED"));
}

#[test]
fn test_compare_filter_and_custom() {
    let ctx = TestContext::new();
    let custom = keystat::layouts::KnownLayout::Qwerty.get_str();
    let output = run(&[
        "compare",
        "--corpus-dir",
        ctx.corpus_arg(),
        "--filter",
        "work",
        "--custom",
        custom,
    ]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("workman"));
    assert!(out.contains("custom_1"));
    assert!(!out.contains("dvorak"));
}

#[test]
fn test_generate_writes_corpus() {
    let ctx = TestContext::new();
    let text = ctx.dir.path().join("text.txt");
    fs::write(&text, "The theme then\nthe end").unwrap();
    let out_dir = ctx.dir.path().join("generated");

    let output = run(&[
        "generate",
        "--input",
        text.to_str().unwrap(),
        "--output",
        out_dir.to_str().unwrap(),
    ]);
    assert!(output.status.success());

    let bigrams: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out_dir.join("bigrams.json")).unwrap()).unwrap();
    assert_eq!(bigrams["th"], 4.0);

    let analyze = run(&["analyze", "--corpus-dir", out_dir.to_str().unwrap()]);
    assert!(analyze.status.success());
}

#[test]
fn test_analyze_defaults_to_jcuken() {
    let ctx = TestContext::new();
    let text = ctx.dir.path().join("text.txt");
    fs::write(&text, "съешь ещё этих мягких французских булок").unwrap();
    let out_dir = ctx.dir.path().join("ru");
    let generated = run(&[
        "generate",
        "--input",
        text.to_str().unwrap(),
        "--output",
        out_dir.to_str().unwrap(),
    ]);
    assert!(generated.status.success());

    let output = run(&["analyze", "--json", "--corpus-dir", out_dir.to_str().unwrap()]);
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(report["layout"].as_str().unwrap().starts_with("ё1234567890"));
    assert!(!report["analysis"]["ngramStats"].as_object().unwrap().is_empty());
}
