use keystat::classify::Category;
use keystat::stats::engine::classify_morphemes;
use keystat::stats::Analyzer;

mod common;
use common::{qwerty, sample_corpus};

fn list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_cross_hand_morphemes_dropped() {
    let stats = classify_morphemes(&qwerty(), &list(&["the", "ing", "ok", "ed"])).unwrap();
    let kept: Vec<&str> = stats.classified.keys().map(|s| s.as_str()).collect();
    assert_eq!(kept, vec!["ed", "ok"]);
    assert!(stats.classified["ok"].contains(Category::HalfScissor));
    assert!(stats.classified["ed"].contains(Category::SameFinger));
}

#[test]
fn test_untagged_morphemes_dropped() {
    // 'a' and 's' are neighbours on the home row
    let stats = classify_morphemes(&qwerty(), &list(&["as"])).unwrap();
    assert!(stats.classified.is_empty());
    assert_eq!(stats.unsupported, 0);
}

#[test]
fn test_unsupported_lengths_counted() {
    let stats = classify_morphemes(&qwerty(), &list(&["s", "ness", "", "ed"])).unwrap();
    assert_eq!(stats.unsupported, 3);
    assert_eq!(stats.classified.len(), 1);
}

#[test]
fn test_unmapped_morphemes_skipped_silently() {
    let stats = classify_morphemes(&qwerty(), &list(&["éd", "qx"])).unwrap();
    assert_eq!(stats.unsupported, 0);
    let kept: Vec<&str> = stats.classified.keys().map(|s| s.as_str()).collect();
    assert_eq!(kept, vec!["qx"]);
    assert_eq!(stats.classified["qx"].to_string(), "FS FWP");
}

#[test]
fn test_analysis_reports_both_lists() {
    let (corpus, morphemes) = sample_corpus();
    let analysis = Analyzer::new(corpus, morphemes).analyze(&qwerty()).unwrap();

    let endings: Vec<&str> = analysis
        .ending_stats
        .classified
        .keys()
        .map(|s| s.as_str())
        .collect();
    assert_eq!(endings, vec!["ed", "ok"]);
    assert_eq!(analysis.ending_stats.unsupported, 2);

    let prefixes = &analysis.prefix_stats.classified;
    assert!(prefixes.contains_key("ex"));
    assert!(prefixes.contains_key("qs"));
    assert!(!prefixes.contains_key("re"));
    assert_eq!(prefixes["qs"].to_string(), "HS WP");
}
