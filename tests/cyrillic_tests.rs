use keystat::classify::Category;
use keystat::corpus::generate_corpus;
use keystat::layouts::{resolve_layout, KnownLayout};
use keystat::stats::{Analyzer, NgramFamily};

mod common;
use common::CorpusBuilder;

#[test]
fn test_jcuken_reaches_yo_and_hard_sign() {
    let m = KnownLayout::Jcuken.mapping().unwrap();
    assert_eq!(m.position('ё'), Some(0));
    assert_eq!(m.position('ъ'), Some(24));
    assert_eq!(m.position('ю'), Some(45));
    assert_eq!(m.chars().len(), 47);
}

#[test]
fn test_generated_russian_corpus_is_fully_covered() {
    let corpus = generate_corpus("Подъезд ещё объём съешь этих мягких булок", 0);
    let analyzer = Analyzer::new(corpus.clone(), Default::default());
    let analysis = analyzer
        .analyze(&KnownLayout::Jcuken.mapping().unwrap())
        .unwrap();

    assert!(!analysis.ngram_stats.is_empty());
    assert_eq!(analysis.finger_stats.total, corpus.monograms.total_weight());
    let sum: f64 = analysis.finger_stats.fingers.values().sum();
    assert!((sum - 1.0).abs() < 1e-9);
}

#[test]
fn test_russian_pinky_pairs() {
    // ё/й share the left pinky, х/ъ the right one
    let (corpus, morphemes) = CorpusBuilder::new()
        .bigrams(&[("ёй", 3.0), ("хъ", 1.0), ("ол", 4.0)])
        .build();
    let analysis = Analyzer::new(corpus, morphemes)
        .analyze(&resolve_layout("йцукен").unwrap())
        .unwrap();

    assert!((analysis.frequency(Category::DoublePinky, NgramFamily::Bigram) - 0.5).abs() < 1e-12);
    let dpb = analysis
        .stat(Category::DoublePinky, NgramFamily::Bigram)
        .unwrap();
    let names: Vec<&str> = dpb.top.iter().map(|(g, _)| g.as_str()).collect();
    assert_eq!(names, vec!["ёй", "хъ"]);
}

#[test]
fn test_mixed_case_layout_strings_agree() {
    let (corpus, morphemes) = CorpusBuilder::new()
        .bigrams(&[("ёй", 3.0), ("ол", 4.0)])
        .build();
    let analyzer = Analyzer::new(corpus, morphemes);
    let lower = KnownLayout::Jcuken.get_str();
    let upper = lower.to_uppercase();
    assert_eq!(
        analyzer.analyze_layout(&upper).unwrap(),
        analyzer.analyze_layout(lower).unwrap()
    );
}
