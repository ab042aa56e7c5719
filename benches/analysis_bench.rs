use criterion::{criterion_group, criterion_main, Criterion};
use keystat::corpus::{Corpus, Morphemes, NgramTable};
use keystat::layouts::KnownLayout;
use keystat::stats::Analyzer;
use std::hint::black_box;

fn setup_analyzer() -> Analyzer {
    let chars: Vec<char> = "etaoinshrdlcumwfgypbvkjxqz.,;'".chars().collect();

    let mut corpus = Corpus::default();
    for (i, &c) in chars.iter().enumerate() {
        corpus.monograms.push(c.to_string(), 1000.0 - i as f64);
    }

    let mut bigrams = NgramTable::new();
    let mut trigrams = NgramTable::new();
    let mut count = 0;
    for &c1 in &chars {
        for &c2 in &chars {
            bigrams.push(format!("{}{}", c1, c2), 50.0);
            for &c3 in &chars {
                if count >= 5000 {
                    break;
                }
                trigrams.push(format!("{}{}{}", c1, c2, c3), 10.0);
                count += 1;
            }
        }
    }
    corpus.skipgrams = bigrams.clone();
    corpus.bigrams = bigrams;
    corpus.trigrams = trigrams;

    let morphemes = Morphemes {
        endings: vec!["ed".into(), "ing".into(), "ly".into(), "ion".into()],
        prefixes: vec!["re".into(), "un".into(), "pre".into()],
    };

    Analyzer::new(corpus, morphemes)
}

fn criterion_benchmark(c: &mut Criterion) {
    let analyzer = setup_analyzer();
    let mapping = KnownLayout::Colemak.mapping().expect("built-in layout");

    c.bench_function("analyze (900 bigrams, 5k trigrams)", |b| {
        b.iter(|| analyzer.analyze(black_box(&mapping)))
    });

    c.bench_function("analyze_layout (fresh mapping)", |b| {
        b.iter(|| analyzer.analyze_layout(black_box(KnownLayout::Workman.get_str())))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
