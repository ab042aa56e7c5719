#![allow(dead_code)]

use keystat::corpus::{Corpus, Morphemes, NgramTable};
use keystat::geometry::Position;
use keystat::layouts::{KnownLayout, LayoutMapping};

pub fn qwerty() -> LayoutMapping {
    KnownLayout::Qwerty.mapping().expect("qwerty is 47 keys")
}

/// Slot of a character on qwerty.
pub fn pos(c: char) -> Position {
    qwerty()
        .position(c)
        .unwrap_or_else(|| panic!("'{}' is not on qwerty", c))
}

pub fn seq(gram: &str) -> Vec<Position> {
    gram.chars().map(pos).collect()
}

pub fn table(entries: &[(&str, f64)]) -> NgramTable {
    entries.iter().map(|&(g, w)| (g, w)).collect()
}

/// Builder for small in-memory corpora.
#[derive(Default)]
pub struct CorpusBuilder {
    corpus: Corpus,
    morphemes: Morphemes,
}

impl CorpusBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn monograms(mut self, entries: &[(&str, f64)]) -> Self {
        self.corpus.monograms = table(entries);
        self
    }

    pub fn bigrams(mut self, entries: &[(&str, f64)]) -> Self {
        self.corpus.bigrams = table(entries);
        self
    }

    pub fn skipgrams(mut self, entries: &[(&str, f64)]) -> Self {
        self.corpus.skipgrams = table(entries);
        self
    }

    pub fn trigrams(mut self, entries: &[(&str, f64)]) -> Self {
        self.corpus.trigrams = table(entries);
        self
    }

    pub fn endings(mut self, list: &[&str]) -> Self {
        self.morphemes.endings = list.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn prefixes(mut self, list: &[&str]) -> Self {
        self.morphemes.prefixes = list.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn build(self) -> (Corpus, Morphemes) {
        (self.corpus, self.morphemes)
    }
}

/// A small English-flavoured corpus with a few characters missing from qwerty.
pub fn sample_corpus() -> (Corpus, Morphemes) {
    CorpusBuilder::new()
        .monograms(&[
            ("e", 120.0),
            ("t", 90.0),
            ("a", 80.0),
            ("o", 75.0),
            ("n", 70.0),
            ("s", 60.0),
            ("h", 55.0),
            ("r", 50.0),
            ("é", 5.0),
        ])
        .bigrams(&[
            ("th", 40.0),
            ("he", 35.0),
            ("ed", 12.0),
            ("fr", 5.0),
            ("ju", 3.0),
            ("qa", 2.0),
            ("gc", 4.0),
            ("é!", 9.0),
        ])
        .skipgrams(&[("te", 20.0), ("fr", 6.0), ("ok", 4.0), ("ñe", 3.0)])
        .trigrams(&[
            ("the", 30.0),
            ("ing", 20.0),
            ("asd", 6.0),
            ("das", 4.0),
            ("ñan", 7.0),
        ])
        .endings(&["ed", "ing", "the", "ok", "s", "ness"])
        .prefixes(&["re", "un", "ex", "qs"])
        .build()
}
