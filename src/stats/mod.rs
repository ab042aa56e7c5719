pub mod engine;
pub mod loader;
pub mod types;

pub use self::types::{
    Analysis, FingerUsage, MorphemeStats, NgramFamily, NgramStats, StatKey, StatResult,
};
use crate::consts::DEFAULT_TOP_N;
use crate::corpus::{Corpus, Morphemes};
use crate::error::KsResult;
use crate::layouts::LayoutMapping;
use std::path::Path;

/// Scores layouts against a fixed corpus.
///
/// Holds only read-only data, so one analyzer can be shared across
/// threads as long as each call gets its own [`LayoutMapping`].
#[derive(Debug, Clone)]
pub struct Analyzer {
    pub corpus: Corpus,
    pub morphemes: Morphemes,
    pub top_n: usize,
}

impl Analyzer {
    pub fn new(corpus: Corpus, morphemes: Morphemes) -> Self {
        Self {
            corpus,
            morphemes,
            top_n: DEFAULT_TOP_N,
        }
    }

    pub fn from_dir<P: AsRef<Path>>(dir: P) -> KsResult<Self> {
        let (corpus, morphemes) = loader::load_corpus_dir(dir)?;
        Ok(Self::new(corpus, morphemes))
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn analyze(&self, mapping: &LayoutMapping) -> KsResult<Analysis> {
        Ok(Analysis {
            ngram_stats: engine::aggregate_ngrams(mapping, &self.corpus, self.top_n)?,
            finger_stats: engine::finger_usage(mapping, &self.corpus.monograms),
            ending_stats: engine::classify_morphemes(mapping, &self.morphemes.endings)?,
            prefix_stats: engine::classify_morphemes(mapping, &self.morphemes.prefixes)?,
        })
    }

    /// Builds a fresh lowercased mapping from a 47-key string and analyzes it.
    pub fn analyze_layout(&self, layout: &str) -> KsResult<Analysis> {
        let mapping = LayoutMapping::new_lowercase(layout)?;
        self.analyze(&mapping)
    }

    pub fn key_heat(&self, mapping: &LayoutMapping) -> Vec<Option<f64>> {
        engine::key_heat(mapping, &self.corpus.monograms)
    }
}
