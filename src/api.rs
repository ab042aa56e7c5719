use crate::config::{RatingTable, Severity};
use crate::layouts::{resolve_layout, LayoutMapping};
use crate::stats::{Analysis, Analyzer};
use serde::Serialize;
use std::sync::Mutex;
use tracing::info;

/// The global state required to run keystat services.
pub struct KeyStatState {
    pub analyzer: Mutex<Option<Analyzer>>,
    pub ratings: Mutex<RatingTable>,
}

impl Default for KeyStatState {
    fn default() -> Self {
        Self {
            analyzer: Mutex::new(None),
            ratings: Mutex::new(RatingTable::default()),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RatedValue {
    pub name: String,
    pub value: f64,
    pub rating: Option<Severity>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub layout: String,
    pub analysis: Analysis,
    pub ngram_ratings: Vec<RatedValue>,
    pub finger_ratings: Vec<RatedValue>,
    pub heatmap: Vec<Option<f64>>,
}

/// Pairs every frequency of an analysis with its rating.
pub fn rate_analysis(analysis: &Analysis, ratings: &RatingTable) -> (Vec<RatedValue>, Vec<RatedValue>) {
    let rated = |name: String, value: f64| RatedValue {
        rating: ratings.rate(&name, value),
        name,
        value,
    };

    let ngrams = analysis
        .ngram_stats
        .iter()
        .map(|(key, stat)| rated(key.to_string(), stat.frequency))
        .collect();
    let fingers = analysis
        .finger_stats
        .entries()
        .into_iter()
        .map(|(name, value)| rated(name, value))
        .collect();

    (ngrams, fingers)
}

pub fn build_report(
    analyzer: &Analyzer,
    mapping: &LayoutMapping,
    ratings: &RatingTable,
) -> Result<AnalysisReport, String> {
    let analysis = analyzer.analyze(mapping).map_err(|e| e.to_string())?;
    let (ngram_ratings, finger_ratings) = rate_analysis(&analysis, ratings);

    Ok(AnalysisReport {
        layout: mapping.as_string(),
        heatmap: analyzer.key_heat(mapping),
        analysis,
        ngram_ratings,
        finger_ratings,
    })
}

/// Service: load a corpus directory and, optionally, rating overrides.
pub fn load_dataset(
    state: &KeyStatState,
    corpus_dir: &str,
    ratings_path: &Option<String>,
    top_n: Option<usize>,
) -> Result<String, String> {
    let mut analyzer = Analyzer::from_dir(corpus_dir).map_err(|e| e.to_string())?;
    if let Some(n) = top_n {
        analyzer = analyzer.with_top_n(n);
    }

    let ratings = match ratings_path {
        Some(path) => RatingTable::load_from_file(path).map_err(|e| e.to_string())?,
        None => RatingTable::default(),
    };

    let mut a_guard = state.analyzer.lock().map_err(|e| e.to_string())?;
    *a_guard = Some(analyzer);

    let mut r_guard = state.ratings.lock().map_err(|e| e.to_string())?;
    *r_guard = ratings;

    info!("API: dataset loaded from {}", corpus_dir);
    Ok("Dataset Loaded Successfully".to_string())
}

/// Service: analyze a layout given by name or as a 47-key string.
pub fn analyze_layout(state: &KeyStatState, layout_str: &str) -> Result<AnalysisReport, String> {
    let guard = state.analyzer.lock().map_err(|e| e.to_string())?;
    let analyzer = guard
        .as_ref()
        .ok_or("Analyzer not initialized. Load dataset first.")?;

    // A fresh mapping per request; nothing about the layout is cached.
    let mapping = resolve_layout(layout_str).map_err(|e| e.to_string())?;

    let ratings = state.ratings.lock().map_err(|e| e.to_string())?;
    build_report(analyzer, &mapping, &ratings)
}
