use crate::corpus::NgramTable;
use crate::layouts::LayoutMapping;
use std::collections::HashMap;

/// Monogram weight of each slot's character, scaled to [0, 1] between the
/// least and most frequent characters on the layout. `None` marks
/// characters the corpus never saw.
pub fn key_heat(mapping: &LayoutMapping, monograms: &NgramTable) -> Vec<Option<f64>> {
    let weights: HashMap<char, f64> = monograms
        .iter()
        .filter_map(|(gram, w)| {
            let mut chars = gram.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some((c, w)),
                _ => None,
            }
        })
        .collect();

    let raw: Vec<Option<f64>> = mapping
        .chars()
        .iter()
        .map(|c| weights.get(c).copied())
        .collect();

    let present = raw.iter().flatten();
    let min = present.clone().fold(f64::INFINITY, |a, &b| a.min(b));
    let max = present.fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    let span = max - min;

    raw.into_iter()
        .map(|w| {
            w.map(|w| {
                if span > 0.0 {
                    (w - min) / span
                } else {
                    1.0
                }
            })
        })
        .collect()
}
