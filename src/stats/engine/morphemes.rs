use crate::classify::classify;
use crate::error::KsResult;
use crate::layouts::LayoutMapping;
use crate::stats::types::MorphemeStats;
use tracing::debug;

/// Keeps the morphemes typed within one hand that carry at least one tag.
///
/// Only 2- and 3-character entries can be classified; others are counted
/// in `unsupported` and skipped, as are entries with characters missing
/// from the layout.
pub fn classify_morphemes(mapping: &LayoutMapping, list: &[String]) -> KsResult<MorphemeStats> {
    let mut out = MorphemeStats::default();

    for morpheme in list {
        let len = morpheme.chars().count();
        if !(2..=3).contains(&len) {
            debug!("Skipping morpheme '{}' of length {}", morpheme, len);
            out.unsupported += 1;
            continue;
        }

        let Some(seq) = mapping.resolve(morpheme) else {
            continue;
        };

        let tags = classify(&seq)?;
        if !tags.is_empty() && !tags.any_cross_hand() {
            out.classified.insert(morpheme.clone(), tags);
        }
    }

    Ok(out)
}
