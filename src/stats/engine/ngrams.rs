use crate::classify::{classify, Category};
use crate::corpus::{Corpus, NgramTable};
use crate::error::KsResult;
use crate::layouts::LayoutMapping;
use crate::stats::types::{NgramFamily, NgramStats, StatKey, StatResult};
use std::collections::{BTreeMap, HashMap};
use strum::IntoEnumIterator;
use tracing::debug;

/// Per-display-string weights for one category, in first-seen order.
#[derive(Default)]
struct Contributions {
    order: Vec<(String, f64)>,
    index: HashMap<String, usize>,
}

impl Contributions {
    fn add(&mut self, gram: String, weight: f64) {
        match self.index.get(&gram) {
            Some(&i) => self.order[i].1 += weight,
            None => {
                self.index.insert(gram.clone(), self.order.len());
                self.order.push((gram, weight));
            }
        }
    }

    fn top(mut self, n: usize) -> Vec<(String, f64)> {
        // Stable sort: equal weights keep first-seen order
        self.order.sort_by(|a, b| b.1.total_cmp(&a.1));
        self.order.truncate(n);
        self.order
    }
}

pub fn aggregate_ngrams(
    mapping: &LayoutMapping,
    corpus: &Corpus,
    top_n: usize,
) -> KsResult<NgramStats> {
    let mut stats = NgramStats::new();
    for family in NgramFamily::iter() {
        let table = match family {
            NgramFamily::Bigram => &corpus.bigrams,
            NgramFamily::Skipgram => &corpus.skipgrams,
            NgramFamily::Trigram => &corpus.trigrams,
        };
        stats.extend(aggregate_family(mapping, table, family, top_n)?);
    }
    Ok(stats)
}

/// Classifies every entry of one family and turns tag weights into frequencies.
///
/// Every entry adds to `total`, including those with characters missing
/// from the layout, so low coverage shows up as lower frequencies.
pub fn aggregate_family(
    mapping: &LayoutMapping,
    table: &NgramTable,
    family: NgramFamily,
    top_n: usize,
) -> KsResult<NgramStats> {
    let mut total = 0.0;
    let mut counts: BTreeMap<Category, f64> = BTreeMap::new();
    let mut contribs: HashMap<Category, Contributions> = HashMap::new();
    let mut unresolved = 0usize;
    let mut malformed = 0usize;

    for (gram, weight) in table.iter() {
        total += weight;

        if gram.chars().count() != family.order() {
            malformed += 1;
            continue;
        }

        let Some(seq) = mapping.resolve(gram) else {
            unresolved += 1;
            continue;
        };

        let tags = classify(&seq)?;
        if tags.is_empty() {
            continue;
        }

        let display = family.display_gram(gram);
        for cat in tags.iter() {
            *counts.entry(cat).or_default() += weight;
            contribs
                .entry(cat)
                .or_default()
                .add(display.clone(), weight);
        }
    }

    debug!(
        "{:?}: total {:.1}, {} entries, {} unresolved, {} malformed",
        family,
        total,
        table.len(),
        unresolved,
        malformed
    );

    let mut stats = NgramStats::new();
    for (cat, count) in counts {
        let top = contribs
            .remove(&cat)
            .map(|c| c.top(top_n))
            .unwrap_or_default();
        let frequency = if total > 0.0 { count / total } else { 0.0 };
        stats.insert(
            StatKey::new(cat, family),
            StatResult {
                frequency,
                top,
                total,
            },
        );
    }
    Ok(stats)
}
