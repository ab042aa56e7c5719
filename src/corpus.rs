use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use tracing::warn;

/// N-gram -> weight table. Keeps document order, which decides ties
/// between equally weighted top contributors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NgramTable {
    entries: Vec<(String, f64)>,
}

impl NgramTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, gram: impl Into<String>, weight: f64) {
        self.entries.push((gram.into(), weight));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(g, w)| (g.as_str(), *w))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_weight(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w).sum()
    }

    pub fn get(&self, gram: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(g, _)| g == gram)
            .map(|(_, w)| *w)
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for NgramTable {
    fn from_iter<T: IntoIterator<Item = (S, f64)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().map(|(g, w)| (g.into(), w)).collect(),
        }
    }
}

impl Serialize for NgramTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (g, w) in &self.entries {
            map.serialize_entry(g, w)?;
        }
        map.end()
    }
}

struct NgramTableVisitor;

impl<'de> Visitor<'de> for NgramTableVisitor {
    type Value = NgramTable;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object mapping n-grams to numeric weights")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = NgramTable {
            entries: Vec::with_capacity(access.size_hint().unwrap_or(0)),
        };
        let mut seen: HashMap<String, usize> = HashMap::new();
        while let Some((gram, weight)) = access.next_entry::<String, f64>()? {
            // A repeated key keeps its first position and takes the last weight
            match seen.get(&gram) {
                Some(&i) => {
                    warn!("N-gram '{}' appears more than once; keeping weight {}", gram, weight);
                    table.entries[i].1 = weight;
                }
                None => {
                    seen.insert(gram.clone(), table.entries.len());
                    table.entries.push((gram, weight));
                }
            }
        }
        Ok(table)
    }
}

impl<'de> Deserialize<'de> for NgramTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(NgramTableVisitor)
    }
}

/// The four n-gram families an analysis reads. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Corpus {
    pub monograms: NgramTable,
    pub bigrams: NgramTable,
    pub skipgrams: NgramTable,
    pub trigrams: NgramTable,
}

/// Word endings and prefixes scored against the same rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Morphemes {
    pub endings: Vec<String>,
    pub prefixes: Vec<String>,
}

/// Builds a corpus from raw text.
///
/// Text is lowercased and split on whitespace; n-grams never cross a
/// word boundary. Skipgrams pair characters two apart. Each family is
/// sorted by weight descending and truncated to `top_n` (0 keeps all).
pub fn generate_corpus(content: &str, top_n: usize) -> Corpus {
    let mut monograms: HashMap<String, usize> = HashMap::new();
    let mut bigrams: HashMap<String, usize> = HashMap::new();
    let mut skipgrams: HashMap<String, usize> = HashMap::new();
    let mut trigrams: HashMap<String, usize> = HashMap::new();

    let lowered = content.to_lowercase();
    for word in lowered.split_whitespace() {
        let chars: Vec<char> = word.chars().collect();
        for i in 0..chars.len() {
            *monograms.entry(chars[i].to_string()).or_default() += 1;

            if i + 1 < chars.len() {
                let s: String = chars[i..i + 2].iter().collect();
                *bigrams.entry(s).or_default() += 1;
            }

            if i + 2 < chars.len() {
                let s: String = [chars[i], chars[i + 2]].iter().collect();
                *skipgrams.entry(s).or_default() += 1;

                let s: String = chars[i..i + 3].iter().collect();
                *trigrams.entry(s).or_default() += 1;
            }
        }
    }

    fn into_table(map: HashMap<String, usize>, limit: usize) -> NgramTable {
        let mut entries: Vec<_> = map.into_iter().collect();
        // Sort DESC by count, then by n-gram so output is reproducible
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        if limit > 0 {
            entries.truncate(limit);
        }
        entries.into_iter().map(|(g, c)| (g, c as f64)).collect()
    }

    Corpus {
        monograms: into_table(monograms, 0),
        bigrams: into_table(bigrams, top_n),
        skipgrams: into_table(skipgrams, top_n),
        trigrams: into_table(trigrams, top_n),
    }
}
