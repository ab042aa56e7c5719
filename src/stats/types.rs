use crate::classify::{Category, CategorySet};
use crate::geometry::{Finger, Hand};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use strum_macros::EnumIter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Serialize)]
pub enum NgramFamily {
    Bigram,
    Skipgram,
    Trigram,
}

impl NgramFamily {
    /// Appended to a category tag to name a statistic (`SF` + `B` = `SFB`).
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Bigram => "B",
            Self::Skipgram => "S",
            Self::Trigram => "",
        }
    }

    /// Characters per entry.
    pub fn order(self) -> usize {
        match self {
            Self::Bigram | Self::Skipgram => 2,
            Self::Trigram => 3,
        }
    }

    /// Skipgrams render as `x_y` so they are not mistaken for bigrams.
    pub fn display_gram(self, gram: &str) -> String {
        match self {
            Self::Skipgram => {
                let chars: Vec<String> = gram.chars().map(String::from).collect();
                chars.join("_")
            }
            _ => gram.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StatKey {
    pub category: Category,
    pub family: NgramFamily,
}

impl StatKey {
    pub fn new(category: Category, family: NgramFamily) -> Self {
        Self { category, family }
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.category, self.family.suffix())
    }
}

impl Serialize for StatKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatResult {
    /// Weighted count over `total`, in [0, 1].
    pub frequency: f64,
    /// Highest-weight contributors, descending. Ties keep corpus order.
    pub top: Vec<(String, f64)>,
    /// Full weight of the family's corpus, covered or not.
    pub total: f64,
}

pub type NgramStats = BTreeMap<StatKey, StatResult>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FingerUsage {
    pub fingers: BTreeMap<Finger, f64>,
    pub left_hand: f64,
    pub right_hand: f64,
    /// Weight of the monograms that resolved on the layout.
    pub total: f64,
}

impl FingerUsage {
    pub fn finger(&self, finger: Finger) -> f64 {
        self.fingers.get(&finger).copied().unwrap_or(0.0)
    }

    pub fn hand(&self, hand: Hand) -> f64 {
        match hand {
            Hand::Left => self.left_hand,
            Hand::Right => self.right_hand,
        }
    }

    /// Finger labels followed by `LH` and `RH`.
    pub fn entries(&self) -> Vec<(String, f64)> {
        let mut out: Vec<(String, f64)> = Finger::ALL
            .iter()
            .map(|&f| (f.to_string(), self.finger(f)))
            .collect();
        out.push((Hand::Left.to_string(), self.left_hand));
        out.push((Hand::Right.to_string(), self.right_hand));
        out
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MorphemeStats {
    /// Alphabetical by morpheme.
    pub classified: BTreeMap<String, CategorySet>,
    /// Entries that were not 2 or 3 characters long.
    pub unsupported: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub ngram_stats: NgramStats,
    pub finger_stats: FingerUsage,
    pub ending_stats: MorphemeStats,
    pub prefix_stats: MorphemeStats,
}

impl Analysis {
    pub fn stat(&self, category: Category, family: NgramFamily) -> Option<&StatResult> {
        self.ngram_stats.get(&StatKey::new(category, family))
    }

    /// Frequency for a stat, `0.0` when no n-gram carried the tag.
    pub fn frequency(&self, category: Category, family: NgramFamily) -> f64 {
        self.stat(category, family).map_or(0.0, |s| s.frequency)
    }
}
