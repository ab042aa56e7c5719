use crate::consts::DEFAULT_TOP_N;
use crate::error::{KeyStatError, KsResult};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumIter};

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[command(flatten)]
    pub report: ReportParams,
    #[command(flatten)]
    pub data: DataPaths,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportParams {
    /// Contributors kept per statistic
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    pub top_n: usize,
    /// Print the top contributors next to each statistic
    #[arg(long, default_value_t = false)]
    pub show_top: bool,
}

impl Default for ReportParams {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            show_top: false,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataPaths {
    #[arg(long, default_value = "data/corpora")]
    pub corpus_dir: String,
    /// JSON file overriding the rating thresholds
    #[arg(long)]
    pub ratings: Option<String>,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            corpus_dir: "data/corpora".to_string(),
            ratings: None,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, EnumIter, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Excellent,
    Good,
    Okay,
    Poor,
    Terrible,
}

impl Severity {
    const SCALE: [Severity; 4] = [
        Severity::Excellent,
        Severity::Good,
        Severity::Okay,
        Severity::Poor,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Lower is better.
    Ascending,
    /// Higher is better. `v >= t[3]` is Excellent, deliberately not Poor:
    /// thresholds are indexed from the top, unlike [`Direction::Ascending`].
    Descending,
    /// Closer to 0.5 is better.
    DistanceFromHalf,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingRule {
    /// Ascending bounds between excellent, good, okay, poor and terrible.
    pub thresholds: [f64; 4],
    pub direction: Direction,
}

impl RatingRule {
    pub fn rate(&self, value: f64) -> Severity {
        let t = &self.thresholds;
        match self.direction {
            Direction::Ascending => rate_ascending(t, value),
            Direction::DistanceFromHalf => rate_ascending(t, (value - 0.5).abs()),
            Direction::Descending => {
                for i in (0..4).rev() {
                    if value >= t[i] {
                        return Severity::SCALE[3 - i];
                    }
                }
                Severity::Terrible
            }
        }
    }
}

fn rate_ascending(t: &[f64; 4], value: f64) -> Severity {
    t.iter()
        .position(|&bound| value <= bound)
        .map_or(Severity::Terrible, |i| Severity::SCALE[i])
}

/// Stat name (`SFB`, `ALT`, `LI`, `LH`...) -> rating rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingTable {
    rules: BTreeMap<String, RatingRule>,
}

impl Default for RatingTable {
    fn default() -> Self {
        use Direction::*;

        let rules: [(&str, [f64; 4], Direction); 28] = [
            ("SFB", [0.04, 0.06, 0.10, 0.20], Ascending),
            ("CCB", [0.02, 0.04, 0.08, 0.15], Ascending),
            ("DPB", [0.005, 0.01, 0.02, 0.035], Ascending),
            ("LSB", [0.02, 0.035, 0.055, 0.08], Ascending),
            ("HSB", [0.05, 0.065, 0.08, 0.10], Ascending),
            ("FSB", [0.008, 0.015, 0.025, 0.045], Ascending),
            ("WPB", [0.005, 0.008, 0.015, 0.025], Ascending),
            ("FWPB", [0.002, 0.005, 0.010, 0.015], Ascending),
            ("SFS", [0.08, 0.10, 0.13, 0.20], Ascending),
            ("CCS", [0.04, 0.06, 0.10, 0.16], Ascending),
            ("DPS", [0.006, 0.012, 0.020, 0.030], Ascending),
            ("LSS", [0.03, 0.045, 0.065, 0.09], Ascending),
            ("HSS", [0.06, 0.08, 0.10, 0.14], Ascending),
            ("FSS", [0.01, 0.018, 0.030, 0.045], Ascending),
            ("WPS", [0.007, 0.012, 0.018, 0.030], Ascending),
            ("FWPS", [0.003, 0.008, 0.012, 0.020], Ascending),
            ("ONE", [0.008, 0.015, 0.025, 0.035], Ascending),
            ("RED", [0.02, 0.03, 0.05, 0.08], Ascending),
            ("ALT", [0.25, 0.35, 0.45, 0.55], Descending),
            ("ROL", [0.25, 0.30, 0.35, 0.45], Descending),
            // Strong fingers should carry load; weak ones should not
            ("LI", [0.04, 0.10, 0.22, 0.28], Descending),
            ("RI", [0.04, 0.10, 0.22, 0.28], Descending),
            ("LM", [0.04, 0.10, 0.22, 0.28], Descending),
            ("RM", [0.04, 0.10, 0.22, 0.28], Descending),
            ("LR", [0.05, 0.09, 0.12, 0.18], Ascending),
            ("RR", [0.05, 0.09, 0.12, 0.18], Ascending),
            ("LP", [0.03, 0.05, 0.07, 0.1], Ascending),
            ("RP", [0.03, 0.05, 0.07, 0.1], Ascending),
        ];

        let mut table = Self {
            rules: rules
                .into_iter()
                .map(|(name, thresholds, direction)| {
                    (
                        name.to_string(),
                        RatingRule {
                            thresholds,
                            direction,
                        },
                    )
                })
                .collect(),
        };

        for hand in ["LH", "RH"] {
            table.insert(
                hand,
                RatingRule {
                    thresholds: [0.02, 0.05, 0.08, 0.12],
                    direction: DistanceFromHalf,
                },
            );
        }
        table
    }
}

impl RatingTable {
    pub fn empty() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, name: &str, rule: RatingRule) {
        self.rules.insert(name.to_string(), rule);
    }

    pub fn get(&self, name: &str) -> Option<&RatingRule> {
        self.rules.get(name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// `None` for stats without a rule (thumbs, for instance).
    pub fn rate(&self, name: &str, value: f64) -> Option<Severity> {
        self.get(name).map(|r| r.rate(value))
    }

    /// Entries in `other` replace same-named rules.
    pub fn merge(&mut self, other: RatingTable) {
        self.rules.extend(other.rules);
    }

    /// Reads overrides from JSON and layers them over the built-in table.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> KsResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            KeyStatError::Config(format!("Failed to read ratings file {:?}: {}", path, e))
        })?;
        let overrides: RatingTable = serde_json::from_str(&content)?;
        overrides.validate()?;

        let mut table = Self::default();
        table.merge(overrides);
        Ok(table)
    }

    fn validate(&self) -> KsResult<()> {
        for (name, rule) in &self.rules {
            let t = &rule.thresholds;
            if t.windows(2).any(|w| w[0] > w[1]) {
                return Err(KeyStatError::Config(format!(
                    "Thresholds for '{}' must be ascending: {:?}",
                    name, t
                )));
            }
        }
        Ok(())
    }
}
