/// Number of physical key slots on the board.
pub const KEY_COUNT: usize = 47;

/// Slots per row, top to bottom.
pub const ROW_LENGTHS: [usize; 4] = [13, 13, 11, 10];

/// First slot index of each row.
pub const ROW_STARTS: [usize; 4] = [0, 13, 26, 37];

/// Default number of top contributors kept per statistic.
pub const DEFAULT_TOP_N: usize = 10;

/// Conventional corpus file names inside a corpus directory.
pub const MONOGRAMS_FILE: &str = "monograms.json";
pub const BIGRAMS_FILE: &str = "bigrams.json";
pub const SKIPGRAMS_FILE: &str = "skipgrams.json";
pub const TRIGRAMS_FILE: &str = "trigrams.json";
pub const ENDINGS_FILE: &str = "endings.json";
pub const PREFIXES_FILE: &str = "prefixes.json";
