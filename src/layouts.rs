use crate::consts::KEY_COUNT;
use crate::error::{KeyStatError, KsResult};
use crate::geometry::Position;
use std::collections::HashMap;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::warn;

/// Bidirectional character <-> slot index for one layout.
///
/// Built fresh per analysis. When a character occupies several slots the
/// last one wins for lookups; `chars` still records every slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutMapping {
    chars: Vec<char>,
    positions: HashMap<char, Position>,
}

impl LayoutMapping {
    pub fn new(layout: &str) -> KsResult<Self> {
        let chars: Vec<char> = layout.chars().collect();
        if chars.len() != KEY_COUNT {
            return Err(KeyStatError::InvalidLayout {
                expected: KEY_COUNT,
                found: chars.len(),
            });
        }

        let mut positions = HashMap::with_capacity(KEY_COUNT);
        for (i, &c) in chars.iter().enumerate() {
            if let Some(prev) = positions.insert(c, i) {
                warn!(
                    "Character '{}' appears at slots {} and {}; keeping {}",
                    c, prev, i, i
                );
            }
        }

        Ok(Self { chars, positions })
    }

    /// Lowercases the layout before building the mapping.
    ///
    /// A key whose lowercase form is several characters (`İ` becomes
    /// `i̇`) changes the key count, so the layout is rejected with
    /// [`KeyStatError::InvalidLayout`] instead of being truncated.
    pub fn new_lowercase(layout: &str) -> KsResult<Self> {
        let lowered: String = layout.chars().flat_map(char::to_lowercase).collect();
        Self::new(&lowered)
    }

    #[inline(always)]
    pub fn position(&self, c: char) -> Option<Position> {
        self.positions.get(&c).copied()
    }

    pub fn char_at(&self, pos: Position) -> Option<char> {
        self.chars.get(pos).copied()
    }

    /// Resolves every character of `gram`, or `None` if any is missing.
    pub fn resolve(&self, gram: &str) -> Option<Vec<Position>> {
        gram.chars().map(|c| self.position(c)).collect()
    }

    pub fn contains(&self, c: char) -> bool {
        self.positions.contains_key(&c)
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }
}

impl FromStr for LayoutMapping {
    type Err = KeyStatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum KnownLayout {
    Qwerty,
    Dvorak,
    Colemak,
    #[strum(to_string = "colemak_dh", serialize = "colemak-dh")]
    ColemakDH,
    Workman,
    #[strum(to_string = "jcuken", serialize = "йцукен")]
    Jcuken,
}

impl KnownLayout {
    // Rows of 13/13/11/10 keys, number row first.
    pub fn get_str(&self) -> &'static str {
        match self {
            Self::Qwerty => concat!(
                "`1234567890-=",
                "qwertyuiop[]\\",
                "asdfghjkl;'",
                "zxcvbnm,./"
            ),
            Self::Dvorak => concat!(
                "`1234567890[]",
                "',.pyfgcrl/=\\",
                "aoeuidhtns-",
                ";qjkxbmwvz"
            ),
            Self::Colemak => concat!(
                "`1234567890-=",
                "qwfpgjluy;[]\\",
                "arstdhneio'",
                "zxcvbkm,./"
            ),
            Self::ColemakDH => concat!(
                "`1234567890-=",
                "qwfpbjluy;[]\\",
                "arstgmneio'",
                "zxcdvkh,./"
            ),
            Self::Workman => concat!(
                "`1234567890-=",
                "qdrwbjfup;[]\\",
                "ashtgyneoi'",
                "zxmcvkl,./"
            ),
            Self::Jcuken => concat!(
                "ё1234567890-=",
                "йцукенгшщзхъ\\",
                "фывапролджэ",
                "ячсмитьбю."
            ),
        }
    }

    pub fn mapping(&self) -> KsResult<LayoutMapping> {
        LayoutMapping::new(self.get_str())
    }
}

pub fn get_all_layouts() -> Vec<(KnownLayout, &'static str)> {
    KnownLayout::iter().map(|l| (l, l.get_str())).collect()
}

/// Accepts either a known layout name or a literal 47-key string.
pub fn resolve_layout(input: &str) -> KsResult<LayoutMapping> {
    match KnownLayout::from_str(input.trim()) {
        Ok(known) => known.mapping(),
        Err(_) => LayoutMapping::new_lowercase(input),
    }
}
