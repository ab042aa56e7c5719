//! Ergonomic categories for 2- and 3-key sequences.
//!
//! Bigram tags describe a single motion (same finger, stretch, scissor).
//! Trigram tags describe hand flow (alternation, rolls, redirects).

use crate::error::{KeyStatError, KsResult};
use crate::geometry::{self, KeyNode, Position};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
pub enum Category {
    #[strum(serialize = "SF")]
    #[serde(rename = "SF")]
    SameFinger,
    #[strum(serialize = "CC")]
    #[serde(rename = "CC")]
    CenterColumn,
    #[strum(serialize = "DP")]
    #[serde(rename = "DP")]
    DoublePinky,
    #[strum(serialize = "LS")]
    #[serde(rename = "LS")]
    LateralStretch,
    #[strum(serialize = "HS")]
    #[serde(rename = "HS")]
    HalfScissor,
    #[strum(serialize = "WP")]
    #[serde(rename = "WP")]
    WingedPinky,
    #[strum(serialize = "FS")]
    #[serde(rename = "FS")]
    FullScissor,
    #[strum(serialize = "FWP")]
    #[serde(rename = "FWP")]
    FullWingedPinky,
    #[strum(serialize = "ALT")]
    #[serde(rename = "ALT")]
    Alternate,
    #[strum(serialize = "ROL")]
    #[serde(rename = "ROL")]
    Roll,
    #[strum(serialize = "ONE")]
    #[serde(rename = "ONE")]
    OneHand,
    #[strum(serialize = "RED")]
    #[serde(rename = "RED")]
    Redirect,
}

impl Category {
    #[inline(always)]
    fn bit(self) -> u16 {
        1 << (self as u16)
    }

    /// Number of keys in the sequences this category applies to.
    pub fn order(self) -> usize {
        match self {
            Self::Alternate | Self::Roll | Self::OneHand | Self::Redirect => 3,
            _ => 2,
        }
    }

    /// Categories that make a morpheme uninteresting (it types across both hands).
    pub fn is_cross_hand(self) -> bool {
        matches!(self, Self::Alternate | Self::Roll)
    }
}

/// A set of categories. Iterates in declaration order of [`Category`].
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CategorySet(u16);

impl CategorySet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, cat: Category) {
        self.0 |= cat.bit();
    }

    pub fn contains(&self, cat: Category) -> bool {
        self.0 & cat.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        Category::iter().filter(move |c| self.contains(*c))
    }

    pub fn any_cross_hand(&self) -> bool {
        self.iter().any(Category::is_cross_hand)
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<T: IntoIterator<Item = Category>>(iter: T) -> Self {
        let mut set = Self::empty();
        for c in iter {
            set.insert(c);
        }
        set
    }
}

impl fmt::Debug for CategorySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for CategorySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = self.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", labels.join(" "))
    }
}

impl Serialize for CategorySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for c in self.iter() {
            seq.serialize_element(&c)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for CategorySet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let cats = Vec::<Category>::deserialize(deserializer)?;
        Ok(cats.into_iter().collect())
    }
}

/// Classifies a sequence of 2 or 3 positions. Any other length is rejected.
pub fn classify(seq: &[Position]) -> KsResult<CategorySet> {
    if let Some(&bad) = seq.iter().find(|&&p| !geometry::is_valid(p)) {
        return Err(KeyStatError::Validation(format!(
            "Position {} is outside the board",
            bad
        )));
    }

    match *seq {
        [a, b] => Ok(classify_bigram(&KeyNode::at(a), &KeyNode::at(b))),
        [a, b, c] => Ok(classify_trigram(
            &KeyNode::at(a),
            &KeyNode::at(b),
            &KeyNode::at(c),
        )),
        _ => Err(KeyStatError::UnsupportedSequence(seq.len())),
    }
}

pub fn classify_bigram(k1: &KeyNode, k2: &KeyNode) -> CategorySet {
    let mut tags = CategorySet::empty();

    if k1.finger == k2.finger && k1.pos != k2.pos {
        tags.insert(Category::SameFinger);
        if k1.is_center() || k2.is_center() {
            tags.insert(Category::CenterColumn);
        } else if k1.finger.is_pinky() {
            tags.insert(Category::DoublePinky);
        }
        return tags;
    }

    let same_hand = k1.hand == k2.hand;
    // Negative when the first key sits on a higher row than the second.
    let d = k1.row as i8 - k2.row as i8;

    if same_hand && geometry::is_lateral_stretch(k1.col, k2.col) {
        tags.insert(Category::LateralStretch);
    }

    if d == -1 && is_scissor(k1, k2, same_hand, true) {
        tags.insert(Category::HalfScissor);
    } else if d == 1 && is_scissor(k1, k2, same_hand, false) {
        tags.insert(Category::HalfScissor);
    }

    if same_hand && ((d == -1 && is_wing(k1, k2)) || (d == 1 && is_wing(k2, k1))) {
        tags.insert(Category::WingedPinky);
    }

    if d <= -2 && is_scissor(k1, k2, same_hand, true) {
        tags.insert(Category::FullScissor);
    } else if d >= 2 && is_scissor(k1, k2, same_hand, false) {
        tags.insert(Category::FullScissor);
    }

    if same_hand && ((d <= -2 && is_wing(k1, k2)) || (d >= 2 && is_wing(k2, k1))) {
        tags.insert(Category::FullWingedPinky);
    }

    tags
}

/// `upper_first` is true when `k1` sits on the higher row.
fn is_scissor(k1: &KeyNode, k2: &KeyNode, same_hand: bool, upper_first: bool) -> bool {
    use crate::geometry::Finger::{LeftIndex, LeftMiddle};

    if upper_first {
        (same_hand && k2.finger.is_scissor_prone())
            || (k1.finger == LeftIndex && k2.finger == LeftMiddle)
    } else {
        (same_hand && k1.finger.is_scissor_prone())
            || (k1.finger == LeftMiddle && k2.finger == LeftIndex)
    }
}

/// Pinky on the higher row, ring finger on the lower row.
fn is_wing(upper: &KeyNode, lower: &KeyNode) -> bool {
    upper.finger.is_pinky() && lower.finger.is_ring()
}

pub fn classify_trigram(k1: &KeyNode, k2: &KeyNode, k3: &KeyNode) -> CategorySet {
    let mut tags = CategorySet::empty();

    let hands: HashSet<_> = [k1.hand, k2.hand, k3.hand].into_iter().collect();
    let fingers: HashSet<_> = [k1.finger, k2.finger, k3.finger].into_iter().collect();
    let ordered = is_monotonic(k1, k2, k3);

    if k1.hand == k3.hand && k1.hand != k2.hand {
        tags.insert(Category::Alternate);
    }

    if hands.len() == 2 && fingers.len() == 3 && k1.hand != k3.hand {
        tags.insert(Category::Roll);
    }

    if hands.len() == 1 && ordered {
        tags.insert(Category::OneHand);
    }

    if hands.len() == 1 && fingers.len() == 3 && !ordered {
        tags.insert(Category::Redirect);
    }

    tags
}

fn is_monotonic(k1: &KeyNode, k2: &KeyNode, k3: &KeyNode) -> bool {
    let (f1, f2, f3) = (k1.finger.id(), k2.finger.id(), k3.finger.id());
    (f1 < f2 && f2 < f3) || (f1 > f2 && f2 > f3)
}
