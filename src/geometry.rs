use crate::consts::{KEY_COUNT, ROW_STARTS};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Index of a physical key slot, row-major over rows of 13/13/11/10.
pub type Position = usize;

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
pub enum Finger {
    #[strum(serialize = "LP")]
    #[serde(rename = "LP")]
    LeftPinky = 0,
    #[strum(serialize = "LR")]
    #[serde(rename = "LR")]
    LeftRing = 1,
    #[strum(serialize = "LM")]
    #[serde(rename = "LM")]
    LeftMiddle = 2,
    #[strum(serialize = "LI")]
    #[serde(rename = "LI")]
    LeftIndex = 3,
    #[strum(serialize = "LT")]
    #[serde(rename = "LT")]
    LeftThumb = 4,
    #[strum(serialize = "RT")]
    #[serde(rename = "RT")]
    RightThumb = 5,
    #[strum(serialize = "RI")]
    #[serde(rename = "RI")]
    RightIndex = 6,
    #[strum(serialize = "RM")]
    #[serde(rename = "RM")]
    RightMiddle = 7,
    #[strum(serialize = "RR")]
    #[serde(rename = "RR")]
    RightRing = 8,
    #[strum(serialize = "RP")]
    #[serde(rename = "RP")]
    RightPinky = 9,
}

impl Finger {
    pub const ALL: [Finger; 10] = [
        Finger::LeftPinky,
        Finger::LeftRing,
        Finger::LeftMiddle,
        Finger::LeftIndex,
        Finger::LeftThumb,
        Finger::RightThumb,
        Finger::RightIndex,
        Finger::RightMiddle,
        Finger::RightRing,
        Finger::RightPinky,
    ];

    #[inline(always)]
    pub const fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    pub fn hand(self) -> Hand {
        if self.id() < 5 {
            Hand::Left
        } else {
            Hand::Right
        }
    }

    #[inline(always)]
    pub fn is_pinky(self) -> bool {
        matches!(self, Finger::LeftPinky | Finger::RightPinky)
    }

    #[inline(always)]
    pub fn is_ring(self) -> bool {
        matches!(self, Finger::LeftRing | Finger::RightRing)
    }

    /// Fingers whose row offsets against a neighbour count as scissors.
    #[inline(always)]
    pub fn is_scissor_prone(self) -> bool {
        matches!(
            self,
            Finger::LeftRing | Finger::LeftMiddle | Finger::RightMiddle | Finger::RightRing
        )
    }
}

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
pub enum Hand {
    #[strum(serialize = "LH")]
    #[serde(rename = "LH")]
    Left = 0,
    #[strum(serialize = "RH")]
    #[serde(rename = "RH")]
    Right = 1,
}

impl Hand {
    pub fn fingers(self) -> impl Iterator<Item = Finger> {
        Finger::ALL.into_iter().filter(move |f| f.hand() == self)
    }
}

#[rustfmt::skip]
pub const FINGER_MAP: [u8; KEY_COUNT] = [
    0, 0, 1, 2, 2, 3, 3, 6, 7, 7, 8, 8, 9,
    0, 1, 2, 3, 3, 6, 6, 7, 8, 9, 9, 9, 9,
    0, 1, 2, 3, 3, 6, 6, 7, 8, 9, 9,
    0, 1, 2, 3, 3, 6, 6, 7, 8, 9,
];

#[rustfmt::skip]
pub const COLUMNS: [u8; KEY_COUNT] = [
    0, 0, 1, 2, 2, 3, 4, 6, 6, 7, 8, 9, 10,
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12,
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10,
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9,
];

#[rustfmt::skip]
pub const HAND_MAP: [u8; KEY_COUNT] = [
    0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1,
    0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1,
    0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1,
    0, 0, 0, 0, 0, 1, 1, 1, 1, 1,
];

/// Column pairs that force a lateral reach within one hand. Matched in both orders.
pub const LATERAL_STRETCH_PAIRS: [(u8, u8); 9] = [
    (2, 4),
    (5, 7),
    (5, 9),
    (5, 10),
    (5, 11),
    (5, 12),
    (8, 10),
    (8, 11),
    (8, 12),
];

/// Columns reached by stretching an index finger inward.
pub const CENTER_COLUMNS: [u8; 2] = [4, 5];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyNode {
    pub pos: Position,
    pub hand: Hand,
    pub finger: Finger,
    pub row: u8,
    pub col: u8,
}

impl KeyNode {
    pub fn at(pos: Position) -> Self {
        Self {
            pos,
            hand: hand(pos),
            finger: finger(pos),
            row: row(pos),
            col: column(pos),
        }
    }

    #[inline(always)]
    pub fn is_center(&self) -> bool {
        CENTER_COLUMNS.contains(&self.col)
    }
}

#[inline(always)]
pub fn is_valid(pos: Position) -> bool {
    pos < KEY_COUNT
}

#[inline(always)]
pub fn finger_id(pos: Position) -> u8 {
    FINGER_MAP[pos]
}

pub fn finger(pos: Position) -> Finger {
    // Every FINGER_MAP entry is < 10.
    Finger::ALL[FINGER_MAP[pos] as usize]
}

#[inline(always)]
pub fn column(pos: Position) -> u8 {
    COLUMNS[pos]
}

pub fn hand(pos: Position) -> Hand {
    if HAND_MAP[pos] == 0 {
        Hand::Left
    } else {
        Hand::Right
    }
}

/// Row derived from slot ranges, not a table.
pub fn row(pos: Position) -> u8 {
    if pos < ROW_STARTS[1] {
        0
    } else if pos < ROW_STARTS[2] {
        1
    } else if pos < ROW_STARTS[3] {
        2
    } else {
        3
    }
}

pub fn is_lateral_stretch(col1: u8, col2: u8) -> bool {
    LATERAL_STRETCH_PAIRS
        .iter()
        .any(|&(a, b)| (a == col1 && b == col2) || (a == col2 && b == col1))
}

/// All key slots in table order.
pub fn keys() -> impl Iterator<Item = KeyNode> {
    (0..KEY_COUNT).map(KeyNode::at)
}
