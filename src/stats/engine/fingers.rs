use crate::corpus::NgramTable;
use crate::geometry::{self, Finger, Hand};
use crate::layouts::LayoutMapping;
use crate::stats::types::FingerUsage;
use std::collections::BTreeMap;
use tracing::debug;

/// Share of monogram weight carried by each finger and hand.
///
/// Unlike the n-gram families, characters missing from the layout are
/// left out of the denominator entirely.
pub fn finger_usage(mapping: &LayoutMapping, monograms: &NgramTable) -> FingerUsage {
    let mut loads: BTreeMap<Finger, f64> = Finger::ALL.iter().map(|&f| (f, 0.0)).collect();
    let mut total = 0.0;
    let mut skipped = 0usize;

    for (gram, weight) in monograms.iter() {
        let mut chars = gram.chars();
        let pos = match (chars.next(), chars.next()) {
            (Some(c), None) => mapping.position(c),
            _ => None,
        };

        let Some(pos) = pos else {
            skipped += 1;
            continue;
        };

        *loads.entry(geometry::finger(pos)).or_default() += weight;
        total += weight;
    }

    debug!(
        "Monograms: resolved weight {:.1}, {} skipped",
        total, skipped
    );

    if total > 0.0 {
        for load in loads.values_mut() {
            *load /= total;
        }
    }

    let hand_sum = |hand: Hand| -> f64 { hand.fingers().map(|f| loads[&f]).sum() };
    let left_hand = hand_sum(Hand::Left);
    let right_hand = hand_sum(Hand::Right);

    FingerUsage {
        fingers: loads,
        left_hand,
        right_hand,
        total,
    }
}
