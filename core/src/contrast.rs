//! The fixed family of score contrasts.
//!
//! A contrast is a weighted sum over player slots `1..=players`.
//! The table order is the report order: N=3 before N=4, and within
//! N=4 `diff4`, `diff3`, `diff2`.

use crate::types::PlayerSlot;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Contrast {
    pub name: &'static str,
    /// Required player count N. Slots `1..=players` must all be scored.
    pub players: usize,
    /// `weights[i]` applies to player `i + 1`. Length equals `players`.
    pub weights: &'static [i32],
    /// Formula as printed in the report.
    pub formula: &'static str,
}

pub const CONTRASTS: [Contrast; 4] = [
    Contrast {
        name: "diff3",
        players: 3,
        weights: &[-1, -1, 1],
        formula: "p3 - (p1+p2)",
    },
    Contrast {
        name: "diff4",
        players: 4,
        weights: &[-1, -1, -1, 1],
        formula: "p4 - (p1+p2+p3)",
    },
    Contrast {
        name: "diff3",
        players: 4,
        weights: &[-1, -1, 1, 0],
        formula: "p3 - (p1+p2)",
    },
    Contrast {
        name: "diff2",
        players: 4,
        weights: &[-1, 1, 0, 0],
        formula: "p2 - p1",
    },
];

impl Contrast {
    /// Evaluate against scores for slots `1..=players`, in slot order.
    pub fn evaluate(&self, scores: &[f64]) -> f64 {
        debug_assert_eq!(scores.len(), self.weights.len());
        self.weights
            .iter()
            .zip(scores)
            .map(|(w, s)| f64::from(*w) * s)
            .sum()
    }

    /// The player slots this contrast needs.
    pub fn slots(&self) -> impl Iterator<Item = PlayerSlot> {
        1..=self.players as PlayerSlot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_cover_required_players() {
        for c in &CONTRASTS {
            assert_eq!(c.weights.len(), c.players, "{} ({} players)", c.name, c.players);
        }
    }

    #[test]
    fn evaluate_applies_weights_by_slot() {
        assert_eq!(CONTRASTS[0].evaluate(&[10.0, 10.0, 5.0]), -15.0);
        assert_eq!(CONTRASTS[1].evaluate(&[1.0, 2.0, 3.0, 10.0]), 4.0);
        assert_eq!(CONTRASTS[2].evaluate(&[1.0, 2.0, 3.0, 10.0]), 0.0);
        assert_eq!(CONTRASTS[3].evaluate(&[1.0, 2.0, 3.0, 10.0]), 1.0);
    }

    #[test]
    fn table_order_is_three_then_four() {
        let counts: Vec<usize> = CONTRASTS.iter().map(|c| c.players).collect();
        assert_eq!(counts, vec![3, 4, 4, 4]);
    }
}
