//! One row of simulation output.

use crate::types::{PlayerSlot, SimId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub draft_order: String,
    pub sim: SimId,
    pub player: PlayerSlot,
    /// `None` when the source cell was empty, non-numeric or non-finite.
    pub total_score: Option<f64>,
    pub leader: String,
    pub lore: String,
}

impl Record {
    pub fn new(
        draft_order: impl Into<String>,
        sim: SimId,
        player: PlayerSlot,
        total_score: Option<f64>,
        leader: impl Into<String>,
        lore: impl Into<String>,
    ) -> Self {
        Self {
            draft_order: draft_order.into(),
            sim,
            player,
            total_score,
            leader: leader.into(),
            lore: lore.into(),
        }
    }

    /// Shorthand for a scored record with empty display fields.
    pub fn scored(draft_order: &str, sim: SimId, player: PlayerSlot, score: f64) -> Self {
        Self::new(draft_order, sim, player, Some(score), "", "")
    }
}

/// Lenient score parsing: anything that is not a finite number is "no score".
pub fn parse_score(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}
