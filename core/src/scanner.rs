//! Extremal difference scanner.
//!
//! For every draft order (Partition) and every contrast in the table, find
//! the simulation (Trial) whose weighted score difference is largest.
//!
//! RULES:
//!   - Partitions and Trials keep first-encounter order from the input.
//!   - A Trial is eligible for a contrast only if every required player
//!     slot has a numeric score. Nothing is imputed.
//!   - Strict maximum; on an exact tie the earlier Trial wins.
//!   - Pure: no I/O, input is only borrowed.

use crate::{
    contrast::{Contrast, CONTRASTS},
    record::Record,
    table::{fmt2, TextTable},
    types::{PlayerSlot, SimId},
};
use serde::Serialize;
use std::collections::HashMap;

// ── Grouping ─────────────────────────────────────────────────────────────────

/// All rows sharing one (draft order, sim) pair.
#[derive(Debug)]
pub struct Trial<'a> {
    pub sim: SimId,
    pub rows: Vec<&'a Record>,
}

impl Trial<'_> {
    /// Score of the first row for `player`, if that row is scored.
    pub fn score(&self, player: PlayerSlot) -> Option<f64> {
        self.rows
            .iter()
            .find(|r| r.player == player)
            .and_then(|r| r.total_score)
    }

    /// Scores for slots `1..=contrast.players`, or `None` if any is missing.
    pub fn scores_for(&self, contrast: &Contrast) -> Option<Vec<f64>> {
        contrast.slots().map(|p| self.score(p)).collect()
    }
}

#[derive(Debug)]
pub struct Partition<'a> {
    pub draft_order: &'a str,
    pub trials: Vec<Trial<'a>>,
}

/// Group records by draft order, then by sim, both in first-encounter order.
pub fn group_partitions(records: &[Record]) -> Vec<Partition<'_>> {
    let mut partitions: Vec<Partition<'_>> = Vec::new();
    let mut partition_index: HashMap<&str, usize> = HashMap::new();
    let mut trial_index: Vec<HashMap<SimId, usize>> = Vec::new();

    for record in records {
        let p = *partition_index
            .entry(record.draft_order.as_str())
            .or_insert_with(|| {
                partitions.push(Partition {
                    draft_order: record.draft_order.as_str(),
                    trials: Vec::new(),
                });
                trial_index.push(HashMap::new());
                partitions.len() - 1
            });

        let partition = &mut partitions[p];
        let t = *trial_index[p].entry(record.sim).or_insert_with(|| {
            partition.trials.push(Trial {
                sim: record.sim,
                rows: Vec::new(),
            });
            partition.trials.len() - 1
        });

        let trial = &mut partition.trials[t];
        if trial.rows.iter().any(|r| r.player == record.player) {
            log::warn!(
                "scanner: draft order {} sim {} has duplicate player {}; first row is scored",
                record.draft_order,
                record.sim,
                record.player
            );
        }
        trial.rows.push(record);
    }

    partitions
}

// ── Findings ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailRow {
    pub player: PlayerSlot,
    pub total_score: Option<f64>,
    pub leader: String,
    pub lore: String,
}

/// The winning Trial for one (draft order, contrast) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanFinding {
    pub draft_order: String,
    pub contrast: &'static str,
    pub formula: &'static str,
    pub players: usize,
    pub sim: SimId,
    pub value: f64,
    /// Scores of players `1..=players`, in slot order.
    pub scores: Vec<f64>,
    /// Every row of the winning Trial, sorted by player.
    pub details: Vec<DetailRow>,
}

impl ScanFinding {
    fn from_trial(
        draft_order: &str,
        contrast: &Contrast,
        trial: &Trial<'_>,
        value: f64,
        scores: Vec<f64>,
    ) -> Self {
        let mut rows = trial.rows.clone();
        rows.sort_by_key(|r| r.player);
        let details = rows
            .into_iter()
            .map(|r| DetailRow {
                player: r.player,
                total_score: r.total_score,
                leader: r.leader.clone(),
                lore: r.lore.clone(),
            })
            .collect();

        Self {
            draft_order: draft_order.to_string(),
            contrast: contrast.name,
            formula: contrast.formula,
            players: contrast.players,
            sim: trial.sim,
            value,
            scores,
            details,
        }
    }

    /// Text block for this finding. `with_header` prefixes the
    /// "Draft Order" line that opens each (draft order, N) group.
    pub fn render(&self, with_header: bool) -> String {
        let mut out = String::new();
        if with_header {
            out.push_str(&format!(
                "Draft Order: {} ({} players)\n",
                self.draft_order, self.players
            ));
        }
        out.push_str(&format!(
            "Sim #{}: {} = {:.2}\n",
            self.sim, self.formula, self.value
        ));

        let scores: Vec<String> = self
            .scores
            .iter()
            .enumerate()
            .map(|(i, s)| format!("p{}={s:.2}", i + 1))
            .collect();
        out.push_str(&format!("Scores: {}\n", scores.join(", ")));

        let mut table = TextTable::new(["player", "totalScore", "leader", "lore"]);
        for d in &self.details {
            table.push_row(vec![
                d.player.to_string(),
                fmt2(d.total_score),
                d.leader.clone(),
                d.lore.clone(),
            ]);
        }
        out.push_str("Draft details:\n");
        out.push_str(&table.render());
        out
    }
}

// ── Scan ─────────────────────────────────────────────────────────────────────

/// Run the built-in contrast table over `records`.
pub fn scan(records: &[Record]) -> Vec<ScanFinding> {
    scan_with(records, &CONTRASTS)
}

/// Run an arbitrary contrast table. Output is ordered by partition
/// (first encounter), then by position in `contrasts`.
pub fn scan_with(records: &[Record], contrasts: &[Contrast]) -> Vec<ScanFinding> {
    let partitions = group_partitions(records);
    let findings: Vec<ScanFinding> = partitions
        .iter()
        .flat_map(|p| scan_partition(p, contrasts))
        .collect();
    log::info!(
        "scanner: {} partitions, {} findings",
        partitions.len(),
        findings.len()
    );
    findings
}

pub fn scan_partition(partition: &Partition<'_>, contrasts: &[Contrast]) -> Vec<ScanFinding> {
    contrasts
        .iter()
        .filter_map(|contrast| {
            let finding = best_trial(partition, contrast);
            if finding.is_none() {
                log::debug!(
                    "scanner: draft order {} has no trial eligible for {} ({} players)",
                    partition.draft_order,
                    contrast.name,
                    contrast.players
                );
            }
            finding
        })
        .collect()
}

/// Argmax of `contrast` over the eligible Trials of `partition`.
pub fn best_trial(partition: &Partition<'_>, contrast: &Contrast) -> Option<ScanFinding> {
    let mut best: Option<(&Trial<'_>, f64, Vec<f64>)> = None;

    for trial in &partition.trials {
        let Some(scores) = trial.scores_for(contrast) else {
            continue;
        };
        let value = contrast.evaluate(&scores);
        // Strict comparison keeps the first Trial on ties.
        let better = match &best {
            None => true,
            Some((_, best_value, _)) => value > *best_value,
        };
        if better {
            best = Some((trial, value, scores));
        }
    }

    best.map(|(trial, value, scores)| {
        ScanFinding::from_trial(partition.draft_order, contrast, trial, value, scores)
    })
}

/// Render findings as text blocks, one per finding, opening a new
/// "Draft Order" header whenever the (draft order, N) group changes.
pub fn render_findings(findings: &[ScanFinding]) -> Vec<String> {
    let mut previous: Option<(&str, usize)> = None;
    findings
        .iter()
        .map(|f| {
            let group = (f.draft_order.as_str(), f.players);
            let with_header = previous != Some(group);
            previous = Some(group);
            f.render(with_header)
        })
        .collect()
}
