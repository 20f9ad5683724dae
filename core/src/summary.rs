//! Descriptive statistics for the report's summary page.
//!
//! This module:
//!   1. Averages each player slot's score per draft order
//!   2. Summarizes the score distribution per draft order
//!   3. Picks the largest deviations from the draft-order mean
//!
//! Unscored records are ignored by every statistic but still define which
//! draft orders and player slots appear.

use crate::{
    record::Record,
    table::{fmt2, TextTable},
    types::{DraftOrder, PlayerSlot},
};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

// ── Public types ─────────────────────────────────────────────────────────────

/// Mean score per (draft order, player), draft orders and players sorted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerAverages {
    pub players: Vec<PlayerSlot>,
    pub rows: Vec<PlayerAverageRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerAverageRow {
    pub draft_order: DraftOrder,
    /// Aligned with `PlayerAverages::players`.
    pub means: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSummary {
    pub draft_order: DraftOrder,
    pub mean: Option<f64>,
    /// Sample standard deviation (n - 1); `None` below two scores.
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutlierRow {
    pub player: PlayerSlot,
    pub total_score: f64,
    pub diff_from_mean: f64,
    pub leader: String,
    pub lore: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderOutliers {
    pub draft_order: DraftOrder,
    /// Largest positive deviations first.
    pub above: Vec<OutlierRow>,
    /// Largest negative deviations first.
    pub below: Vec<OutlierRow>,
}

// ── Averages ─────────────────────────────────────────────────────────────────

pub fn average_by_player(records: &[Record]) -> PlayerAverages {
    let players: BTreeSet<PlayerSlot> = records.iter().map(|r| r.player).collect();
    let mut sums: BTreeMap<&str, BTreeMap<PlayerSlot, (f64, usize)>> = BTreeMap::new();

    for r in records {
        let cells = sums.entry(r.draft_order.as_str()).or_default();
        if let Some(score) = r.total_score {
            let cell = cells.entry(r.player).or_insert((0.0, 0));
            cell.0 += score;
            cell.1 += 1;
        }
    }

    let rows = sums
        .into_iter()
        .map(|(order, cells)| PlayerAverageRow {
            draft_order: order.to_string(),
            means: players
                .iter()
                .map(|p| cells.get(p).map(|(sum, n)| sum / *n as f64))
                .collect(),
        })
        .collect();

    PlayerAverages {
        players: players.into_iter().collect(),
        rows,
    }
}

impl PlayerAverages {
    pub fn render(&self) -> String {
        let headers = std::iter::once("draftOrder".to_string())
            .chain(self.players.iter().map(|p| p.to_string()));
        let mut table = TextTable::new(headers);
        for row in &self.rows {
            let mut cells = vec![row.draft_order.clone()];
            cells.extend(row.means.iter().map(|m| fmt2(*m)));
            table.push_row(cells);
        }
        table.render()
    }
}

// ── Summary ──────────────────────────────────────────────────────────────────

pub fn summarize_by_order(records: &[Record]) -> Vec<OrderSummary> {
    let mut scores: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for r in records {
        let bucket = scores.entry(r.draft_order.as_str()).or_default();
        if let Some(score) = r.total_score {
            bucket.push(score);
        }
    }

    scores
        .into_iter()
        .map(|(order, values)| describe(order, &values))
        .collect()
}

fn describe(draft_order: &str, values: &[f64]) -> OrderSummary {
    let count = values.len();
    let mean = mean(values);
    let std = match (mean, count) {
        (Some(m), n) if n >= 2 => {
            let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
            Some((ss / (n - 1) as f64).sqrt())
        }
        _ => None,
    };

    OrderSummary {
        draft_order: draft_order.to_string(),
        mean,
        std,
        min: values.iter().copied().reduce(f64::min),
        max: values.iter().copied().reduce(f64::max),
        count,
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

pub fn render_summary(summary: &[OrderSummary]) -> String {
    let mut table = TextTable::new(["draftOrder", "mean", "std", "min", "max", "count"]);
    for s in summary {
        table.push_row(vec![
            s.draft_order.clone(),
            fmt2(s.mean),
            fmt2(s.std),
            fmt2(s.min),
            fmt2(s.max),
            s.count.to_string(),
        ]);
    }
    table.render()
}

// ── Outliers ─────────────────────────────────────────────────────────────────

/// Top and bottom `k` deviations from the mean, per draft order in
/// first-encounter order. Ties keep input order.
pub fn detect_outliers(records: &[Record], k: usize) -> Vec<OrderOutliers> {
    let mut orders: Vec<&str> = Vec::new();
    let mut by_order: BTreeMap<&str, Vec<&Record>> = BTreeMap::new();
    for r in records {
        let rows = by_order.entry(r.draft_order.as_str()).or_insert_with(|| {
            orders.push(r.draft_order.as_str());
            Vec::new()
        });
        rows.push(r);
    }

    orders
        .into_iter()
        .map(|order| {
            let rows = by_order.get(order).map(Vec::as_slice).unwrap_or(&[]);
            outliers_for(order, rows, k)
        })
        .collect()
}

fn outliers_for(draft_order: &str, rows: &[&Record], k: usize) -> OrderOutliers {
    let scored: Vec<(&Record, f64)> = rows
        .iter()
        .filter_map(|r| r.total_score.map(|s| (*r, s)))
        .collect();
    let values: Vec<f64> = scored.iter().map(|(_, s)| *s).collect();

    let mut deviations: Vec<OutlierRow> = match mean(&values) {
        Some(m) => scored
            .iter()
            .map(|(r, s)| OutlierRow {
                player: r.player,
                total_score: *s,
                diff_from_mean: s - m,
                leader: r.leader.clone(),
                lore: r.lore.clone(),
            })
            .collect(),
        None => Vec::new(),
    };

    let mut above = deviations.clone();
    above.sort_by(|a, b| b.diff_from_mean.total_cmp(&a.diff_from_mean));
    above.truncate(k);

    deviations.sort_by(|a, b| a.diff_from_mean.total_cmp(&b.diff_from_mean));
    deviations.truncate(k);

    OrderOutliers {
        draft_order: draft_order.to_string(),
        above,
        below: deviations,
    }
}

pub fn render_outlier_rows(rows: &[OutlierRow]) -> String {
    let mut table = TextTable::new(["player", "totalScore", "diff_from_mean", "leader", "lore"]);
    for r in rows {
        table.push_row(vec![
            r.player.to_string(),
            fmt2(Some(r.total_score)),
            fmt2(Some(r.diff_from_mean)),
            r.leader.clone(),
            r.lore.clone(),
        ]);
    }
    table.render()
}

impl OrderOutliers {
    pub fn render(&self, k: usize) -> String {
        format!(
            "Draft Order: {}\nTop {k} Positive Outliers (Biggest Above Mean):\n{}\nTop {k} Negative Outliers (Biggest Below Mean):\n{}",
            self.draft_order,
            render_outlier_rows(&self.above),
            render_outlier_rows(&self.below),
        )
    }
}
