//! Shared primitive types used across the analysis.

/// Partition key: the draft order a simulation was run under.
pub type DraftOrder = String;

/// Identifies one simulated draft (a Trial) within a draft order.
pub type SimId = i64;

/// A participant slot, 1-based.
pub type PlayerSlot = u32;

/// Rows shown on each side of the outlier tables.
pub const OUTLIER_COUNT: usize = 3;
