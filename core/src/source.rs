//! Data source collaborator.
//!
//! RULE: Only this module touches the input file. Everything downstream
//! works on the `Vec<Record>` it returns.

use crate::{
    config::ColumnNames,
    error::{ReportError, ReportResult},
    record::{parse_score, Record},
};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::{fs::File, io::Read, path::PathBuf};

/// Anything that can hand over the full record set in one go.
pub trait RecordSource {
    /// Human-readable origin, used in log lines.
    fn describe(&self) -> String;

    fn load(&self) -> ReportResult<Vec<Record>>;
}

pub struct CsvSource {
    path: PathBuf,
    columns: ColumnNames,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>, columns: ColumnNames) -> Self {
        Self {
            path: path.into(),
            columns,
        }
    }
}

impl RecordSource for CsvSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> ReportResult<Vec<Record>> {
        let file = File::open(&self.path).map_err(|e| ReportError::DataUnavailable {
            path: self.describe(),
            reason: e.to_string(),
        })?;
        let records = csv_records_from_reader(file, &self.columns)?;
        log::info!("source: loaded {} records from {}", records.len(), self.describe());
        Ok(records)
    }
}

/// Column positions resolved against the header row.
struct ColumnIndex {
    draft_order: usize,
    sim: usize,
    player: usize,
    total_score: usize,
    leader: usize,
    lore: usize,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord, columns: &ColumnNames) -> ReportResult<Self> {
        let find = |name: &str| -> ReportResult<usize> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| ReportError::MissingColumn { name: name.into() })
        };
        Ok(Self {
            draft_order: find(&columns.draft_order)?,
            sim: find(&columns.sim)?,
            player: find(&columns.player)?,
            total_score: find(&columns.total_score)?,
            leader: find(&columns.leader)?,
            lore: find(&columns.lore)?,
        })
    }
}

/// Parse CSV text (header row required) into records.
pub fn csv_records_from_reader<R: Read>(
    reader: R,
    columns: &ColumnNames,
) -> ReportResult<Vec<Record>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let index = ColumnIndex::resolve(&headers, columns)?;

    let mut records = Vec::new();
    let mut unscored = 0usize;
    for row in rdr.records() {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let cell = |i: usize| row.get(i).unwrap_or("");

        let sim = parse_int(cell(index.sim), line, &columns.sim)?;
        let player = parse_int(cell(index.player), line, &columns.player)?;
        let total_score = parse_score(cell(index.total_score));
        if total_score.is_none() {
            unscored += 1;
        }

        records.push(Record {
            draft_order: cell(index.draft_order).to_string(),
            sim,
            player,
            total_score,
            leader: cell(index.leader).to_string(),
            lore: cell(index.lore).to_string(),
        });
    }

    if unscored > 0 {
        log::warn!("source: {unscored} records have no numeric {}", columns.total_score);
    }
    Ok(records)
}

fn parse_int<T: std::str::FromStr>(raw: &str, line: u64, column: &str) -> ReportResult<T> {
    raw.parse().map_err(|_| ReportError::InvalidField {
        line,
        column: column.to_string(),
        value: raw.to_string(),
    })
}
