//! Report assembly and the report sink collaborator.
//!
//! `DraftReport::build` is the one entry point that runs every analysis
//! over an in-memory record set. Sinks only ever see rendered sections.

use crate::{
    error::ReportResult,
    record::Record,
    scanner::{render_findings, scan, ScanFinding},
    summary::{
        average_by_player, detect_outliers, render_summary, summarize_by_order, OrderOutliers,
        OrderSummary, PlayerAverages,
    },
    types::OUTLIER_COUNT,
};
use serde::Serialize;
use std::{fs::File, io::Write, path::PathBuf};

pub const REPORT_TITLE: &str = "Draft Simulation Analysis";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DraftReport {
    pub record_count: usize,
    pub averages: PlayerAverages,
    pub summary: Vec<OrderSummary>,
    pub findings: Vec<ScanFinding>,
    pub outliers: Vec<OrderOutliers>,
}

/// One titled block of rendered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub title: String,
    pub body: String,
}

impl DraftReport {
    pub fn build(records: &[Record]) -> Self {
        let report = Self {
            record_count: records.len(),
            averages: average_by_player(records),
            summary: summarize_by_order(records),
            findings: scan(records),
            outliers: detect_outliers(records, OUTLIER_COUNT),
        };
        log::info!(
            "report: {} records, {} draft orders, {} findings",
            report.record_count,
            report.summary.len(),
            report.findings.len()
        );
        report
    }

    /// Sections in report order.
    pub fn sections(&self) -> Vec<ReportSection> {
        let findings = render_findings(&self.findings)
            .into_iter()
            .map(|block| format!("\n{block}"))
            .collect::<Vec<_>>()
            .join("\n");
        let outliers = self
            .outliers
            .iter()
            .map(|o| format!("\n{}", o.render(OUTLIER_COUNT)))
            .collect::<Vec<_>>()
            .join("\n");

        vec![
            ReportSection {
                title: "Average Final Score for Each Player (by Draft Order):".into(),
                body: self.averages.render(),
            },
            ReportSection {
                title: "Summary by Draft Order (Final Score):".into(),
                body: render_summary(&self.summary),
            },
            ReportSection {
                title: "Maximum Player-vs-Group Score Differences (by Draft Order):".into(),
                body: findings,
            },
            ReportSection {
                title: "Outliers (by Draft Order):".into(),
                body: outliers,
            },
        ]
    }

    /// The full plain-text report.
    pub fn render_text(&self) -> String {
        let mut out = format!("{REPORT_TITLE}\n");
        for section in self.sections() {
            out.push('\n');
            out.push_str(&section.render());
            out.push('\n');
        }
        out
    }

    pub fn to_json(&self) -> ReportResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Push every section through `sink`, then finish it.
    pub fn write_to(&self, sink: &mut dyn ReportSink) -> ReportResult<()> {
        for section in self.sections() {
            sink.write_section(&section)?;
        }
        sink.finish()
    }
}

impl ReportSection {
    pub fn render(&self) -> String {
        format!("{}\n{}", self.title, self.body)
    }
}

// ── Sinks ────────────────────────────────────────────────────────────────────

/// Consumer of rendered report sections.
pub trait ReportSink {
    fn write_section(&mut self, section: &ReportSection) -> ReportResult<()>;

    /// Called once after the last section.
    fn finish(&mut self) -> ReportResult<()>;
}

/// Writes the report as plain text, the same layout as `render_text`.
pub struct TextFileSink {
    path: PathBuf,
    file: Option<File>,
}

impl TextFileSink {
    pub fn create(path: impl Into<PathBuf>) -> ReportResult<Self> {
        let path = path.into();
        let mut file = File::create(&path)?;
        writeln!(file, "{REPORT_TITLE}")?;
        Ok(Self {
            path,
            file: Some(file),
        })
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl ReportSink for TextFileSink {
    fn write_section(&mut self, section: &ReportSection) -> ReportResult<()> {
        if let Some(file) = self.file.as_mut() {
            write!(file, "\n{}\n", section.render())?;
        }
        Ok(())
    }

    fn finish(&mut self) -> ReportResult<()> {
        if let Some(mut file) = self.file.take() {
            file.flush()?;
            log::info!("report: written to {}", self.path.display());
        }
        Ok(())
    }
}

/// Collects sections in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub sections: Vec<ReportSection>,
    pub finished: bool,
}

impl ReportSink for MemorySink {
    fn write_section(&mut self, section: &ReportSection) -> ReportResult<()> {
        self.sections.push(section.clone());
        Ok(())
    }

    fn finish(&mut self) -> ReportResult<()> {
        self.finished = true;
        Ok(())
    }
}
