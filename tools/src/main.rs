//! draft-report: headless report generator for draft-simulation results.
//!
//! Usage:
//!   draft-report --input draft_simulation_results.csv --output report.txt
//!   draft-report --input results.csv --json report.json --columns columns.json

use anyhow::{Context, Result};
use draft_analysis_core::{
    config::ReportConfig,
    report::{DraftReport, TextFileSink},
    source::{CsvSource, RecordSource},
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let input = arg_value(&args, "--input").unwrap_or("draft_simulation_results.csv");
    let output = arg_value(&args, "--output").unwrap_or("draft_analysis_report.txt");
    let json = arg_value(&args, "--json");
    let columns = arg_value(&args, "--columns");

    println!("Draft Simulation Analysis: draft-report");
    println!("  input:     {input}");
    println!("  output:    {output}");
    println!("  json:      {}", json.unwrap_or("-"));
    println!("  generated: {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    println!();

    let config = match columns {
        Some(path) => ReportConfig::load(path)?,
        None => ReportConfig::default(),
    };

    let source = CsvSource::new(input, config.columns);
    let records = source
        .load()
        .with_context(|| format!("loading {}", source.describe()))?;

    let report = DraftReport::build(&records);

    let mut sink = TextFileSink::create(output)?;
    report.write_to(&mut sink)?;

    if let Some(path) = json {
        std::fs::write(path, report.to_json()?)
            .with_context(|| format!("writing {path}"))?;
        log::info!("report: JSON written to {path}");
    }

    print_summary(&report, output);
    Ok(())
}

fn print_summary(report: &DraftReport, output: &str) {
    println!("=== RUN SUMMARY ===");
    println!("  records:       {}", report.record_count);
    println!("  draft orders:  {}", report.summary.len());
    println!("  findings:      {}", report.findings.len());
    println!("  report:        {output}");

    if report.findings.is_empty() {
        println!("  (No draft order had a complete 3- or 4-player simulation)");
    } else {
        println!();
        println!("=== LARGEST DIFFERENCES ===");
        for f in &report.findings {
            println!(
                "  {} | {}p {} | Sim #{} | {:.2}",
                f.draft_order, f.players, f.formula, f.sim, f.value
            );
        }
    }
}

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
