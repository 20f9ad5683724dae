use draft_analysis_core::{
    record::Record,
    report::{DraftReport, MemorySink, TextFileSink, REPORT_TITLE},
};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn four_player_run() -> Vec<Record> {
    let mut records = Vec::new();
    for (sim, scores) in [(1, [10.0, 12.0, 30.0, 25.0]), (2, [5.0, 20.0, 8.0, 60.0])] {
        for (i, s) in scores.iter().enumerate() {
            records.push(Record::new(
                "1234",
                sim,
                i as u32 + 1,
                Some(*s),
                format!("leader{i}"),
                format!("lore{i}"),
            ));
        }
    }
    records
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[test]
fn sections_appear_in_report_order() {
    let text = DraftReport::build(&four_player_run()).render_text();
    assert!(text.starts_with(REPORT_TITLE));

    let positions: Vec<usize> = [
        "Average Final Score for Each Player (by Draft Order):",
        "Summary by Draft Order (Final Score):",
        "Maximum Player-vs-Group Score Differences (by Draft Order):",
        "Outliers (by Draft Order):",
    ]
    .iter()
    .map(|title| text.find(title).unwrap_or_else(|| panic!("missing {title}")))
    .collect();

    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn difference_section_lists_every_winner() {
    let report = DraftReport::build(&four_player_run());
    // diff3 (3p): sim1 = 8, sim2 = -17 -> sim 1
    // diff4:      sim1 = -27, sim2 = 27 -> sim 2
    // diff2:      sim1 = 2, sim2 = 15   -> sim 2
    let winners: Vec<(usize, &str, i64)> = report
        .findings
        .iter()
        .map(|f| (f.players, f.contrast, f.sim))
        .collect();
    assert_eq!(
        winners,
        vec![(3, "diff3", 1), (4, "diff4", 2), (4, "diff3", 1), (4, "diff2", 2)]
    );

    let text = report.render_text();
    assert!(text.contains("Draft Order: 1234 (3 players)\nSim #1: p3 - (p1+p2) = 8.00"));
    assert!(text.contains("Draft Order: 1234 (4 players)\nSim #2: p4 - (p1+p2+p3) = 27.00"));
    assert!(text.contains("Sim #2: p2 - p1 = 15.00\nScores: p1=5.00, p2=20.00, p3=8.00, p4=60.00"));
}

#[test]
fn empty_input_still_renders_every_heading() {
    let report = DraftReport::build(&[]);
    assert_eq!(report.record_count, 0);
    assert!(report.findings.is_empty());
    assert!(report.outliers.is_empty());

    let text = report.render_text();
    assert!(text.contains("Maximum Player-vs-Group Score Differences (by Draft Order):"));
    assert!(!text.contains("Sim #"));
}

#[test]
fn memory_sink_receives_all_sections() {
    let report = DraftReport::build(&four_player_run());
    let mut sink = MemorySink::default();
    report.write_to(&mut sink).unwrap();

    assert!(sink.finished);
    assert_eq!(sink.sections, report.sections());
    assert_eq!(sink.sections.len(), 4);
}

#[test]
fn text_file_sink_matches_rendered_text() {
    let report = DraftReport::build(&four_player_run());
    let path = std::env::temp_dir().join(format!("draft-report-{}.txt", std::process::id()));

    let mut sink = TextFileSink::create(&path).unwrap();
    report.write_to(&mut sink).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(written, report.render_text());
}

#[test]
fn json_export_carries_findings() {
    let report = DraftReport::build(&four_player_run());
    let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(value["record_count"], 8);
    let findings = value["findings"].as_array().unwrap();
    assert_eq!(findings.len(), 4);
    assert_eq!(findings[1]["contrast"], "diff4");
    assert_eq!(findings[1]["sim"], 2);
    assert_eq!(findings[1]["details"].as_array().unwrap().len(), 4);
}
