use super::support::{titled, titles};
use super::{date, IntegrationHarness};
use anyhow::Result;
use std::fs;
use trendlog::{StaticSource, TermRecord};

#[test]
fn first_run_of_day_persists_incoming_batch() -> Result<()> {
    let harness = IntegrationHarness::new();
    let pipeline = harness.pipeline();
    let day = date("2024-05-01");

    let summary = pipeline.run(&StaticSource::new(titled(&["A", "B"])), day)?;
    assert_eq!(summary.existing, 0);
    assert_eq!(summary.added, 2);
    assert_eq!(summary.total, 2);
    assert_eq!(
        summary.day_file,
        harness.workspace_path().join("raw").join("2024-05-01.json")
    );

    let stored = pipeline.store().load(day)?;
    assert_eq!(titles(&stored), vec!["A", "B"]);
    assert!(summary.overview_path.exists());
    assert!(summary.archive_path.exists());
    Ok(())
}

#[test]
fn second_run_appends_only_new_terms() -> Result<()> {
    let harness = IntegrationHarness::new();
    let pipeline = harness.pipeline();
    let day = date("2024-05-01");

    pipeline.run(&StaticSource::new(titled(&["A", "B"])), day)?;
    let summary = pipeline.run(&StaticSource::new(titled(&["B", "C"])), day)?;

    assert_eq!(summary.existing, 2);
    assert_eq!(summary.added, 1);
    assert_eq!(titles(&pipeline.store().load(day)?), vec!["A", "B", "C"]);
    Ok(())
}

#[test]
fn repeating_a_batch_leaves_day_file_byte_identical() -> Result<()> {
    let harness = IntegrationHarness::new();
    let pipeline = harness.pipeline();
    let day = date("2024-05-01");
    let source = StaticSource::new(titled(&["x", "y", "z"]));

    let first = pipeline.run(&source, day)?;
    let before = fs::read(&first.day_file)?;
    let second = pipeline.run(&source, day)?;
    let after = fs::read(&second.day_file)?;

    assert_eq!(second.added, 0);
    assert_eq!(before, after);
    Ok(())
}

#[test]
fn known_title_keeps_its_first_url() -> Result<()> {
    let harness = IntegrationHarness::new();
    let pipeline = harness.pipeline();
    let day = date("2024-05-01");

    pipeline.record(day, vec![TermRecord::linked("A", "https://first.example/a")])?;
    pipeline.record(
        day,
        vec![
            TermRecord::linked("A", "https://second.example/a"),
            TermRecord::titled("B"),
        ],
    )?;

    let stored = pipeline.store().load(day)?;
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].url.as_deref(), Some("https://first.example/a"));
    assert!(stored[1].url.is_none());
    Ok(())
}

#[test]
fn each_calendar_day_accumulates_separately() -> Result<()> {
    let harness = IntegrationHarness::new();
    let pipeline = harness.pipeline();

    pipeline.record(date("2024-05-01"), titled(&["A"]))?;
    pipeline.record(date("2024-05-02"), titled(&["A", "B"]))?;

    assert_eq!(titles(&pipeline.store().load(date("2024-05-01"))?), vec!["A"]);
    assert_eq!(
        titles(&pipeline.store().load(date("2024-05-02"))?),
        vec!["A", "B"]
    );
    Ok(())
}
