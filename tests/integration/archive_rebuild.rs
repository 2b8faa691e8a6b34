use super::support::titled;
use super::{date, IntegrationHarness};
use anyhow::Result;
use std::fs;
use trendlog::config::ArchiveLayout;
use trendlog::TermRecord;

#[test]
fn rerendering_a_past_date_is_idempotent() -> Result<()> {
    let harness = IntegrationHarness::new();
    let pipeline = harness.pipeline();
    let day = date("2024-05-01");
    let records = vec![
        TermRecord::linked("A", "https://www.zhihu.com/search?q=A"),
        TermRecord::titled("B"),
    ];

    let first = pipeline.writer().write_archive(&records, day)?;
    let first_text = fs::read_to_string(&first)?;
    let second = pipeline.writer().write_archive(&records, day)?;
    let second_text = fs::read_to_string(&second)?;

    assert_eq!(first, second);
    assert_eq!(first_text, second_text);
    assert_eq!(
        first_text,
        "# 2024-05-01\n\nTotal: 2 terms\n\n<!-- BEGIN -->\n\
         1. [A](https://www.zhihu.com/search?q=A)\n\
         2. B\n\
         <!-- END -->\n"
    );
    Ok(())
}

#[test]
fn year_layout_buckets_archive_entries() -> Result<()> {
    let harness = IntegrationHarness::with_layout(ArchiveLayout::ByYear);
    let pipeline = harness.pipeline();

    let summary = pipeline.record(date("2023-12-31"), titled(&["A"]))?;
    assert_eq!(
        summary.archive_path,
        harness
            .workspace_path()
            .join("archives")
            .join("2023")
            .join("2023-12-31.md")
    );
    assert!(summary.archive_path.exists());
    Ok(())
}

#[test]
fn rebuild_renders_every_stored_day() -> Result<()> {
    let harness = IntegrationHarness::new();
    let pipeline = harness.pipeline();
    pipeline.record(date("2024-05-01"), titled(&["A"]))?;
    pipeline.record(date("2024-05-02"), titled(&["B", "C"]))?;

    let archives = harness.paths().archives_dir;
    fs::remove_dir_all(&archives)?;

    assert_eq!(pipeline.rebuild_archives()?, 2);
    let second = fs::read_to_string(archives.join("2024-05-02.md"))?;
    assert!(second.starts_with("# 2024-05-02\n\nTotal: 2 terms\n"));
    assert!(archives.join("2024-05-01.md").exists());
    Ok(())
}

#[test]
fn rebuild_without_history_is_a_no_op() -> Result<()> {
    let harness = IntegrationHarness::new();
    assert_eq!(harness.pipeline().rebuild_archives()?, 0);
    Ok(())
}
